mod prop_tests {
    use crate::{DetectOptions, detect, detect_with, find_by_keycode, find_by_keycode_into, tokenize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn word_tokens_are_unique_folded_letters(s in ".{0,200}") {
            let tokens = tokenize::word_tokens(&s);
            for (i, token) in tokens.iter().enumerate() {
                prop_assert!(!token.is_empty());
                prop_assert!(!tokens[..i].contains(token));
                prop_assert!(token.chars().all(|c| c.is_ascii_alphabetic() || !c.is_ascii()));
                prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
            }
        }

        #[test]
        fn bigrams_require_two_letters(s in ".{0,200}") {
            let (_, sequence) = tokenize::collect_characters(&s);
            let bigrams = tokenize::bigram_tokens(&sequence);
            if sequence.len() < 2 {
                prop_assert!(bigrams.is_empty());
            }
            for (i, bigram) in bigrams.iter().enumerate() {
                prop_assert_eq!(bigram.chars().count(), 2);
                prop_assert!(!bigrams[..i].contains(bigram));
            }
        }

        #[test]
        fn unique_characters_are_a_subset_of_the_sequence(s in ".{0,200}") {
            let (unique, sequence) = tokenize::collect_characters(&s);
            for (i, cp) in unique.iter().enumerate() {
                prop_assert!(!unique[..i].contains(cp));
                prop_assert!(sequence.contains(cp));
            }
            prop_assert!(unique.len() <= sequence.len());
        }

        #[test]
        fn detection_is_a_pure_function(s in ".{0,120}") {
            prop_assert_eq!(detect(&s), detect(&s));
        }

        #[test]
        fn top_k_is_a_prefix_of_the_full_ranking(s in ".{0,120}", k in 0usize..8) {
            let all = detect_with(&s, &DetectOptions::default());
            let options = DetectOptions { top_k: k, ..Default::default() };
            let limited = detect_with(&s, &options);
            if k == 0 {
                prop_assert_eq!(limited, all);
            } else {
                prop_assert_eq!(limited.as_slice(), &all[..k.min(all.len())]);
            }
        }

        #[test]
        fn bounded_scan_is_a_prefix_of_unbounded(keycode in 0u16..0x70, capacity in 0usize..8) {
            let unbounded = find_by_keycode(keycode, "base").unwrap();

            let mut buffer = vec![None; capacity];
            let written = find_by_keycode_into(keycode, "base", &mut buffer);
            prop_assert_eq!(written, capacity.min(unbounded.len()));
            for (slot, expected) in buffer[..written].iter().zip(&unbounded) {
                prop_assert_eq!(slot.as_ref(), Some(expected));
            }
            for slot in &buffer[written..] {
                prop_assert!(slot.is_none());
            }
        }
    }
}
