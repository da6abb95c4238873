#[cfg(test)]
mod integration_tests {

    use crate::{
        DetectOptions, Prior, detect, detect_with, find_by_keycode, find_by_keycode_into,
        load_alphabet, load_frequency_list,
    };

    #[test]
    fn french_greeting_with_priors() {
        let priors = [
            Prior { language: "fr", weight: 0.6 },
            Prior { language: "en", weight: 0.4 },
        ];
        let options = DetectOptions {
            candidates: &["fr", "en"],
            priors: &priors,
            top_k: 2,
        };
        let results = detect_with("bonjour le monde", &options);

        assert!(!results.is_empty());
        assert!(results.len() <= 2);
        assert_eq!(results[0].language, "fr");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn french_greeting_full_corpus() {
        let results = detect("bonjour le monde");
        assert_eq!(results[0].language, "fr");
    }

    #[test]
    fn japanese_is_detected_via_bigrams() {
        let results = detect("こんにちは");
        assert_eq!(results[0].language, "ja");
    }

    #[test]
    fn cyrillic_falls_back_to_character_signals() {
        // No bundled Russian stopword appears here, so the word path
        // stays silent and the alphabet has to carry the decision.
        let results = detect("привет мир");
        assert_eq!(results[0].language, "ru");
    }

    #[test]
    fn empty_text_yields_empty_ranking() {
        assert!(detect("").is_empty());

        let options = DetectOptions {
            candidates: &["fr", "en"],
            ..Default::default()
        };
        assert!(detect_with("", &options).is_empty());
    }

    #[test]
    fn letterless_text_yields_empty_ranking() {
        assert!(detect("12345 678 !?").is_empty());
    }

    #[test]
    fn unknown_candidates_are_dropped_silently() {
        let options = DetectOptions {
            candidates: &["zzz", "fr"],
            ..Default::default()
        };
        let results = detect_with("bonjour le monde", &options);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].language, "fr");
    }

    #[test]
    fn detection_is_idempotent() {
        let text = "bonjour le monde et toute la famille";
        assert_eq!(detect(text), detect(text));
    }

    #[test]
    fn top_k_truncates_the_full_ranking() {
        let text = "bonjour le monde";
        let all = detect_with(text, &DetectOptions::default());
        assert!(all.len() > 1);

        for k in 1..=all.len() {
            let options = DetectOptions { top_k: k, ..Default::default() };
            assert_eq!(detect_with(text, &options), all[..k]);
        }
    }

    #[test]
    fn french_alphabet_is_complete() {
        let fr = load_alphabet("fr", Some("Latn")).unwrap();
        assert!(fr.uppercase.len() > 20);
        assert!(fr.lowercase.len() > 20);
        assert!(!fr.frequency.is_empty());
        assert_eq!(fr.digits.len(), 10);
    }

    #[test]
    fn missing_frequency_list_is_not_found() {
        assert!(load_frequency_list("zzz").is_none());
    }

    #[test]
    fn azerty_scan_with_small_buffer() {
        let unbounded = find_by_keycode(0x04, "base").unwrap();

        let mut buffer = [None; 2];
        let written = find_by_keycode_into(0x04, "base", &mut buffer);
        assert!(written <= 2);
        if unbounded.len() >= 2 {
            assert_eq!(written, 2);
        }
        for (slot, expected) in buffer[..written].iter().zip(&unbounded) {
            assert_eq!(slot.as_ref(), Some(expected));
        }
    }
}
