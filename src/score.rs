//! Scoring signals for language detection.
//!
//! The weights and thresholds below are fixed tuning parameters of the
//! algorithm, not configuration. They were calibrated together with the
//! permissive letter classification in [`crate::tokenize`].

use smallvec::SmallVec;

use crate::dataset::{Alphabet, FrequencyList};
use crate::detect::Prior;

/// Weight of the caller-supplied prior in both scoring paths.
pub const PRIOR_WEIGHT: f64 = 0.65;
/// Weight of the normalized word/bigram overlap.
pub const TOKEN_WEIGHT: f64 = 0.35;
/// Weight of the blended character signal.
pub const CHAR_WEIGHT: f64 = 0.2;

/// Word-path acceptance threshold.
pub const WORD_ACCEPT: f64 = 0.05;
/// Character-path acceptance threshold.
pub const CHAR_ACCEPT: f64 = 0.02;
/// Flat boost applied on a strong lexical hit.
pub const WORD_BOOST: f64 = 0.15;

// Blend of the two character signals inside CHAR_WEIGHT.
pub(crate) const CHAR_BLEND_OVERLAP: f64 = 0.6;
pub(crate) const CHAR_BLEND_FREQUENCY: f64 = 0.4;

// Character-overlap formula weights.
const COVERAGE_WEIGHT: f64 = 0.6;
const PENALTY_WEIGHT: f64 = 0.2;
const ALPHABET_COVERAGE_WEIGHT: f64 = 0.2;

const FREQ_TOTAL_FLOOR: f64 = 0.001;

/// Raw rank-weighted overlap between `tokens` and a frequency list.
///
/// Each token found verbatim in the list adds `1 / log2(rank + 1.5)`,
/// rank being its 0-based position; absent tokens add nothing.
pub fn overlap_tokens(tokens: &[String], list: &FrequencyList) -> f64 {
    if tokens.is_empty() || list.tokens.is_empty() {
        return 0.0;
    }
    let mut score = 0.0;
    for token in tokens {
        if let Some(rank) = list.tokens.iter().position(|t| t == token) {
            score += 1.0 / (rank as f64 + 1.5).log2();
        }
    }
    score
}

/// Normalizes a raw overlap against input length so longer inputs are not
/// rewarded for raw hit count.
#[inline]
pub fn length_normalize(overlap: f64, token_count: usize) -> f64 {
    overlap / (token_count as f64 + 3.0).sqrt()
}

/// Coverage-style overlap between the text's unique letters and an
/// alphabet's lowercase letters, floored at 0.
pub fn character_overlap(text_chars: &[u32], alphabet: &Alphabet) -> f64 {
    if text_chars.is_empty() || alphabet.lowercase.is_empty() {
        return 0.0;
    }

    // Unique first codepoints of the alphabet letters; multigraphs count
    // by their leading character.
    let mut alphabet_chars: SmallVec<[u32; 64]> = SmallVec::new();
    for letter in alphabet.lowercase {
        if let Some(ch) = letter.chars().next() {
            let cp = ch as u32;
            if !alphabet_chars.contains(&cp) {
                alphabet_chars.push(cp);
            }
        }
    }

    let mut matched = 0usize;
    let mut unmatched = 0usize;
    for cp in text_chars {
        if alphabet_chars.contains(cp) {
            matched += 1;
        } else {
            unmatched += 1;
        }
    }
    if matched == 0 {
        return 0.0;
    }

    let coverage = matched as f64 / text_chars.len() as f64;
    let penalty = unmatched as f64 / text_chars.len() as f64;
    let alphabet_coverage = matched as f64 / alphabet_chars.len() as f64;
    (coverage * COVERAGE_WEIGHT - penalty * PENALTY_WEIGHT
        + alphabet_coverage * ALPHABET_COVERAGE_WEIGHT)
        .max(0.0)
}

/// Frequency-weighted overlap. Characters without a table entry count on
/// neither side of the ratio.
pub fn frequency_overlap(text_chars: &[u32], alphabet: &Alphabet) -> f64 {
    if text_chars.is_empty() || alphabet.frequency.is_empty() {
        return 0.0;
    }
    let mut score = 0.0;
    let mut total = 0.0;
    for &cp in text_chars {
        let freq = alphabet.frequency_of(cp);
        if freq > 0.0 {
            score += freq;
            total += freq;
        }
    }
    if total > 0.0 {
        score / total.max(FREQ_TOTAL_FLOOR)
    } else {
        0.0
    }
}

/// Caller-supplied prior for `language`, 0.0 when absent.
pub fn prior_for(priors: &[Prior<'_>], language: &str) -> f64 {
    priors
        .iter()
        .find(|prior| prior.language == language)
        .map_or(0.0, |prior| prior.weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Alphabet, CharFrequency, FrequencyList, TokenMode};

    static LIST: FrequencyList = FrequencyList {
        language: "xx",
        mode: TokenMode::Word,
        tokens: &["alpha", "beta", "gamma"],
    };

    static ALPHA: Alphabet = Alphabet {
        language: "xx",
        script: "Latn",
        uppercase: &["A", "B"],
        lowercase: &["a", "b"],
        frequency: &[
            CharFrequency { ch: "a", freq: 0.5 },
            CharFrequency { ch: "b", freq: 0.25 },
        ],
        digits: &[],
    };

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn overlap_weights_by_rank() {
        let tokens = vec!["alpha".to_string()];
        close(overlap_tokens(&tokens, &LIST), 1.0 / 1.5f64.log2());

        let tokens = vec!["gamma".to_string()];
        close(overlap_tokens(&tokens, &LIST), 1.0 / 3.5f64.log2());
    }

    #[test]
    fn overlap_ignores_absent_tokens() {
        let tokens = vec!["delta".to_string(), "beta".to_string()];
        close(overlap_tokens(&tokens, &LIST), 1.0 / 2.5f64.log2());
        assert_eq!(overlap_tokens(&[], &LIST), 0.0);
    }

    #[test]
    fn length_normalization_divides_by_sqrt() {
        close(length_normalize(1.0, 1), 0.5);
        close(length_normalize(3.0, 6), 1.0);
    }

    #[test]
    fn character_overlap_formula() {
        // a and b match, c does not.
        let chars = ['a' as u32, 'b' as u32, 'c' as u32];
        let expected = (2.0 / 3.0) * 0.6 - (1.0 / 3.0) * 0.2 + (2.0 / 2.0) * 0.2;
        close(character_overlap(&chars, &ALPHA), expected);
    }

    #[test]
    fn character_overlap_edge_cases() {
        assert_eq!(character_overlap(&[], &ALPHA), 0.0);
        // No letter matches at all.
        assert_eq!(character_overlap(&['z' as u32], &ALPHA), 0.0);
    }

    #[test]
    fn frequency_overlap_counts_only_known_chars() {
        close(frequency_overlap(&['a' as u32, 'z' as u32], &ALPHA), 1.0);
        assert_eq!(frequency_overlap(&['z' as u32], &ALPHA), 0.0);
        assert_eq!(frequency_overlap(&[], &ALPHA), 0.0);
    }

    #[test]
    fn prior_lookup_is_exact() {
        let priors = [
            Prior { language: "fr", weight: 0.6 },
            Prior { language: "en", weight: 0.4 },
        ];
        close(prior_for(&priors, "fr"), 0.6);
        assert_eq!(prior_for(&priors, "de"), 0.0);
        assert_eq!(prior_for(&[], "fr"), 0.0);
    }
}
