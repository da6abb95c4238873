//! Language detection over the bundled dataset.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::dataset::{self, FrequencyList, TokenMode};
use crate::{score, tokenize};

/// Caller-supplied prior weight for one language. Weights are
/// probability-like but no normalization is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prior<'a> {
    pub language: &'a str,
    pub weight: f64,
}

/// One ranked detection candidate. Scores are unbounded positive reals;
/// higher means more likely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectResult {
    pub language: &'static str,
    pub score: f64,
}

/// Options for [`detect_with`]. The default means: every language with a
/// frequency list, no priors, unlimited results.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectOptions<'a> {
    /// Candidate language codes; empty means full-corpus scan. Codes
    /// without a bundled frequency list are silently dropped.
    pub candidates: &'a [&'a str],
    /// Per-language prior weights; languages absent here get 0.0.
    pub priors: &'a [Prior<'a>],
    /// Keep only the best `top_k` results; 0 means all.
    pub top_k: usize,
}

/// Ranks every bundled language by plausibility for `text`.
pub fn detect(text: &str) -> Vec<DetectResult> {
    detect_with(text, &DetectOptions::default())
}

/// Ranks candidate languages by plausibility for `text`.
///
/// Empty text yields an empty ranking. Results are sorted by descending
/// score; the sort is stable, so equal scores keep candidate-scan order
/// (explicit candidate order, or dataset order for full-corpus scans).
pub fn detect_with(text: &str, options: &DetectOptions<'_>) -> Vec<DetectResult> {
    if text.is_empty() {
        return Vec::new();
    }

    let word_tokens = tokenize::word_tokens(text);
    let (chars, letters) = tokenize::collect_characters(text);
    let bigram_tokens = tokenize::bigram_tokens(&letters);

    let mut candidates: SmallVec<[&'static FrequencyList; 16]> = SmallVec::new();
    if options.candidates.is_empty() {
        candidates.extend(dataset::frequency_lists().iter());
    } else {
        for code in options.candidates {
            if let Some(list) = dataset::load_frequency_list(code) {
                candidates.push(list);
            }
        }
    }

    let mut results = Vec::new();
    for list in candidates {
        let tokens = match list.mode {
            TokenMode::Word => &word_tokens,
            TokenMode::Bigram => &bigram_tokens,
        };
        let mut overlap = score::overlap_tokens(tokens, list);
        if !tokens.is_empty() {
            overlap = score::length_normalize(overlap, tokens.len());
        }
        let prior = score::prior_for(options.priors, list.language);

        let word_score = score::PRIOR_WEIGHT * prior + score::TOKEN_WEIGHT * overlap;
        if word_score > score::WORD_ACCEPT {
            // Word evidence dominates; the character path is skipped.
            results.push(DetectResult {
                language: list.language,
                score: word_score + score::WORD_BOOST,
            });
            continue;
        }

        let Some(alphabet) = dataset::load_alphabet(list.language, None) else {
            continue;
        };
        if chars.is_empty() {
            continue;
        }
        let char_score = score::CHAR_BLEND_OVERLAP * score::character_overlap(&chars, alphabet)
            + score::CHAR_BLEND_FREQUENCY * score::frequency_overlap(&chars, alphabet);
        let final_score = score::PRIOR_WEIGHT * prior + score::CHAR_WEIGHT * char_score;
        if final_score > score::CHAR_ACCEPT {
            results.push(DetectResult {
                language: list.language,
                score: final_score,
            });
        }
    }

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    if options.top_k > 0 {
        results.truncate(options.top_k);
    }
    results
}
