//! Turns raw text into word tokens, letter sequences and bigrams.
//!
//! Letter classification is deliberately permissive: ASCII alphabetic
//! characters count, and every non-ASCII codepoint counts. Scoring
//! constants downstream are tuned against this classification, so it must
//! not be swapped for a Unicode-correct one. Only ASCII is case-folded.

use crate::codec;

#[inline]
pub(crate) fn is_letter(cp: u32) -> bool {
    if cp < 128 {
        (cp as u8).is_ascii_alphabetic()
    } else {
        true
    }
}

#[inline]
fn fold_ascii(cp: u32) -> u32 {
    if cp < 128 {
        u32::from((cp as u8).to_ascii_lowercase())
    } else {
        cp
    }
}

#[inline]
fn push_scalar(run: &mut String, cp: u32) {
    // Input arrives as &str, so decoded values are always scalars.
    if let Some(ch) = char::from_u32(cp) {
        run.push(ch);
    }
}

fn flush_token(tokens: &mut Vec<String>, run: &mut String) {
    if run.is_empty() {
        return;
    }
    if tokens.iter().any(|t| t == run) {
        run.clear();
    } else {
        tokens.push(std::mem::take(run));
    }
}

/// Unique lowercase word tokens in insertion order, first seen wins.
///
/// Contiguous letter runs form tokens; any non-letter flushes the current
/// run. A repeated word contributes no second token.
pub fn word_tokens(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut idx = 0;
    while idx < bytes.len() {
        let (cp, used) = codec::decode(bytes, idx);
        idx += used.max(1);
        let cp = fold_ascii(cp);
        if is_letter(cp) {
            push_scalar(&mut run, cp);
        } else {
            flush_token(&mut tokens, &mut run);
        }
    }
    flush_token(&mut tokens, &mut run);
    tokens
}

/// Folded letter codepoints of `text`: the unique set in first-seen order,
/// and the full sequence (duplicates kept) for bigram construction.
pub fn collect_characters(text: &str) -> (Vec<u32>, Vec<u32>) {
    let bytes = text.as_bytes();
    let mut unique = Vec::new();
    let mut sequence = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        let (cp, used) = codec::decode(bytes, idx);
        idx += used.max(1);
        let cp = fold_ascii(cp);
        if is_letter(cp) {
            if !unique.contains(&cp) {
                unique.push(cp);
            }
            sequence.push(cp);
        }
    }
    (unique, sequence)
}

/// Unique two-codepoint tokens over every adjacent pair of `codepoints`.
///
/// Sequences shorter than two yield nothing.
pub fn bigram_tokens(codepoints: &[u32]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    for pair in codepoints.windows(2) {
        push_scalar(&mut run, pair[0]);
        push_scalar(&mut run, pair[1]);
        flush_token(&mut tokens, &mut run);
    }
    tokens
}
