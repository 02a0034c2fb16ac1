//! Scoring a recall attempt against its target text.

use crate::tokenizer::is_cjk;
use crate::types::{MatchPolicy, ScoreResult, Tier, Tone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Runs of ASCII word characters and apostrophes.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_']+").unwrap());

/// Message for a fuzzy target without any words.
pub const NO_WORDS_MESSAGE: &str =
    "The target text contains no recognizable words for fuzzy matching.";

/// Outcome of the cursor walk for one target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    pub word: String,
    /// Whether the word was found at or after the cursor in the attempt.
    pub matched: bool,
}

/// Score an attempt against the target using the given policy.
pub fn score(target: &str, attempt: &str, policy: MatchPolicy) -> ScoreResult {
    match policy {
        MatchPolicy::Strict => score_strict(target, attempt),
        MatchPolicy::Fuzzy => score_fuzzy(target, attempt),
    }
}

/// Positional character comparison after normalization.
///
/// Extra and missing characters are penalized alike since the denominator is
/// the longer of the two normalized strings.
pub fn score_strict(target: &str, attempt: &str) -> ScoreResult {
    let target_chars = normalize_strict(target);
    let attempt_chars = normalize_strict(attempt);

    let max_len = target_chars.len().max(attempt_chars.len());
    let percentage = if max_len == 0 {
        // Nothing to recall counts as a perfect recall.
        100
    } else {
        let matches = target_chars
            .iter()
            .zip(attempt_chars.iter())
            .filter(|(a, b)| a == b)
            .count();
        percentage(matches, max_len)
    };

    if percentage == 100 {
        ScoreResult::new(
            percentage,
            Tier::Perfect,
            Tone::Success,
            "Perfect Recall! (100% character match)",
        )
    } else if percentage >= 90 {
        ScoreResult::new(
            percentage,
            Tier::Excellent,
            Tone::Warning,
            "Excellent! Almost perfect, check for slight errors.",
        )
    } else {
        ScoreResult::new(
            percentage,
            Tier::Low,
            Tone::Error,
            format!(
                "Score: {}%. Try again for better character accuracy.",
                percentage
            ),
        )
    }
}

/// Order-respecting word recall.
pub fn score_fuzzy(target: &str, attempt: &str) -> ScoreResult {
    let alignment = align_words(target, attempt);

    if alignment.is_empty() {
        return ScoreResult::new(0, Tier::Low, Tone::Error, NO_WORDS_MESSAGE);
    }

    let hits = alignment.iter().filter(|w| w.matched).count();
    let percentage = percentage(hits, alignment.len());

    if percentage == 100 {
        ScoreResult::new(
            percentage,
            Tier::Perfect,
            Tone::Success,
            "Perfect Accuracy! (100% word match)",
        )
    } else if percentage >= 80 {
        ScoreResult::new(
            percentage,
            Tier::Excellent,
            Tone::Success,
            "Excellent! You got the main points and structure.",
        )
    } else if percentage >= 50 {
        ScoreResult::new(
            percentage,
            Tier::Partial,
            Tone::Warning,
            "Getting there. Try to recall more details.",
        )
    } else {
        ScoreResult::new(
            percentage,
            Tier::Low,
            Tone::Error,
            "Low word match accuracy. Try reading it again.",
        )
    }
}

/// Walk the target words in order, searching the attempt from a cursor.
///
/// A hit moves the cursor just past the matched attempt word; a miss leaves it
/// in place, so words recalled out of order are not counted twice.
pub fn align_words(target: &str, attempt: &str) -> Vec<WordMatch> {
    let target_words = extract_words(target);
    let attempt_words = extract_words(attempt);

    let mut cursor = 0;
    target_words
        .into_iter()
        .map(|word| {
            let found = attempt_words[cursor..].iter().position(|w| *w == word);
            if let Some(offset) = found {
                cursor += offset + 1;
            }
            WordMatch {
                word,
                matched: found.is_some(),
            }
        })
        .collect()
}

/// Keep ASCII word characters and CJK ideographs, lower-cased.
pub fn normalize_strict(s: &str) -> Vec<char> {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || is_cjk(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Extract lower-cased words made of ASCII word characters and apostrophes.
///
/// Apostrophes only count inside a word: `'tis` yields `tis` and `dogs'`
/// yields `dogs`, while `can't` is kept whole.
pub fn extract_words(s: &str) -> Vec<String> {
    let lowered = s.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// `round(100 * part / whole)` with halves rounded up. `whole` must be non-zero.
fn percentage(part: usize, whole: usize) -> u8 {
    let value = (200 * part + whole) / (2 * whole);
    value.min(100) as u8
}
