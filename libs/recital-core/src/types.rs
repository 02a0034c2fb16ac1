//! Core types for the recital engine.

use serde::{Deserialize, Serialize};

/// Kind of a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Run of non-CJK, non-punctuation, non-space characters.
    Word,
    /// Single CJK ideograph.
    CjkChar,
    Punctuation,
    Space,
    Newline,
}

/// A single token of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    /// Position of the token in its sequence.
    pub index: usize,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>, index: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            index,
        }
    }

    /// Split the content into its first character and the remainder.
    ///
    /// This is what an initial-only token shows and masks.
    pub fn initial(&self) -> (&str, &str) {
        match self.content.chars().next() {
            Some(first) => self.content.split_at(first.len_utf8()),
            None => ("", ""),
        }
    }

    /// Content length in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Display mode selected by the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Study,
    Blur,
    Initials,
    Test,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Study
    }
}

impl DisplayMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Blur => "blur",
            Self::Initials => "initials",
            Self::Test => "test",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "study" => Some(Self::Study),
            "blur" => Some(Self::Blur),
            "initials" => Some(Self::Initials),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Per-token visibility derived for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
    /// Show the first character, mask the rest.
    InitialOnly,
}

/// How an attempt is compared against its target text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Positional character comparison (poetry, classical prose).
    Strict,
    /// Order-respecting word recall (speeches, prose).
    Fuzzy,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

impl MatchPolicy {
    /// Get the policy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "strict" => Some(Self::Strict),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Qualitative verdict attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Perfect,
    Excellent,
    Partial,
    Low,
}

/// Feedback severity used by hosts for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// Result of scoring an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score between 0 and 100.
    pub percentage: u8,
    pub tier: Tier,
    pub tone: Tone,
    pub message: String,
}

impl ScoreResult {
    pub fn new(percentage: u8, tier: Tier, tone: Tone, message: impl Into<String>) -> Self {
        Self {
            percentage,
            tier,
            tone,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_splits_on_char_boundary() {
        let token = Token::new(TokenKind::Word, "école", 0);
        assert_eq!(token.initial(), ("é", "cole"));

        let empty = Token::new(TokenKind::Word, "", 0);
        assert_eq!(empty.initial(), ("", ""));
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(Token::new(TokenKind::Word, "naïve", 0).char_len(), 5);
        assert_eq!(Token::new(TokenKind::CjkChar, "愛", 0).char_len(), 1);
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [
            DisplayMode::Study,
            DisplayMode::Blur,
            DisplayMode::Initials,
            DisplayMode::Test,
        ] {
            assert_eq!(DisplayMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::from_str("type"), None);
    }

    #[test]
    fn policy_parse() {
        assert_eq!(MatchPolicy::from_str("strict"), Some(MatchPolicy::Strict));
        assert_eq!(MatchPolicy::from_str("fuzzy"), Some(MatchPolicy::Fuzzy));
        assert_eq!(MatchPolicy::from_str("loose"), None);
        assert_eq!(MatchPolicy::default(), MatchPolicy::Strict);
    }
}
