//! Core recital library shared by host applications.
//!
//! Provides:
//! - Tokenizer for mixed CJK / Latin passages
//! - Visibility rules for the study, blur and initials display modes
//! - Attempt scoring (strict character match, fuzzy word recall)
//! - Speech recognition capability seam and practice session state

pub mod error;
pub mod matching;
pub mod session;
pub mod speech;
pub mod tokenizer;
pub mod types;
pub mod visibility;

pub use error::{Result, SpeechError};
pub use matching::{align_words, extract_words, normalize_strict, score, score_fuzzy, score_strict, WordMatch};
pub use session::Session;
pub use speech::{join_transcript, listen, recognition_locale, SpeechEvent, SpeechRecognizer};
pub use tokenizer::{contains_cjk, detokenize, is_cjk, is_punctuation, tokenize};
pub use types::{DisplayMode, MatchPolicy, ScoreResult, Tier, Token, TokenKind, Tone, Visibility};
pub use visibility::{blur_radius, mask_text, resolve_all, resolve_visibility, snap_intensity};
