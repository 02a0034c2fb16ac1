//! Error types for recital-core.

use thiserror::Error;

/// Result type alias using SpeechError.
pub type Result<T> = std::result::Result<T, SpeechError>;

/// Errors reported by a host-provided speech capability.
///
/// None of these are fatal to the core; scoring and masking keep working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported on this host")]
    Unavailable,

    #[error("speech recognition failed: {0}")]
    Recognition(String),
}
