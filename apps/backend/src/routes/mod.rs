//! HTTP route handlers

pub mod presets;
pub mod score;
pub mod text;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Reject text fields longer than the configured limit.
pub(crate) fn check_len(state: &AppState, field: &'static str, value: &str) -> Result<()> {
    let limit = state.config.max_text_len;
    let len = value.chars().count();
    if len > limit {
        return Err(ApiError::TextTooLong { field, len, limit });
    }
    Ok(())
}
