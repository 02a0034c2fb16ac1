//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from recital-core
pub use recital_core::types::{
    DisplayMode, MatchPolicy, ScoreResult, Tier, Token, TokenKind, Tone, Visibility,
};
pub use recital_core::WordMatch;

use crate::services::library::Preset;

// === Text API Types ===

/// Request to tokenize a passage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeRequest {
    pub text: String,
}

/// Tokenized passage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub tokens: Vec<Token>,
    /// Speech recognition locale suited to the passage
    pub locale: String,
}

fn default_placeholder() -> char {
    '_'
}

/// Request to render a passage in a display mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub text: String,
    #[serde(default)]
    pub mode: DisplayMode,
    /// Blur intensity, validated against 0..=100 by the handler
    #[serde(default)]
    pub intensity: i64,
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
}

/// Token with its visibility for the requested mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedToken {
    #[serde(flatten)]
    pub token: Token,
    pub visibility: Visibility,
}

/// Rendered passage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub tokens: Vec<RenderedToken>,
    /// Plain-text rendering with hidden characters replaced by the placeholder
    pub masked: String,
    /// CSS blur radius in pixels for hidden tokens
    pub blur_radius: f32,
}

// === Score API Types ===

/// Request to score an attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub target: String,
    pub attempt: String,
    #[serde(default)]
    pub policy: MatchPolicy,
}

/// Score with per-word alignment for fuzzy matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Vec<WordMatch>>,
}

// === Preset API Types ===

/// Query parameters for the preset list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetQuery {
    pub category: Option<String>,
}

/// Preset without its content
#[derive(Debug, Clone, Serialize)]
pub struct PresetSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub policy: MatchPolicy,
    pub language: String,
}

impl From<&Preset> for PresetSummary {
    fn from(preset: &Preset) -> Self {
        Self {
            id: preset.id.clone(),
            title: preset.title.clone(),
            category: preset.category.clone(),
            policy: preset.policy,
            language: preset.language.clone(),
        }
    }
}

/// Preset list response
#[derive(Debug, Clone, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<PresetSummary>,
    pub categories: Vec<String>,
}

/// Full preset with derived details
#[derive(Debug, Clone, Serialize)]
pub struct PresetResponse {
    #[serde(flatten)]
    pub preset: Preset,
    pub locale: String,
    pub token_count: usize,
}
