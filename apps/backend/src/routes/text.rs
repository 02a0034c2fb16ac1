//! Tokenize and render endpoints

use axum::{extract::State, Json};
use recital_core::visibility::MAX_INTENSITY;
use recital_core::{blur_radius, mask_text, recognition_locale, resolve_all, tokenize};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::check_len;
use crate::AppState;

/// POST /api/tokenize
pub async fn tokenize_text(
    State(state): State<AppState>,
    Json(request): Json<TokenizeRequest>,
) -> Result<Json<TokenizeResponse>> {
    check_len(&state, "text", &request.text)?;

    let tokens = tokenize(&request.text);
    tracing::debug!(tokens = tokens.len(), "tokenized passage");

    Ok(Json(TokenizeResponse {
        tokens,
        locale: recognition_locale(&request.text).to_string(),
    }))
}

/// POST /api/render
pub async fn render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>> {
    check_len(&state, "text", &request.text)?;

    let intensity = u8::try_from(request.intensity)
        .ok()
        .filter(|value| *value <= MAX_INTENSITY)
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "intensity must be between 0 and {}, got {}",
                MAX_INTENSITY, request.intensity
            ))
        })?;

    let tokens = tokenize(&request.text);
    let visibilities = resolve_all(&tokens, request.mode, intensity);
    let masked = mask_text(&tokens, request.mode, intensity, request.placeholder);

    tracing::debug!(
        mode = request.mode.as_str(),
        intensity,
        tokens = tokens.len(),
        "rendered passage"
    );

    Ok(Json(RenderResponse {
        tokens: tokens
            .into_iter()
            .zip(visibilities)
            .map(|(token, visibility)| RenderedToken { token, visibility })
            .collect(),
        masked,
        blur_radius: blur_radius(intensity),
    }))
}
