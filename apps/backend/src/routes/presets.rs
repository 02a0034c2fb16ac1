//! Preset library endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use recital_core::{recognition_locale, tokenize};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/presets
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PresetQuery>,
) -> Result<Json<PresetListResponse>> {
    let presets = match query.category.as_deref() {
        Some(category) => state
            .library
            .by_category(category)
            .map(PresetSummary::from)
            .collect(),
        None => state.library.all().iter().map(PresetSummary::from).collect(),
    };

    Ok(Json(PresetListResponse {
        presets,
        categories: state.library.categories(),
    }))
}

/// GET /api/presets/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PresetResponse>> {
    let preset = state
        .library
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("preset {}", id)))?;

    Ok(Json(PresetResponse {
        locale: recognition_locale(&preset.content).to_string(),
        token_count: tokenize(&preset.content).len(),
        preset: preset.clone(),
    }))
}
