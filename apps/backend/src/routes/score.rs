//! Scoring endpoint

use axum::{extract::State, Json};
use recital_core::{align_words, score};

use crate::error::Result;
use crate::models::*;
use crate::routes::check_len;
use crate::AppState;

/// POST /api/score
pub async fn check(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    check_len(&state, "target", &request.target)?;
    check_len(&state, "attempt", &request.attempt)?;

    let result = score(&request.target, &request.attempt, request.policy);
    let alignment = match request.policy {
        MatchPolicy::Fuzzy => Some(align_words(&request.target, &request.attempt)),
        MatchPolicy::Strict => None,
    };

    tracing::debug!(
        policy = request.policy.as_str(),
        percentage = result.percentage,
        "scored attempt"
    );

    Ok(Json(ScoreResponse { result, alignment }))
}
