//! Axum route handler for the resume-aware match refiner.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::{compute_match, MatchResult, DEFAULT_THRESHOLD};
use crate::models::posting::Posting;
use crate::state::AppState;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job: Posting,
    pub resume_text: String,
    #[serde(default)]
    pub cover_text: Option<String>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// POST /api/v1/match
///
/// Scores one job description against one resume (and optionally a cover
/// letter). Advisory only: a below-threshold score returns tweak
/// suggestions, never an error.
pub async fn handle_match(
    State(_state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&request.threshold) {
        return Err(AppError::Validation(
            "threshold must be between 0.0 and 1.0".to_string(),
        ));
    }

    let result = compute_match(
        &request.job.description,
        &request.resume_text,
        request.cover_text.as_deref(),
        request.threshold,
    );

    Ok(Json(result))
}
