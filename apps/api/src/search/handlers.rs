//! Axum route handlers for the search pipeline.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::posting::ScoredPosting;
use crate::models::profile::{UserPreferences, UserProfile};
use crate::search::aggregator::QueryFailure;
use crate::search::{report, run_search};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub user_preferences: UserPreferences,
    /// Per-request override of the configured per-query result limit.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Eligible postings in rank order.
    pub matches: Vec<ScoredPosting>,
    /// Postings removed by the work-authorization screen, with reasons.
    pub ineligible: Vec<ScoredPosting>,
    pub query_failures: Vec<QueryFailure>,
    /// Plain-text digest of the run.
    pub report: String,
}

/// POST /api/v1/search
///
/// Runs the full pipeline for the supplied profile and preferences. A
/// profile without target titles yields an empty result set, not an error.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let run_id = Uuid::new_v4();

    let mut defaults = state.config.search.clone();
    if let Some(limit) = request.limit.filter(|l| *l > 0) {
        defaults.result_limit = limit;
    }

    tracing::info!(%run_id, titles = request.user_profile.target_titles.len(), "starting search run");

    let outcome = run_search(
        state.job_source.as_ref(),
        &request.user_profile,
        &request.user_preferences,
        &defaults,
    )
    .await;

    let report = report::render_text(&request.user_profile.name, &outcome);
    let (matches, ineligible): (Vec<ScoredPosting>, Vec<ScoredPosting>) = outcome
        .results
        .iter()
        .cloned()
        .partition(|r| r.is_eligible());

    Ok(Json(SearchResponse {
        run_id,
        generated_at: Utc::now(),
        matches,
        ineligible,
        query_failures: outcome.failures,
        report,
    }))
}
