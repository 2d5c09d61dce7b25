//! Axum route handlers for the profile store.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{UserPreferences, UserProfile};
use crate::profiles::{get_profile, save_profile, StoredProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub user_id: String,
    pub saved: bool,
}

/// GET /api/v1/profile/:user_id
///
/// Returns the stored profile, or JSON `null` when the user has none yet.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<StoredProfile>>, AppError> {
    let stored = get_profile(&state.db, &user_id).await?;
    Ok(Json(stored))
}

/// POST /api/v1/profile/:user_id
///
/// Upserts the user's profile and preferences.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }

    save_profile(&state.db, &user_id, &request.profile, &request.preferences).await?;

    Ok(Json(SaveProfileResponse {
        user_id,
        saved: true,
    }))
}
