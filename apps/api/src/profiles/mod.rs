//! Profile store collaborator: one JSON document of profile + preferences
//! per user id. The search core only ever reads a profile for a run; writes
//! happen through the save endpoint.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::warn;

use crate::models::profile::{UserPreferences, UserProfile};

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: String,
    profile: serde_json::Value,
    preferences: serde_json::Value,
    updated_at: DateTime<Utc>,
}

/// A stored profile, decoded into the core's typed shapes.
#[derive(Debug, Clone, Serialize)]
pub struct StoredProfile {
    pub user_id: String,
    pub profile: UserProfile,
    pub preferences: UserPreferences,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for StoredProfile {
    fn from(row: ProfileRow) -> Self {
        // A malformed stored document degrades to defaults rather than
        // failing the whole request.
        let profile = serde_json::from_value(row.profile).unwrap_or_else(|e| {
            warn!(user_id = %row.user_id, "stored profile document is malformed: {e}");
            UserProfile::default()
        });
        let preferences = serde_json::from_value(row.preferences).unwrap_or_else(|e| {
            warn!(user_id = %row.user_id, "stored preferences document is malformed: {e}");
            UserPreferences::default()
        });
        StoredProfile {
            user_id: row.user_id,
            profile,
            preferences,
            updated_at: row.updated_at,
        }
    }
}

/// Fetches a user's stored profile, or `None` when nothing is saved yet.
pub async fn get_profile(pool: &PgPool, user_id: &str) -> Result<Option<StoredProfile>, sqlx::Error> {
    let row: Option<ProfileRow> = sqlx::query_as(
        "SELECT user_id, profile, preferences, updated_at FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(StoredProfile::from))
}

/// Saves (upserts) a user's profile and preferences.
pub async fn save_profile(
    pool: &PgPool,
    user_id: &str,
    profile: &UserProfile,
    preferences: &UserPreferences,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, profile, preferences, updated_at)
        VALUES ($1, $2, $3, now())
        ON CONFLICT (user_id)
        DO UPDATE SET profile = $2, preferences = $3, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(serde_json::to_value(profile).unwrap_or_default())
    .bind(serde_json::to_value(preferences).unwrap_or_default())
    .execute(pool)
    .await?;

    Ok(())
}
