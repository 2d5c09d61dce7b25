//! Axum route handler for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::extraction::{extract_declared_skills, DocumentFormat};
use crate::profiles::get_profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Length of the extracted lower-cased text; 0 means extraction failed
    /// or the format is unsupported.
    pub text_length: usize,
    /// Declared profile skills found in the extracted text. Empty when the
    /// request names no user or the user has no stored profile.
    pub resume_skills: Vec<String>,
}

/// POST /api/v1/uploads
///
/// Multipart form: a `resume` file part (PDF, DOCX, or TXT) and an optional
/// `user_id` text part. Extraction failures degrade to empty text; only a
/// missing file part is a request error.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                file = Some((filename, bytes));
            }
            Some("user_id") => {
                user_id = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("missing 'resume' file part".to_string()))?;

    let text = match DocumentFormat::from_filename(&filename) {
        Some(format) => state.extractor.extract(&bytes, format),
        None => {
            warn!(%filename, "unsupported resume format; use PDF, DOCX, or TXT");
            String::new()
        }
    };

    let resume_skills = match &user_id {
        Some(id) => match get_profile(&state.db, id).await? {
            Some(stored) => {
                let declared: Vec<String> = stored
                    .profile
                    .hard_skills
                    .iter()
                    .chain(stored.profile.soft_skills.iter())
                    .cloned()
                    .collect();
                extract_declared_skills(&text, &declared)
            }
            None => Vec::new(),
        },
        None => Vec::new(),
    };

    Ok(Json(UploadResponse {
        text_length: text.len(),
        resume_skills,
    }))
}
