pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as upload_handlers;
use crate::matching::handlers as match_handlers;
use crate::profiles::handlers as profile_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile store
        .route(
            "/api/v1/profile/:user_id",
            get(profile_handlers::handle_get_profile).post(profile_handlers::handle_save_profile),
        )
        // Search pipeline
        .route("/api/v1/search", post(search_handlers::handle_search))
        // Resume-aware match refiner
        .route("/api/v1/match", post(match_handlers::handle_match))
        // Resume upload + skill extraction
        .route("/api/v1/uploads", post(upload_handlers::handle_upload))
        .with_state(state)
}
