use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::provider::JobSourceProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable job-source collaborator. HTTP in production, stubs in tests.
    pub job_source: Arc<dyn JobSourceProvider>,
    /// Pluggable resume-text extractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
