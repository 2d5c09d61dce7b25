use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::db::{create_pool, ensure_schema};
use api::extraction::LocalExtractor;
use api::provider::HttpJobSource;
use api::routes::build_router;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the profile store table
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize the job-source provider client
    let job_source = Arc::new(HttpJobSource::new(
        config.jobsource_endpoint.clone(),
        config.jobsource_api_key.clone(),
    ));
    info!("Job-source client initialized ({})", config.jobsource_endpoint);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        job_source,
        extractor: Arc::new(LocalExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
