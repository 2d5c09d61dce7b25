use anyhow::{Context, Result};

/// Search-run defaults. Documented defaults: 25 results per query, 30-day
/// recency window. Both are env-overridable and per-user-preference
/// overridable at query-build time.
#[derive(Debug, Clone)]
pub struct SearchDefaults {
    pub result_limit: u32,
    pub max_age_days: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            result_limit: 25,
            max_age_days: 30,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jobsource_api_key: String,
    pub jobsource_endpoint: String,
    pub port: u16,
    pub rust_log: String,
    pub search: SearchDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jobsource_api_key: require_env("JOBSOURCE_API_KEY")?,
            jobsource_endpoint: std::env::var("JOBSOURCE_ENDPOINT")
                .unwrap_or_else(|_| "https://api.theirstack.com/v1/jobs/search".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            search: SearchDefaults {
                result_limit: parse_env_or("SEARCH_RESULT_LIMIT", 25)?,
                max_age_days: parse_env_or("SEARCH_MAX_AGE_DAYS", 30)?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .with_context(|| format!("{key} must be a positive integer")),
        Err(_) => Ok(default),
    }
}
