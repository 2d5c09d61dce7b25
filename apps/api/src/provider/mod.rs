//! Job-source provider client — the single point of contact with the
//! third-party posting search API.
//!
//! The rest of the service depends only on [`JobSourceProvider`]; the HTTP
//! implementation lives here and is swapped for a stub in tests. A provider
//! failure is an ordinary value, not a panic: the aggregation layer records
//! it and continues with the remaining queries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::search::query_builder::SearchQuery;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider reported: {0}")]
    Reported(String),

    #[error("provider response missing 'data' array")]
    MissingData,

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Raw posting records for one query. Records stay as untyped JSON; the
/// normalizer owns field resolution.
pub type RawPostings = Vec<Value>;

#[async_trait]
pub trait JobSourceProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<RawPostings, ProviderError>;
}

/// HTTPS implementation: authenticated POST of the serialized filter body.
/// Retries on 429 and 5xx with exponential backoff.
pub struct HttpJobSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpJobSource {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
        }
    }

    /// Extracts the `data` array from a provider envelope. An `error` field
    /// or a missing array is a recorded failure, never a crash.
    fn parse_envelope(body: Value) -> Result<RawPostings, ProviderError> {
        if let Some(message) = body.get("error") {
            let message = message
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| message.to_string());
            return Err(ProviderError::Reported(message));
        }
        match body.get("data").and_then(Value::as_array) {
            Some(records) => Ok(records.clone()),
            None => Err(ProviderError::MissingData),
        }
    }
}

#[async_trait]
impl JobSourceProvider for HttpJobSource {
    async fn search(&self, query: &SearchQuery) -> Result<RawPostings, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    query = %query.label,
                    "provider call attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(query)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ProviderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!(query = %query.label, "provider returned {}: {}", status, body);
                last_error = Some(ProviderError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body: Value = response.json().await?;
            let records = Self::parse_envelope(body)?;

            debug!(query = %query.label, count = records.len(), "provider returned postings");
            return Ok(records);
        }

        Err(last_error.unwrap_or(ProviderError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}
