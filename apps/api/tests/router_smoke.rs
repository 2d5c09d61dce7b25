//! Drives the real router end to end with stub collaborators and a lazy
//! (never-connected) database pool. Anything that would touch Postgres is
//! out of scope here; these tests cover routing, extraction of request
//! bodies, and handler wiring for the pure endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api::config::{Config, SearchDefaults};
use api::extraction::{DocumentExtractor, DocumentFormat};
use api::provider::{JobSourceProvider, ProviderError, RawPostings};
use api::routes::build_router;
use api::search::query_builder::SearchQuery;
use api::state::AppState;

struct CannedProvider {
    records: RawPostings,
}

#[async_trait]
impl JobSourceProvider for CannedProvider {
    async fn search(&self, _query: &SearchQuery) -> Result<RawPostings, ProviderError> {
        Ok(self.records.clone())
    }
}

struct PassthroughExtractor;

impl DocumentExtractor for PassthroughExtractor {
    fn extract(&self, bytes: &[u8], _format: DocumentFormat) -> String {
        String::from_utf8_lossy(bytes).to_lowercase()
    }
}

fn test_state(records: RawPostings) -> AppState {
    let config = Config {
        database_url: "postgres://unused".into(),
        jobsource_api_key: "test-key".into(),
        jobsource_endpoint: "http://unused.invalid".into(),
        port: 0,
        rust_log: "info".into(),
        search: SearchDefaults::default(),
    };
    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    AppState {
        db,
        config,
        job_source: Arc::new(CannedProvider { records }),
        extractor: Arc::new(PassthroughExtractor),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_router(test_state(vec![]));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn match_endpoint_scores_a_pair() {
    let app = build_router(test_state(vec![]));
    let payload = json!({
        "job": { "title": "ETL Engineer", "description": "Build ETL pipelines with Airflow" },
        "resume_text": "I build ETL pipelines with Airflow daily",
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/match")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["coverage"], 1.0);
    assert!(body["score"].as_f64().unwrap() >= 0.70);
    assert!(body["tweaks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn match_endpoint_rejects_empty_resume() {
    let app = build_router(test_state(vec![]));
    let payload = json!({
        "job": { "description": "anything" },
        "resume_text": "   ",
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/match")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn search_endpoint_runs_pipeline_with_provider() {
    let records = vec![
        json!({
            "id": "a", "job_title": "Data Analyst",
            "company_name": "Acme",
            "description": "Use SQL and Python daily",
            "final_url": "https://jobs.example/a",
        }),
        json!({
            "id": "b", "job_title": "Data Analyst",
            "company_name": "Beta",
            "description": "Excel only",
        }),
    ];
    let app = build_router(test_state(records));
    let payload = json!({
        "user_profile": {
            "name": "Ben",
            "target_titles": ["Data Analyst"],
            "hard_skills": ["SQL", "Python"],
            "visa_status": "citizen",
        },
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["score"], 2);
    assert_eq!(matches[0]["company"], "Acme");
    assert_eq!(
        matches[0]["matched_skills"],
        json!(["python", "sql"])
    );
    assert!(body["ineligible"].as_array().unwrap().is_empty());
    assert!(body["report"].as_str().unwrap().contains("Ben"));
}

#[tokio::test]
async fn search_with_no_titles_returns_empty_result() {
    let app = build_router(test_state(vec![]));
    let payload = json!({ "user_profile": { "name": "Ben" } });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["matches"].as_array().unwrap().is_empty());
    assert!(body["query_failures"].as_array().unwrap().is_empty());
}
