pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route(
            "/api/v1/analysis/:resume_id",
            get(analysis::handle_get_report),
        )
        // Extraction API
        .route("/api/v1/extraction", post(extraction::handle_extract))
        // Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::format_scorer::tests::well_formed_resume;
    use crate::config::{Config, LlmConfig};
    use crate::extraction::tests::SAMPLE_RESUME;
    use crate::llm_client::DisabledProvider;

    fn test_state() -> AppState {
        AppState {
            db: None,
            llm: Arc::new(DisabledProvider),
            config: Config {
                database_url: None,
                llm: LlmConfig::default(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "ats-api");
        assert_eq!(body["persistence"], false);
    }

    #[tokio::test]
    async fn test_analysis_without_database() {
        let (status, body) = send(post_json(
            "/api/v1/analysis",
            json!({ "resume_text": well_formed_resume() }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stored"], false);
        assert_eq!(body["report"]["atsScore"], 90);
        assert_eq!(body["report"]["formatScore"], 100);
        assert_eq!(body["format"]["score"], 100);
        assert_eq!(body["partial_keywords"], json!([]));
    }

    #[tokio::test]
    async fn test_analysis_rejects_empty_document() {
        let (status, body) =
            send(post_json("/api/v1/analysis", json!({ "resume_text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Cannot analyze an empty document");
    }

    #[tokio::test]
    async fn test_stored_report_needs_database() {
        let request = Request::builder()
            .uri("/api/v1/analysis/6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PERSISTENCE_DISABLED");
    }

    #[tokio::test]
    async fn test_extraction_endpoint() {
        let (status, body) = send(post_json(
            "/api/v1/extraction",
            json!({ "resume_text": SAMPLE_RESUME }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["jobTitles"]
            .as_array()
            .unwrap()
            .contains(&json!("Senior Backend Engineer")));
        assert!(body["projects"].as_array().unwrap().contains(&json!("LedgerLite")));
    }

    #[tokio::test]
    async fn test_interview_endpoint_uses_templates_without_ai() {
        let (status, body) = send(post_json(
            "/api/v1/interview/questions",
            json!({ "resume_text": SAMPLE_RESUME, "job_title": "Staff Engineer" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personalized"], false);
        let questions = body["questions"].as_array().unwrap();
        assert!(!questions.is_empty() && questions.len() <= 10);
        assert!(questions[0]["question"].as_str().unwrap().contains("Stripe Inc"));
    }
}
