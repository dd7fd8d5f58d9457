// 🌐 HTTP API - axum router over the analysis pipeline
//
// Stateless: every request runs a fresh analysis on the posted text.

use crate::analyzer::{analyze, SAMPLE_LOG};
use crate::error::AnalysisError;
use crate::parser::SUPPORTED_FORMATS;
use crate::report::Report;
use crate::rules::RuleEngine;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: &AnalysisError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: error.code(),
                message: error.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SampleResponse {
    pub text: &'static str,
    pub formats: &'static [&'static str],
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/analyze - Analyze a task log
async fn analyze_log(Json(request): Json<AnalyzeRequest>) -> Response {
    match analyze(&request.text) {
        Ok(analysis) => {
            info!(categories = analysis.records.len(), "analyze request served");
            (StatusCode::OK, Json(ApiResponse::ok(Report::from_analysis(&analysis)))).into_response()
        }
        Err(e) => {
            if let AnalysisError::Processing(detail) = &e {
                warn!(detail = %detail, "analysis failed");
            }
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<Report>::err(&e)),
            )
                .into_response()
        }
    }
}

/// GET /api/sample - Demo log and supported tag formats
async fn sample() -> impl IntoResponse {
    Json(ApiResponse::ok(SampleResponse {
        text: SAMPLE_LOG,
        formats: &SUPPORTED_FORMATS,
    }))
}

/// GET /api/rules - Built-in classification tables
async fn rules() -> impl IntoResponse {
    Json(ApiResponse::ok(RuleEngine::global()))
}

/// Build the API router (mounted under /api)
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_log))
        .route("/sample", get(sample))
        .route("/rules", get(rules));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let body = serde_json::json!({
            "text": "[1 hour] Weekly team sync meeting\n[30 mins] Code review"
        });
        let (status, value) = post_json(&body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["distribution"][0]["name"], "Meetings & Calls");
        assert_eq!(value["data"]["distribution"][0]["value"], 66.7);
        assert_eq!(value["data"]["distribution"][1]["hours"], 0.5);
    }

    #[tokio::test]
    async fn test_analyze_without_tags() {
        let (status, value) = post_json(r#"{"text": "Planning session"}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "no_valid_entries");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("No valid time entries found."));
    }

    #[tokio::test]
    async fn test_analyze_overflowing_duration() {
        let body = serde_json::json!({
            "text": format!("[1{} hours] Forever", "0".repeat(307))
        });
        let (status, value) = post_json(&body.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "processing_error");
        assert_eq!(
            value["error"]["message"],
            "Error processing time data. Please check the format."
        );
    }

    #[tokio::test]
    async fn test_rules_endpoint_lists_tables() {
        let response = router()
            .oneshot(Request::builder().uri("/api/rules").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["data"]["rules"].as_array().unwrap().len(), 11);
        assert_eq!(value["data"]["fallback_terms"][0]["term"], "team");
    }
}
