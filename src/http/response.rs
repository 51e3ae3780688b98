//! Response producers.
//!
//! # Responsibilities
//! - `file` routes: stream a file from disk with a content type from its extension
//! - `mock` routes: generate data from the template, text for strings, JSON otherwise
//! - Fallback for unmatched requests
//!
//! # Design Decisions
//! - File routes answer every configured method; the file service only
//!   ever sees GET (or HEAD)
//! - A missing file surfaces as the file service's own 404
//! - The fallback answers 200 with a fixed body

use std::path::Path;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::mock;

/// Body returned for unmatched requests.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Stream `path` as the response to `request`.
pub async fn serve_file(path: &Path, request: Request) -> Response {
    let (mut parts, body) = request.into_parts();
    if parts.method != Method::HEAD {
        parts.method = Method::GET;
    }
    let request = Request::from_parts(parts, body);

    let response = match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        tracing::warn!(path = %path.display(), "Mock file not found");
    }
    response.into_response()
}

/// Generate a response from a mock template.
pub fn mock_response(template: &Value) -> Response {
    match mock::generate(template) {
        Value::String(text) => text.into_response(),
        other => Json(other).into_response(),
    }
}

/// Fallback for requests no route matched.
pub async fn not_found() -> &'static str {
    NOT_FOUND_BODY
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use serde_json::json;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_mock_string_is_text() {
        let response = mock_response(&json!("plain @upper('ok')"));
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(body_text(response).await, "plain OK");
    }

    #[tokio::test]
    async fn test_mock_object_is_json() {
        let response = mock_response(&json!({"age|18-60": 1}));
        assert_eq!(response.headers()["content-type"], "application/json");
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!((18..=60).contains(&body["age"].as_i64().unwrap()));
    }

    #[tokio::test]
    async fn test_serve_file_for_post() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.txt");
        std::fs::write(&path, "file body").unwrap();

        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/anything")
            .body(Body::empty())
            .unwrap();
        let response = serve_file(&path, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(body_text(response).await, "file body");
    }

    #[tokio::test]
    async fn test_serve_missing_file() {
        let request = axum::http::Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = serve_file(Path::new("/no/such/file.json"), request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
