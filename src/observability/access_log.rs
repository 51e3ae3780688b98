//! Per-request access log.
//!
//! One line per completed request with method, path, status, latency and
//! request ID, emitted through `tower_http::trace::TraceLayer`.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::http::request::X_REQUEST_ID;

/// Wrap `router` with the access log layer.
pub fn with_access_log(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            })
            .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_secs_f64() * 1000.0,
                    "request completed"
                );
            }),
    )
}
