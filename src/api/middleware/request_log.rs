//! Request logging with a per-request correlation id
//!
//! Submitted code and questions are never logged; only the method, matched
//! route, status, body size and timing are recorded.

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs each request and echoes the request id back to the caller.
/// `TraceLayer` owns the span, so no span is created here.
pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = matched_path(&request);
    let request_id = request_id(&request);
    let body_bytes = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        body_bytes,
        "Incoming request"
    );

    let mut response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

/// Caller-supplied id when present and sane, otherwise a fresh uuid
fn request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_uses_caller_header() {
        let request = Request::builder()
            .uri("/v1/comments")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_generated_when_missing_or_oversized() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let generated = request_id(&request);
        assert!(uuid::Uuid::parse_str(&generated).is_ok());

        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "x".repeat(200))
            .body(Body::empty())
            .unwrap();
        assert_ne!(request_id(&request).len(), 200);
    }

    #[test]
    fn test_matched_path_falls_back_to_uri() {
        let request = Request::builder()
            .uri("/v1/options?x=1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(matched_path(&request), "/v1/options");
    }
}
