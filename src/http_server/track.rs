//! Request Tracking Middleware
//!
//! Tags every request with a UUID request id (returned in the
//! `x-request-id` response header) and logs one structured line per
//! completed request.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::observability::Logger;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag the request with an id, run it, log the outcome
pub async fn track_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let duration_ms = started.elapsed().as_millis().to_string();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    Logger::info(
        "HTTP_REQUEST",
        &[
            ("method", method.as_str()),
            ("path", uri.as_str()),
            ("status", status.as_str()),
            ("duration_ms", duration_ms.as_str()),
            ("request_id", request_id.as_str()),
        ],
    );

    response
}
