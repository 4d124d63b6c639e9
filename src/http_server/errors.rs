//! # API Errors
//!
//! HTTP-facing error type. Query engine failures are mapped here (the
//! engine itself is transport-agnostic); plumbing errors (unknown ids,
//! invalid bodies) are constructed directly by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::query::QueryError;

/// An error response produced by a handler
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    kind: Option<&'static str>,
}

impl ApiError {
    /// 404 with the given message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            kind: None,
        }
    }

    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            kind: None,
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        // Every query error is a caller-input error
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
            kind: Some(err.kind()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub timestamp: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.message,
            code: err.status.as_u16(),
            kind: err.kind,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
