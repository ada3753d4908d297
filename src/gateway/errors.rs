//! # Gateway Errors
//!
//! Besides success a request either matched nothing, failed storage, or
//! never reached the gateway because its query string did not parse. Every
//! storage failure collapses to a 500 carrying the engine's own message.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use super::response::{ErrorResponse, MessageResponse};
use crate::storage::StorageError;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Query succeeded with zero rows
    #[error("{0}")]
    NotFound(String),

    /// Query raised an error
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Request parameters could not be extracted
    #[error("{0}")]
    BadRequest(String),
}

impl GatewayError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// JSON body: `{"message": ...}` for 404, `{"error": ...}` otherwise
    pub fn body(&self) -> Value {
        let body = match self {
            GatewayError::NotFound(message) => serde_json::to_value(MessageResponse {
                message: message.clone(),
            }),
            GatewayError::Storage(err) => serde_json::to_value(ErrorResponse {
                error: err.to_string(),
            }),
            GatewayError::BadRequest(error) => serde_json::to_value(ErrorResponse {
                error: error.clone(),
            }),
        };
        body.unwrap_or(Value::Null)
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
