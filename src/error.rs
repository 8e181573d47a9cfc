//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every client-input failure maps to 400 Bad Request. The only server-side
/// failure is a broken directory invariant.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No customer is registered under the supplied cpf, or no cpf was supplied.
    #[error("Customer not found!")]
    CustomerNotFound,

    /// A customer with the same cpf is already registered.
    #[error("Customer already exists!")]
    DuplicateCustomer,

    /// The withdrawal amount exceeds the current balance.
    #[error("Insufficient funds!")]
    InsufficientFunds,

    /// Request body or query parameters are missing or malformed.
    ///
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// A resolved customer vanished from the directory before it could be removed.
    ///
    /// Returns HTTP 500; details are logged, not sent to the client.
    #[error("Customer directory is inconsistent for cpf {0}")]
    DirectoryInconsistency(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Customer not found!" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::CustomerNotFound
            | AppError::DuplicateCustomer
            | AppError::InsufficientFunds
            | AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DirectoryInconsistency(_) => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
