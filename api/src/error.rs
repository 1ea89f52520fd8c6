//! Unified error types for the users API
//!
//! This module defines error types for each layer:
//! - `DomainError`: the closed taxonomy of persistence/business failures
//! - `AppError`: application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - the only vocabulary crossing the persistence
/// boundary. The adapter never leaks a raw driver error upward; every
/// failure it reports is one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("user not found")]
    NotFound,

    #[error("username already in use")]
    UsernameInUse,

    #[error("email already in use")]
    EmailInUse,

    #[error("id already in use")]
    IdInUse,

    #[error("{field} is not nullable")]
    NotNullable { field: String },

    /// Unclassified storage failure. The detail is for diagnostic logging
    /// only and must not be shown verbatim to an external caller.
    #[error("internal server error: {0}")]
    Internal(String),

    /// The unit of work could not be committed or rolled back cleanly for
    /// reasons unrelated to a domain error (connectivity loss, deadlock).
    #[error("transaction failed: {0}")]
    TransactionFailed(String),
}

impl DomainError {
    /// True for the uniqueness-violation kinds.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::UsernameInUse | DomainError::EmailInUse | DomainError::IdInUse
        )
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found", Some(self.to_string()))
            }
            AppError::Domain(err) if err.is_conflict() => {
                (StatusCode::CONFLICT, "Conflict", Some(err.to_string()))
            }
            AppError::Domain(DomainError::NotNullable { .. }) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(self.to_string()),
            ),
            AppError::Domain(DomainError::Internal(detail)) => {
                tracing::error!("Storage error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::TransactionFailed(detail)) => {
                // Logged under its own label so infrastructure failures are
                // distinguishable from domain errors in the logs.
                tracing::error!("Transaction failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        if status == StatusCode::UNAUTHORIZED {
            return (
                status,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Restricted\"")],
                body,
            )
                .into_response();
        }

        (status, body).into_response()
    }
}
