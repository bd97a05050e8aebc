//! Application error types
//!
//! Everything above the domain layer reports failures through [`AppError`].
//! Each variant classifies to an HTTP status and a stable code so a caller
//! can turn it into a response without inspecting messages.

use lightbnb_core::DomainError;
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown email or wrong password; the two are not told apart
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database unavailable: {0}")]
    Database(String),

    #[error("Unexpected failure")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Bad configuration: {0}")]
    Config(#[from] ConfigError),
}

/// HTTP status matching a domain error's class
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_conflict() {
        409
    } else if err.is_validation() {
        400
    } else {
        500
    }
}

impl AppError {
    fn classify(&self) -> (u16, &'static str) {
        match self {
            Self::InvalidCredentials => (401, "INVALID_CREDENTIALS"),
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::NotFound(_) => (404, "NOT_FOUND"),
            Self::Database(_) => (503, "DATABASE_UNAVAILABLE"),
            Self::Internal(_) => (500, "INTERNAL_ERROR"),
            Self::Config(_) => (500, "CONFIG_ERROR"),
            Self::Domain(e) => (domain_status(e), e.code()),
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.classify().0
    }

    /// Stable machine-readable code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    #[must_use]
    pub fn not_found(what: impl fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }

    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Serializable `{ code, message }` body for upstream handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        // Internal details stay in the logs
        let message = if err.is_server_error() {
            "Something went wrong".to_string()
        } else {
            err.to_string()
        };
        Self {
            code: err.error_code(),
            message,
        }
    }
}
