//! Error handling for the SmartCost API
//!
//! This module defines the error types surfaced by the service and their
//! mapping onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the SmartCost API
pub type Result<T> = std::result::Result<T, SmartCostError>;

/// Main error type for the SmartCost API
#[derive(Error, Debug)]
pub enum SmartCostError {
    /// Configuration errors, fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures talking to or interpreting data from the cost provider.
    /// The message already carries its context ("Error fetching ...: cause").
    #[error("{0}")]
    Service(String),

    /// Request parameter validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmartCostError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Stable machine-readable code for the error body
    pub fn code(&self) -> &'static str {
        match self {
            SmartCostError::Config(_) => "CONFIG_ERROR",
            SmartCostError::Service(_) => "SERVICE_ERROR",
            SmartCostError::Validation(_) => "VALIDATION_ERROR",
            SmartCostError::Io(_) => "IO_ERROR",
        }
    }
}

impl ResponseError for SmartCostError {
    fn status_code(&self) -> StatusCode {
        match self {
            SmartCostError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            SmartCostError::Service(message) => message.clone(),
            SmartCostError::Validation(_) => self.to_string(),
            _ => "An internal error occurred".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail,
            code: self.code().to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}
