//! Azure Resource Manager error handling

use thiserror::Error;

/// Errors raised while talking to Azure Resource Manager
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Azure API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to parse Azure response: {message}")]
    ResponseParsing { message: String },

    #[error("Azure configuration error: {message}")]
    Configuration { message: String },
}

impl ProviderError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn parsing(message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status returned by Azure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            ProviderError::parsing(err.to_string())
        } else {
            ProviderError::network(err.to_string())
        }
    }
}

/// Build an error from a non-success ARM response body.
///
/// ARM bodies look like `{"error": {"code": "...", "message": "..."}}`; anything
/// else is reported verbatim.
pub fn error_from_response(status: u16, body: &str) -> ProviderError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    let code = error
        .and_then(|e| e.get("code"))
        .and_then(|c| c.as_str())
        .unwrap_or("Unknown")
        .to_string();
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.trim().to_string()
            }
        });

    match status {
        401 => ProviderError::authentication(format!("{}: {}", code, message)),
        _ => ProviderError::api(status, code, message),
    }
}
