//! Infrastructure-level errors: failures talking to the remote API

use thiserror::Error;

/// Errors raised by a content client call.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl InfraError {
    /// Build an API error from a non-success response body.
    ///
    /// WordPress error bodies look like `{"code": ..., "message": ...}`; the
    /// message is used when present, else the raw body, else the status text.
    pub fn api(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| "request rejected".to_string());
        Self::Api { status, message }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
