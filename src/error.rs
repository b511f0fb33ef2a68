//! Error types for the events client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when sending events to `PagerDuty`.
#[derive(Debug, Error)]
pub enum EventError {
    /// Event type outside the recognized set
    #[error("invalid event type `{0}`, valid is one of trigger|acknowledge|resolve")]
    InvalidEventType(String),

    /// API responded with a status other than 200
    #[error("PagerDuty API responded with HTTP {0}")]
    UnexpectedStatus(StatusCode),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
