//! Error taxonomy for API calls.
//!
//! Transport failures and undecodable bodies are passed through unchanged.
//! Non-2xx responses become either `Status` (raw) or `Rejected` (the server's
//! `message` field, for the operations that surface friendly messages).

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// Server-reported failure with a human-readable message.
    #[error("{message}")]
    Rejected {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read upload source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// HTTP status of a server-reported failure, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Rejected { status, .. } => *status,
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Turn a raw `Status` error into `Rejected` using the body's `message`.
    ///
    /// When the body carries no message, `fallback` decides: `Some` replaces it
    /// with a generic message, `None` keeps the raw error.
    pub(crate) fn into_rejected(self, fallback: Option<&str>) -> ApiError {
        let ApiError::Status { status, body } = self else {
            return self;
        };
        match (extract_message(&body), fallback) {
            (Some(message), _) => ApiError::Rejected {
                status: Some(status),
                message,
            },
            (None, Some(fallback)) => ApiError::Rejected {
                status: Some(status),
                message: fallback.to_string(),
            },
            (None, None) => ApiError::Status { status, body },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the conventional `message` field out of an error body.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
