//! Error types
//!
//! Two classes reach the user: remote rejections (non-2xx with a `detail`
//! body) and local failures (transport, decoding, validation).

use thiserror::Error;

use crate::detail::DetailPayload;

/// The request never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from `ApiClient` calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("{}", rejection_summary(*status, status_text, detail.as_ref()))]
    Rejected {
        status: u16,
        status_text: String,
        detail: Option<DetailPayload>,
    },
    #[error("{0}")]
    Transport(#[from] TransportError),
    /// Success status, but the body was not the expected JSON
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

fn rejection_summary(status: u16, status_text: &str, detail: Option<&DetailPayload>) -> String {
    let head = if status_text.is_empty() {
        status.to_string()
    } else {
        status_text.to_string()
    };
    match detail {
        Some(DetailPayload::Message(msg)) if msg.is_empty() => head,
        Some(detail) => format!("{} - {}", head, detail),
        None => head,
    }
}

/// Client-side rejection of the attributes field
#[derive(Debug, Error)]
pub enum AttributesError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Attributes must be a valid JSON object (e.g., {{\"key\": \"value\"}}).")]
    NotAnObject,
}
