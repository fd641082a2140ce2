use thiserror::Error;

/// Maximum number of characters of an upstream body kept in a service error.
pub const SERVICE_BODY_LIMIT: usize = 500;

/// Maximum number of characters of raw model text kept in a malformed response error.
pub const RAW_TEXT_PREVIEW_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Failed to encode image: {0}")]
    Encoding(String),

    #[error("{}", format_service_error(.status, .message))]
    Service { status: Option<u16>, message: String },

    #[error("Malformed response from model: {0}")]
    MalformedResponse(String),

    #[error("Failed to export report: {0}")]
    Export(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Image capture failed: {0}")]
    Capture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    pub fn service(message: impl Into<String>) -> Self {
        CoreError::Service {
            status: None,
            message: message.into(),
        }
    }

    /// Builds a service error for a non-success HTTP status, truncating the body.
    pub fn service_status(status: u16, body: &str) -> Self {
        CoreError::Service {
            status: Some(status),
            message: truncate_chars(body, SERVICE_BODY_LIMIT),
        }
    }
}

fn format_service_error(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("Model service error {status}: {message}"),
        None => format!("Model service error: {message}"),
    }
}

/// Truncates on a char boundary, appending an ellipsis when text was dropped.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
