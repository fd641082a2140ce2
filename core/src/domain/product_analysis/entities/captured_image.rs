use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A still image handed over by the capture flow. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    pub uri: String,
    pub inline_data: Option<Bytes>,
    pub timestamp: DateTime<Utc>,
}

impl CapturedImage {
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            inline_data: None,
            timestamp: Utc::now(),
        }
    }

    pub fn from_bytes(uri: impl Into<String>, data: Bytes) -> Self {
        Self {
            uri: uri.into(),
            inline_data: Some(data),
            timestamp: Utc::now(),
        }
    }
}
