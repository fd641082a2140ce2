use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

/// Credential value shipped in sample configuration files; never a real key.
pub const PLACEHOLDER_API_KEY: &str = "your-gemini-api-key-here";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Clone, Debug)]
pub struct ProductScanConfig {
    pub llm: LLMConfig,
    pub capture: CaptureConfig,
    pub export: ExportConfig,
}

/// Requested operating mode, before the credential has been inspected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelection {
    #[default]
    Auto,
    Live,
    Demo,
}

/// Resolved operating mode of the analysis service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Live,
    Demo,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub request_timeout: Duration,
    pub mode: ModeSelection,
}

#[derive(Clone, Debug)]
pub struct CaptureConfig {
    pub library_dir: PathBuf,
    pub max_image_size: usize,
}

#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl LLMConfig {
    /// Returns the credential only if it is set, non-blank and not the sample placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    pub fn resolve_mode(&self) -> Result<AnalysisMode, CoreError> {
        match (self.mode, self.usable_api_key()) {
            (ModeSelection::Demo, _) => Ok(AnalysisMode::Demo),
            (ModeSelection::Live, Some(_)) => Ok(AnalysisMode::Live),
            (ModeSelection::Live, None) => Err(CoreError::InvalidConfig(
                "live mode requires GEMINI_API_KEY to be set".to_string(),
            )),
            (ModeSelection::Auto, Some(_)) => Ok(AnalysisMode::Live),
            (ModeSelection::Auto, None) => Ok(AnalysisMode::Demo),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_config(key: Option<&str>, mode: ModeSelection) -> LLMConfig {
        LLMConfig {
            gemini_api_key: key.map(str::to_string),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            request_timeout: Duration::from_secs(30),
            mode,
        }
    }

    #[test]
    fn test_auto_mode_without_credential_is_demo() {
        assert_eq!(
            llm_config(None, ModeSelection::Auto).resolve_mode(),
            Ok(AnalysisMode::Demo)
        );
        assert_eq!(
            llm_config(Some("  "), ModeSelection::Auto).resolve_mode(),
            Ok(AnalysisMode::Demo)
        );
        assert_eq!(
            llm_config(Some(PLACEHOLDER_API_KEY), ModeSelection::Auto).resolve_mode(),
            Ok(AnalysisMode::Demo)
        );
    }

    #[test]
    fn test_auto_mode_with_credential_is_live() {
        assert_eq!(
            llm_config(Some("abc123"), ModeSelection::Auto).resolve_mode(),
            Ok(AnalysisMode::Live)
        );
    }

    #[test]
    fn test_explicit_demo_ignores_credential() {
        assert_eq!(
            llm_config(Some("abc123"), ModeSelection::Demo).resolve_mode(),
            Ok(AnalysisMode::Demo)
        );
    }

    #[test]
    fn test_explicit_live_requires_credential() {
        let result = llm_config(None, ModeSelection::Live).resolve_mode();
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }
}
