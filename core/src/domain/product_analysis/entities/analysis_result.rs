use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, product_analysis::entities::ProductAnalysis,
};

/// Uniform outcome of an analysis call: either a complete record or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProductAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn success(data: ProductAnalysis) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Converts back into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<ProductAnalysis, String> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (_, _, Some(error)) => Err(error),
            _ => Err("Analysis failed".to_string()),
        }
    }
}

impl From<Result<ProductAnalysis, CoreError>> for AnalysisResult {
    fn from(result: Result<ProductAnalysis, CoreError>) -> Self {
        match result {
            Ok(data) => AnalysisResult::success(data),
            Err(e) => AnalysisResult::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_omits_data() {
        let value = serde_json::to_value(AnalysisResult::failure("boom")).unwrap();
        assert_eq!(value, serde_json::json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_from_core_error_renders_message() {
        let result: AnalysisResult = Err(CoreError::service_status(429, "slow down")).into();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("429"));
    }

    #[test]
    fn test_into_result_round_trips_success() {
        let analysis = ProductAnalysis {
            product_name: "X".to_string(),
            ..Default::default()
        };
        let result = AnalysisResult::success(analysis.clone()).into_result();
        assert_eq!(result, Ok(analysis));
    }
}
