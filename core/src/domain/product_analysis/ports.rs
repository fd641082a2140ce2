use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{
        entities::{AnalysisResult, CapturedImage},
        value_objects::InlineImage,
    },
};

/// LLM Client trait for calling multimodal AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends the prompt and image and returns the first text segment of the first candidate.
    fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for product analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait ProductAnalysisService: Send + Sync {
    /// Always resolves to an envelope; internal faults become `success: false`.
    fn analyze(&self, image: CapturedImage) -> impl Future<Output = AnalysisResult> + Send;
}
