use tracing::{error, info, instrument};

use crate::domain::{
    common::{AnalysisMode, entities::app_errors::CoreError, services::Service},
    export::ports::DocumentExporter,
    product_analysis::{
        encoder::encode_image,
        entities::{AnalysisResult, CapturedImage, ProductAnalysis},
        fallback::demo_result,
        mapper::map_product_analysis,
        normalizer::extract_json,
        ports::{LLMClient, ProductAnalysisService},
        schema::analysis_prompt,
    },
};

/// Turns raw model text into a `ProductAnalysis`: strip wrapping, locate the object, map it.
pub fn parse_model_response(raw: &str) -> Result<ProductAnalysis, CoreError> {
    let json = extract_json(raw)?;
    map_product_analysis(json)
}

impl<LLM, DE> Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    async fn analyze_live(&self, image: &CapturedImage) -> Result<ProductAnalysis, CoreError> {
        let inline_image = encode_image(image, self.max_image_size).await?;

        let raw_response = self
            .llm_client
            .generate_with_image(analysis_prompt(), inline_image)
            .await?;

        parse_model_response(&raw_response)
    }
}

impl<LLM, DE> ProductAnalysisService for Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self, image), fields(uri = %image.uri, mode = ?self.mode))]
    async fn analyze(&self, image: CapturedImage) -> AnalysisResult {
        if self.mode == AnalysisMode::Demo {
            info!("No live credential configured, serving demo analysis");
            return demo_result();
        }

        match self.analyze_live(&image).await {
            Ok(analysis) => {
                info!(product = %analysis.product_name, "Product analysis completed");
                AnalysisResult::success(analysis)
            }
            Err(e) => {
                error!("Product analysis failed: {}", e);
                AnalysisResult::failure(e.to_string())
            }
        }
    }
}
