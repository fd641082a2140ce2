use std::sync::Arc;

use crate::domain::{
    common::AnalysisMode, export::ports::DocumentExporter, product_analysis::ports::LLMClient,
};

/// Holds the injected adapters shared by every domain service implementation.
pub struct Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) document_exporter: Arc<DE>,
    pub(crate) mode: AnalysisMode,
    pub(crate) max_image_size: usize,
}

impl<LLM, DE> Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    pub fn new(
        llm_client: LLM,
        document_exporter: DE,
        mode: AnalysisMode,
        max_image_size: usize,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            document_exporter: Arc::new(document_exporter),
            mode,
            max_image_size,
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }
}

impl<LLM, DE> Clone for Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            document_exporter: Arc::clone(&self.document_exporter),
            mode: self.mode,
            max_image_size: self.max_image_size,
        }
    }
}
