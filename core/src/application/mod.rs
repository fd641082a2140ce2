use tracing::info;

use crate::{
    domain::common::{ProductScanConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        capture::FilesystemImageCapture, export::HtmlReportExporter, llm::GeminiLLMClient,
    },
};

pub type ProductScanService = Service<GeminiLLMClient, HtmlReportExporter>;

/// Wires the production adapters into the domain service.
pub fn create_service(config: ProductScanConfig) -> Result<ProductScanService, CoreError> {
    let mode = config.llm.resolve_mode()?;
    let llm_client = GeminiLLMClient::from_config(&config.llm)?;
    let exporter = HtmlReportExporter::new(&config.export);

    info!(
        ?mode,
        model = %config.llm.gemini_model,
        export_dir = %config.export.output_dir.display(),
        "Product analysis service ready"
    );

    Ok(Service::new(
        llm_client,
        exporter,
        mode,
        config.capture.max_image_size,
    ))
}

pub fn create_image_capture(config: &ProductScanConfig) -> FilesystemImageCapture {
    FilesystemImageCapture::new(&config.capture)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::common::{
        AnalysisMode, CaptureConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
        DEFAULT_MAX_IMAGE_SIZE, ExportConfig, LLMConfig, ModeSelection,
    };
    use crate::domain::product_analysis::ports::ProductAnalysisService;
    use crate::domain::product_analysis::entities::CapturedImage;

    fn config(key: Option<&str>, mode: ModeSelection) -> ProductScanConfig {
        ProductScanConfig {
            llm: LLMConfig {
                gemini_api_key: key.map(str::to_string),
                gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
                gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
                request_timeout: Duration::from_secs(30),
                mode,
            },
            capture: CaptureConfig {
                library_dir: "./photos".into(),
                max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            },
            export: ExportConfig {
                output_dir: "./reports".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_unconfigured_service_runs_in_demo_mode() {
        let service = create_service(config(None, ModeSelection::Auto)).unwrap();
        assert_eq!(service.mode(), AnalysisMode::Demo);

        let result = service
            .analyze(CapturedImage::from_uri("/not/read/in/demo/mode.jpg"))
            .await;
        assert!(result.success);
    }

    #[test]
    fn test_live_mode_without_key_fails_fast() {
        assert!(create_service(config(None, ModeSelection::Live)).is_err());
    }
}
