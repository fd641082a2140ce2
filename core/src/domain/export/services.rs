use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    export::{
        entities::ExportedReport,
        ports::{DocumentExporter, ReportExportService},
        value_objects::ExportReportInput,
    },
    product_analysis::ports::LLMClient,
};

impl<LLM, DE> ReportExportService for Service<LLM, DE>
where
    LLM: LLMClient,
    DE: DocumentExporter,
{
    #[instrument(skip(self, input), fields(product = %input.analysis.product_name))]
    async fn export_report(&self, input: ExportReportInput) -> Result<ExportedReport, CoreError> {
        let report = self.document_exporter.render(input).await.map_err(|e| {
            error!("Report export failed: {}", e);
            match e {
                CoreError::Export(_) => e,
                other => CoreError::Export(other.to_string()),
            }
        })?;

        info!(path = %report.path, size = report.size_bytes, "Report exported");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        common::{AnalysisMode, DEFAULT_MAX_IMAGE_SIZE},
        export::ports::MockDocumentExporter,
        product_analysis::{fallback::demo_analysis, ports::MockLLMClient},
    };

    fn input() -> ExportReportInput {
        ExportReportInput {
            analysis: demo_analysis(),
            image_uri: None,
        }
    }

    #[tokio::test]
    async fn test_export_delegates_to_exporter() {
        let mut exporter = MockDocumentExporter::new();
        exporter
            .expect_render()
            .withf(|input| input.analysis.product_name == "Organic Whole Grain Cereal")
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(ExportedReport {
                        path: "/tmp/report.html".to_string(),
                        file_name: "report.html".to_string(),
                        mime_type: "text/html".to_string(),
                        size_bytes: 42,
                        checksum_sha256: "abc".to_string(),
                        created_at: Utc::now(),
                    })
                })
            });

        let service = Service::new(
            MockLLMClient::new(),
            exporter,
            AnalysisMode::Demo,
            DEFAULT_MAX_IMAGE_SIZE,
        );
        let report = service.export_report(input()).await.unwrap();

        assert_eq!(report.file_name, "report.html");
    }

    #[tokio::test]
    async fn test_non_export_failures_are_reported_as_export_errors() {
        let mut exporter = MockDocumentExporter::new();
        exporter
            .expect_render()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::PermissionDenied("read-only".into())) }));

        let service = Service::new(
            MockLLMClient::new(),
            exporter,
            AnalysisMode::Demo,
            DEFAULT_MAX_IMAGE_SIZE,
        );
        let err = service.export_report(input()).await.unwrap_err();

        assert!(matches!(err, CoreError::Export(msg) if msg.contains("read-only")));
    }
}
