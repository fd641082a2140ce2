use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::{entities::ExportedReport, value_objects::ExportReportInput},
};

/// Port for rendering an analysis into a shareable document
#[cfg_attr(test, mockall::automock)]
pub trait DocumentExporter: Send + Sync {
    fn render(
        &self,
        input: ExportReportInput,
    ) -> impl Future<Output = Result<ExportedReport, CoreError>> + Send;
}

/// Service trait for report export
#[cfg_attr(test, mockall::automock)]
pub trait ReportExportService: Send + Sync {
    /// Fails independently of analysis; the caller keeps its analysis and may retry.
    fn export_report(
        &self,
        input: ExportReportInput,
    ) -> impl Future<Output = Result<ExportedReport, CoreError>> + Send;
}
