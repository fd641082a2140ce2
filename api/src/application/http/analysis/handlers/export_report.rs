use axum::extract::State;
use productscan_core::domain::export::{entities::ExportedReport, ports::ReportExportService};

use crate::application::http::{
    analysis::validators::ExportReportRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/export",
    tag = "analysis",
    summary = "Export an analysis as an HTML report",
    description = "Renders the analysis into a standalone HTML document and writes it to the export directory",
    request_body = ExportReportRequest,
    responses(
        (status = 200, body = ExportedReport),
        (status = 400, description = "Invalid analysis payload"),
        (status = 500, description = "Report could not be written")
    ),
)]
pub async fn export_report(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExportReportRequest>,
) -> Result<Response<ExportedReport>, ApiError> {
    let report = state
        .service
        .export_report(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
