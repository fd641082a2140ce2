use super::handlers::{
    analyze_product_image::{__path_analyze_product_image, analyze_product_image},
    export_report::{__path_export_report, export_report},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

// Room for multipart boundaries and headers around the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_product_image, export_report))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.args.storage.max_image_size + MULTIPART_OVERHEAD;

    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_product_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            &format!("{}/analysis/export", state.args.server.root_path),
            post(export_report),
        )
}
