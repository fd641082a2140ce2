use axum::extract::{Multipart, State};
use productscan_core::domain::product_analysis::{
    entities::{AnalysisResult, CapturedImage},
    ports::ProductAnalysisService,
};
use tracing::info;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "analysis",
    summary = "Analyze a product photo",
    description = "Sends the uploaded photo to the vision model (or the demo provider) and returns the analysis envelope. Analysis failures are reported inside the envelope.",
    request_body(content_type = "multipart/form-data", description = "Multipart form with an `image` file field"),
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, description = "Missing or oversized image")
    ),
)]
pub async fn analyze_product_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResult>, ApiError> {
    let max_image_size = state.args.storage.max_image_size;
    let mut image: Option<CapturedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("image").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Image field is empty".to_string()));
        }
        if data.len() > max_image_size {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                max_image_size
            )));
        }

        image = Some(CapturedImage::from_bytes(
            format!("upload://{}", file_name),
            data,
        ));
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    info!(uri = %image.uri, "Received image for analysis");

    let result = state.service.analyze(image).await;
    Ok(Response::OK(result))
}
