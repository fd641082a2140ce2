use axum::{Json, Router, extract::State, routing::get};
use productscan_core::domain::common::AnalysisMode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub mode: AnalysisMode,
    pub model: String,
    pub max_image_size: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "health",
    summary = "Public runtime configuration",
    description = "Reports the analysis mode and model; never the credential",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        mode: state.service.mode(),
        model: state.args.llm.gemini_model.clone(),
        max_image_size: state.args.storage.max_image_size,
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/config", root_path), get(get_config))
}
