use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    health::{__path_get_config, __path_health, get_config, health},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ProductScan API"
    ),
    paths(health, get_config),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
