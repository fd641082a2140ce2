use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product_analysis::entities::ProductAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExportReportInput {
    pub analysis: ProductAnalysis,
    /// Source image shown at the top of the report, if any.
    pub image_uri: Option<String>,
}
