use productscan_core::domain::{
    export::value_objects::ExportReportInput, product_analysis::entities::ProductAnalysis,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ExportReportRequest {
    #[validate(custom(function = "validate_analysis"))]
    pub analysis: ProductAnalysis,
    #[validate(length(
        min = 1,
        max = 2048,
        message = "image_uri must be between 1 and 2048 characters"
    ))]
    pub image_uri: Option<String>,
}

fn validate_analysis(analysis: &ProductAnalysis) -> Result<(), ValidationError> {
    if analysis.product_name.trim().is_empty() {
        let mut error = ValidationError::new("product_name_required");
        error.message = Some("analysis.productName must not be empty".into());
        return Err(error);
    }
    Ok(())
}

impl From<ExportReportRequest> for ExportReportInput {
    fn from(request: ExportReportRequest) -> Self {
        ExportReportInput {
            analysis: request.analysis,
            image_uri: request.image_uri,
        }
    }
}
