use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product_analysis::value_objects::HealthRating;

/// Structured analysis of one packaged product, as produced by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    pub product_name: String,
    pub brand: String,
    pub category: String,
    /// Package order is preserved.
    pub ingredients: Vec<String>,
    pub chemicals: Vec<Chemical>,
    pub nutritional_info: NutritionalInfo,
    pub allergens: Vec<String>,
    /// Score out of ten, encoded as `"<number>/10"`.
    pub health_rating: String,
    pub benefits: Vec<String>,
    pub concerns: Vec<String>,
    pub storage_instructions: String,
    pub expiry_info: String,
    #[serde(default)]
    pub similar_products: Vec<SimilarProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Chemical {
    pub name: String,
    pub purpose: String,
    pub safety: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub saturated_fat: String,
    pub fiber: String,
    pub sugar: String,
    pub sodium: String,
    pub cholesterol: String,
    pub vitamin_c: String,
    pub calcium: String,
    pub iron: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimilarProduct {
    pub name: String,
    pub brand: String,
    pub health_rating: String,
    pub key_benefit: String,
}

impl ProductAnalysis {
    pub fn rating(&self) -> HealthRating {
        HealthRating::parse(&self.health_rating)
    }
}

impl NutritionalInfo {
    /// Display label and value for every field, in report order.
    pub fn labeled(&self) -> [(&'static str, &str); 12] {
        [
            ("Calories", self.calories.as_str()),
            ("Protein", self.protein.as_str()),
            ("Carbs", self.carbs.as_str()),
            ("Total Fat", self.fat.as_str()),
            ("Saturated Fat", self.saturated_fat.as_str()),
            ("Sugar", self.sugar.as_str()),
            ("Fiber", self.fiber.as_str()),
            ("Sodium", self.sodium.as_str()),
            ("Cholesterol", self.cholesterol.as_str()),
            ("Vitamin C", self.vitamin_c.as_str()),
            ("Calcium", self.calcium.as_str()),
            ("Iron", self.iron.as_str()),
        ]
    }
}

impl SimilarProduct {
    pub fn rating(&self) -> HealthRating {
        HealthRating::parse(&self.health_rating)
    }
}
