use serde_json::{Map, Value};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::{CoreError, RAW_TEXT_PREVIEW_LIMIT, truncate_chars},
    product_analysis::entities::{Chemical, NutritionalInfo, ProductAnalysis, SimilarProduct},
};

/// Parses extracted JSON text into a `ProductAnalysis`.
///
/// Only invalid JSON is an error. Missing fields, and fields of the wrong JSON type, fall back to
/// empty strings and empty sequences; values are never coerced between types.
pub fn map_product_analysis(json_text: &str) -> Result<ProductAnalysis, CoreError> {
    let parsed: Value = serde_json::from_str(json_text).map_err(|e| {
        error!("Failed to parse model JSON: {}", e);
        CoreError::MalformedResponse(format!(
            "failed to parse JSON ({e}): {}",
            truncate_chars(json_text, RAW_TEXT_PREVIEW_LIMIT)
        ))
    })?;

    let Value::Object(root) = parsed else {
        return Err(CoreError::MalformedResponse(format!(
            "expected a JSON object: {}",
            truncate_chars(json_text, RAW_TEXT_PREVIEW_LIMIT)
        )));
    };

    Ok(analysis_from_object(&Fields(&root)))
}

struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn string(&self, key: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    fn strings(&self, key: &str) -> Vec<String> {
        self.objects_or_values(key)
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    fn object(&self, key: &str) -> Fields<'_> {
        static EMPTY: std::sync::LazyLock<Map<String, Value>> = std::sync::LazyLock::new(Map::new);

        Fields(self.0.get(key).and_then(Value::as_object).unwrap_or(&*EMPTY))
    }

    fn objects(&self, key: &str) -> impl Iterator<Item = Fields<'_>> {
        self.objects_or_values(key)
            .filter_map(Value::as_object)
            .map(Fields)
    }

    fn objects_or_values(&self, key: &str) -> impl Iterator<Item = &Value> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }
}

fn analysis_from_object(fields: &Fields<'_>) -> ProductAnalysis {
    ProductAnalysis {
        product_name: fields.string("productName"),
        brand: fields.string("brand"),
        category: fields.string("category"),
        ingredients: fields.strings("ingredients"),
        chemicals: fields
            .objects("chemicals")
            .map(|chemical| Chemical {
                name: chemical.string("name"),
                purpose: chemical.string("purpose"),
                safety: chemical.string("safety"),
            })
            .collect(),
        nutritional_info: nutrition_from_object(&fields.object("nutritionalInfo")),
        allergens: fields.strings("allergens"),
        health_rating: fields.string("healthRating"),
        benefits: fields.strings("benefits"),
        concerns: fields.strings("concerns"),
        storage_instructions: fields.string("storageInstructions"),
        expiry_info: fields.string("expiryInfo"),
        similar_products: fields
            .objects("similarProducts")
            .map(|product| SimilarProduct {
                name: product.string("name"),
                brand: product.string("brand"),
                health_rating: product.string("healthRating"),
                key_benefit: product.string("keyBenefit"),
            })
            .collect(),
    }
}

fn nutrition_from_object(fields: &Fields<'_>) -> NutritionalInfo {
    NutritionalInfo {
        calories: fields.string("calories"),
        protein: fields.string("protein"),
        carbs: fields.string("carbs"),
        fat: fields.string("fat"),
        saturated_fat: fields.string("saturatedFat"),
        fiber: fields.string("fiber"),
        sugar: fields.string("sugar"),
        sodium: fields.string("sodium"),
        cholesterol: fields.string("cholesterol"),
        vitamin_c: fields.string("vitaminC"),
        calcium: fields.string("calcium"),
        iron: fields.string("iron"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_maps_every_field() {
        let source = json!({
            "productName": "Crunchy Oats",
            "brand": "Acme",
            "category": "Cereal",
            "ingredients": ["oats", "sugar", "salt"],
            "chemicals": [{ "name": "BHT", "purpose": "Preservative", "safety": "Limit intake" }],
            "nutritionalInfo": {
                "calories": "120", "protein": "3g", "carbs": "22g", "fat": "2g",
                "saturatedFat": "0.5g", "fiber": "3g", "sugar": "6g", "sodium": "95mg",
                "cholesterol": "0mg", "vitaminC": "0%", "calcium": "2%", "iron": "8%"
            },
            "allergens": ["gluten", "gluten"],
            "healthRating": "6.5/10",
            "benefits": ["Whole grain"],
            "concerns": ["Added sugar"],
            "storageInstructions": "Keep dry",
            "expiryInfo": "Best before 2027-01",
            "similarProducts": [
                { "name": "Plain Oats", "brand": "Acme", "healthRating": "9/10", "keyBenefit": "No added sugar" }
            ]
        });

        let analysis = map_product_analysis(&source.to_string()).unwrap();

        assert_eq!(analysis.product_name, "Crunchy Oats");
        assert_eq!(analysis.ingredients, vec!["oats", "sugar", "salt"]);
        assert_eq!(analysis.chemicals[0].name, "BHT");
        assert_eq!(analysis.nutritional_info.saturated_fat, "0.5g");
        assert_eq!(analysis.nutritional_info.vitamin_c, "0%");
        assert_eq!(analysis.allergens, vec!["gluten", "gluten"]);
        assert_eq!(analysis.rating().score, 6.5);
        assert_eq!(analysis.similar_products[0].key_benefit, "No added sugar");
        assert_eq!(serde_json::to_value(&analysis).unwrap(), source);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let analysis = map_product_analysis(r#"{"productName": "Mystery"}"#).unwrap();

        assert_eq!(analysis.product_name, "Mystery");
        assert_eq!(analysis.brand, "");
        assert!(analysis.ingredients.is_empty());
        assert!(analysis.chemicals.is_empty());
        assert_eq!(analysis.nutritional_info, NutritionalInfo::default());
        assert!(analysis.similar_products.is_empty());
    }

    #[test]
    fn test_numbers_are_not_stringified() {
        let analysis =
            map_product_analysis(r#"{"healthRating": 7, "ingredients": ["a", 2, "b"]}"#).unwrap();

        assert_eq!(analysis.health_rating, "");
        assert_eq!(analysis.rating().score, 0.0);
        assert_eq!(analysis.ingredients, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_json_is_malformed_response() {
        let err = map_product_analysis(r#"{"productName": "X",}"#).unwrap_err();
        assert!(matches!(&err, CoreError::MalformedResponse(msg) if msg.contains("productName")));
    }
}
