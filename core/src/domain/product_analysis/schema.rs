use serde_json::json;

const ANALYSIS_INSTRUCTIONS: &str = "Analyze this product image and provide detailed information \
in the following JSON format. Respond with the JSON object only.";

const ANALYSIS_GUIDANCE: &str = "Provide accurate, detailed analysis based on visible text and \
ingredients on the package. List ingredients in package order. Express healthRating as \
\"<number>/10\". Suggest up to three healthier similarProducts in the same category.";

/// Returns the JSON shape the model is asked to fill in, with descriptive placeholder values.
pub fn get_product_analysis_schema() -> serde_json::Value {
    json!({
        "productName": "Product name",
        "brand": "Brand name",
        "category": "Product category",
        "ingredients": ["ingredient1", "ingredient2"],
        "chemicals": [
            {
                "name": "Chemical name",
                "purpose": "Purpose in product",
                "safety": "Safety information"
            }
        ],
        "nutritionalInfo": {
            "calories": "per serving",
            "protein": "amount",
            "carbs": "amount",
            "fat": "amount",
            "saturatedFat": "amount",
            "fiber": "amount",
            "sugar": "amount",
            "sodium": "amount",
            "cholesterol": "amount",
            "vitaminC": "amount",
            "calcium": "amount",
            "iron": "amount"
        },
        "allergens": ["allergen1", "allergen2"],
        "healthRating": "Rating out of 10, e.g. 7/10",
        "benefits": ["benefit1", "benefit2"],
        "concerns": ["concern1", "concern2"],
        "storageInstructions": "How to store",
        "expiryInfo": "Expiry details if visible",
        "similarProducts": [
            {
                "name": "Alternative product name",
                "brand": "Brand name",
                "healthRating": "Rating out of 10",
                "keyBenefit": "Why it is a healthier choice"
            }
        ]
    })
}

/// Builds the instruction text sent verbatim with every analysis request.
pub fn analysis_prompt() -> String {
    let schema = serde_json::to_string_pretty(&get_product_analysis_schema())
        .unwrap_or_else(|_| get_product_analysis_schema().to_string());

    format!("{ANALYSIS_INSTRUCTIONS}\n{schema}\n\n{ANALYSIS_GUIDANCE}")
}
