use crate::domain::product_analysis::entities::{
    AnalysisResult, Chemical, NutritionalInfo, ProductAnalysis, SimilarProduct,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Fixed sample analysis served in demo mode. Every field is populated.
pub fn demo_analysis() -> ProductAnalysis {
    ProductAnalysis {
        product_name: "Organic Whole Grain Cereal".to_string(),
        brand: "Nature's Best".to_string(),
        category: "Breakfast Cereal".to_string(),
        ingredients: strings(&[
            "Organic whole grain oats",
            "Organic cane sugar",
            "Organic rice flour",
            "Sea salt",
            "Natural vanilla flavor",
            "Vitamin E (mixed tocopherols)",
        ]),
        chemicals: vec![
            Chemical {
                name: "Mixed Tocopherols".to_string(),
                purpose: "Natural preservative (Vitamin E)".to_string(),
                safety: "Generally recognized as safe; antioxidant properties".to_string(),
            },
            Chemical {
                name: "Natural Vanilla Flavor".to_string(),
                purpose: "Flavoring agent".to_string(),
                safety: "Safe for consumption; derived from vanilla beans".to_string(),
            },
        ],
        nutritional_info: NutritionalInfo {
            calories: "150 per serving (40g)".to_string(),
            protein: "4g".to_string(),
            carbs: "32g".to_string(),
            fat: "2g".to_string(),
            saturated_fat: "0.5g".to_string(),
            fiber: "5g".to_string(),
            sugar: "8g".to_string(),
            sodium: "140mg".to_string(),
            cholesterol: "0mg".to_string(),
            vitamin_c: "0% DV".to_string(),
            calcium: "2% DV".to_string(),
            iron: "10% DV".to_string(),
        },
        allergens: strings(&["May contain traces of wheat", "Processed in a facility with nuts"]),
        health_rating: "7.5/10".to_string(),
        benefits: strings(&[
            "High in dietary fiber",
            "Made with whole grains",
            "Certified organic ingredients",
            "No artificial colors or preservatives",
        ]),
        concerns: strings(&[
            "Contains added sugar",
            "Moderate sodium content",
        ]),
        storage_instructions: "Store in a cool, dry place. Reseal the bag after opening.".to_string(),
        expiry_info: "Best before date printed on top of the box".to_string(),
        similar_products: vec![
            SimilarProduct {
                name: "Unsweetened Rolled Oats".to_string(),
                brand: "Harvest Fields".to_string(),
                health_rating: "9/10".to_string(),
                key_benefit: "No added sugar and higher fiber".to_string(),
            },
            SimilarProduct {
                name: "Ancient Grain Flakes".to_string(),
                brand: "Nature's Best".to_string(),
                health_rating: "8/10".to_string(),
                key_benefit: "Lower sugar with quinoa and amaranth".to_string(),
            },
        ],
    }
}

pub fn demo_result() -> AnalysisResult {
    AnalysisResult::success(demo_analysis())
}
