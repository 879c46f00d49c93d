use serde_json::json;

/// Example object embedded in the prompt as the required output shape
pub fn get_analysis_response_template() -> serde_json::Value {
    json!({
        "protein": 0.0,
        "carbs": 0.0,
        "fat": 0.0,
        "fiber": 0.0,
        "sugar": 0.0,
        "sodium": 0.0,
        "foodItems": ["item1", "item2", "item3"],
        "healthScore": 0.0,
        "portionQualityScore": 0.0,
        "varietyScore": 0.0,
        "nutritionBalanceScore": 0.0,
        "recommendations": "Your recommendations here"
    })
}
