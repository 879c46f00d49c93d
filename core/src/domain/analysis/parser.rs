use serde_json::{Map, Value};

use crate::domain::{
    analysis::entities::AnalysisResult, common::entities::app_errors::CoreError,
};

/// Decodes the model's raw answer into an [`AnalysisResult`].
///
/// Numeric fields accept numbers or numeric strings ("30", "1,200", "12 g").
/// A field that cannot be read becomes `0.0`, is logged, and is listed in
/// `defaulted_fields`. Scores are returned as-is; range checks belong to the
/// caller.
pub fn parse_analysis_response(raw: &str) -> Result<AnalysisResult, CoreError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        tracing::error!("Failed to parse analysis response: {}", e);
        CoreError::MalformedResponse(format!("response is not valid JSON: {e}"))
    })?;

    let object = value.as_object().ok_or_else(|| {
        CoreError::MalformedResponse("response is not a JSON object".to_string())
    })?;

    let recommendations = match lookup(object, "recommendations", "recommendations") {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(_) => {
            return Err(CoreError::MalformedResponse(
                "recommendations is not a string".to_string(),
            ));
        }
        None => {
            return Err(CoreError::MalformedResponse(
                "missing recommendations".to_string(),
            ));
        }
    };

    let mut defaulted_fields = Vec::new();
    let mut number = |name: &'static str, alias: &'static str| -> f64 {
        match lookup(object, name, alias).and_then(coerce_number) {
            Some(value) => value,
            None => {
                tracing::warn!(field = name, "Analysis field unreadable, defaulting to 0");
                defaulted_fields.push(name.to_string());
                0.0
            }
        }
    };

    let protein = number("protein", "protein");
    let carbs = number("carbs", "carbs");
    let fat = number("fat", "fat");
    let fiber = number("fiber", "fiber");
    let sugar = number("sugar", "sugar");
    let sodium = number("sodium", "sodium");
    let health_score = number("healthScore", "health_score");
    let portion_quality_score = number("portionQualityScore", "portion_quality_score");
    let variety_score = number("varietyScore", "variety_score");
    let nutrition_balance_score = number("nutritionBalanceScore", "nutrition_balance_score");

    let food_items = lookup(object, "foodItems", "food_items")
        .map(food_items)
        .unwrap_or_default();

    Ok(AnalysisResult {
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        sodium,
        food_items,
        health_score,
        portion_quality_score,
        variety_score,
        nutrition_balance_score,
        recommendations,
        defaulted_fields,
    })
}

fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // drop the info string ("json") up to the first newline
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn lookup<'a>(object: &'a Map<String, Value>, name: &str, alias: &str) -> Option<&'a Value> {
    object
        .get(name)
        .or_else(|| object.get(alias))
        .filter(|value| !value.is_null())
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
            // "12g", "450 mg"
            let cleaned = cleaned
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .trim();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    number.is_finite().then_some(number)
}

fn food_items(value: &Value) -> Vec<String> {
    let items: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(joined) => joined.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
