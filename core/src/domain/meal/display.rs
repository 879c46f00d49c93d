use std::fmt::Write;

use crate::domain::{analysis::entities::AnalysisResult, meal::entities::MealType};

pub fn score_emoji(health_score: f64) -> &'static str {
    if health_score >= 8.0 {
        "🌟"
    } else if health_score >= 6.0 {
        "👍"
    } else {
        "💡"
    }
}

/// Short summary shown to the user after a meal is logged.
pub fn render_display_text(analysis: &AnalysisResult, meal_type: MealType) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "{} {} Analysis",
        score_emoji(analysis.health_score),
        meal_type.label()
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "📊 Nutrition Breakdown:");
    let _ = writeln!(text, "• Protein: {:.1}g", analysis.protein);
    let _ = writeln!(text, "• Carbs: {:.1}g", analysis.carbs);
    let _ = writeln!(text, "• Fat: {:.1}g", analysis.fat);
    let _ = writeln!(text);
    let _ = writeln!(text, "🎯 Scores:");
    let _ = writeln!(text, "• Overall Health: {:.1}/10", analysis.health_score);
    let _ = writeln!(
        text,
        "• Portion Quality: {:.1}/10",
        analysis.portion_quality_score
    );
    let _ = writeln!(text, "• Variety: {:.1}/10", analysis.variety_score);
    let _ = writeln!(text, "• Balance: {:.1}/10", analysis.nutrition_balance_score);
    let _ = writeln!(text);
    let _ = writeln!(text, "💡 Recommendations:");
    text.push_str(&analysis.recommendations);

    if !analysis.defaulted_fields.is_empty() {
        let _ = write!(
            text,
            "\n\n⚠️ Could not read {}; shown as 0.",
            analysis.defaulted_fields.join(", ")
        );
    }

    text
}
