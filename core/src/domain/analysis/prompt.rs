use std::fmt::Write;

use crate::domain::{
    analysis::schema::get_analysis_response_template, meal::entities::MealType,
    profile::entities::Profile, stats::aggregate::NutrientAverages,
};

pub const NO_MEALS_THIS_WEEK: &str = "No meals have been logged yet this week.";

pub struct PromptInput<'a> {
    pub profile: &'a Profile,
    pub meal_type: MealType,
    pub description: Option<&'a str>,
    /// Averages over the current week's meals, `None` when there are none
    pub past_meals: Option<&'a NutrientAverages>,
}

/// Renders the analysis prompt. Same input, same text.
pub fn render_analysis_prompt(input: &PromptInput<'_>) -> String {
    let profile = input.profile;
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are a nutrition analysis assistant. Analyze the provided meal image and user information, \
         and return the results strictly as a JSON object with the following structure:"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{:#}", get_analysis_response_template());

    if let Some(description) = input.description.map(str::trim).filter(|d| !d.is_empty()) {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "### Additional User Description:");
        let _ = writeln!(prompt, "The food contains: {description}.");
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "### User Information:");
    let _ = writeln!(prompt, "- Age: {}", profile.age);
    let _ = writeln!(prompt, "- Weight: {} lbs", profile.weight);
    let _ = writeln!(prompt, "- Height: {} inches", profile.height);
    if let Some(gender) = profile.disclosed_gender() {
        let _ = writeln!(prompt, "- Gender: {gender}");
    }
    let _ = writeln!(prompt, "- Meal Type: {}", input.meal_type.label());
    let _ = writeln!(prompt, "- Exercise frequency: {}", profile.activity_level);
    let _ = writeln!(prompt, "- Health goal: {}", profile.health_goal);
    let _ = writeln!(prompt, "- Dietary restrictions: {}", profile.dietary_restrictions);
    if let Some(targets) = &profile.macro_targets {
        let _ = writeln!(
            prompt,
            "- Daily macro targets: protein {:.0}g, carbs {:.0}g, fat {:.0}g",
            targets.protein, targets.carbs, targets.fat
        );
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "### Past Meal Averages:");
    match input.past_meals {
        Some(averages) => write_averages(&mut prompt, averages),
        None => {
            let _ = writeln!(prompt, "{NO_MEALS_THIS_WEEK}");
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "### Instructions:");
    let _ = writeln!(
        prompt,
        "1. Estimate macronutrient values (in grams) and food items from the image and context."
    );
    let _ = writeln!(
        prompt,
        "2. Fill out the JSON in the format specified. For score fields, provide a number between 1 and 10."
    );
    let _ = writeln!(
        prompt,
        "3. List each identified food as a separate string in foodItems."
    );
    let _ = writeln!(
        prompt,
        "4. Provide a short, helpful string with food recommendations."
    );
    let _ = writeln!(
        prompt,
        "5. Respond with **ONLY** the JSON object, no explanations, no extra text."
    );
    let _ = writeln!(prompt);
    prompt.push_str("Return only valid JSON.");

    prompt
}

fn write_averages(prompt: &mut String, averages: &NutrientAverages) {
    let _ = writeln!(prompt, "Meals logged this week: {}", averages.meal_count);
    let _ = writeln!(
        prompt,
        "- Protein: {:.1}g, Carbs: {:.1}g, Fat: {:.1}g",
        averages.protein, averages.carbs, averages.fat
    );
    let _ = writeln!(
        prompt,
        "- Fiber: {:.1}g, Sugar: {:.1}g, Sodium: {:.1}g",
        averages.fiber, averages.sugar, averages.sodium
    );
    let _ = writeln!(
        prompt,
        "- Health score: {:.1}, Portion quality: {:.1}, Variety: {:.1}, Balance: {:.1}",
        averages.health_score,
        averages.portion_quality_score,
        averages.variety_score,
        averages.nutrition_balance_score
    );
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::profile::entities::MacroTargets;

    fn profile(gender: Option<&str>) -> Profile {
        Profile {
            user_id: Uuid::new_v4(),
            age: 34,
            weight: 150.0,
            height: 65.0,
            gender: gender.map(str::to_string),
            activity_level: "3 times a week".to_string(),
            dietary_restrictions: "vegetarian".to_string(),
            health_goal: "lose weight".to_string(),
            macro_targets: None,
        }
    }

    fn render(profile: &Profile, description: Option<&str>) -> String {
        render_analysis_prompt(&PromptInput {
            profile,
            meal_type: MealType::Lunch,
            description,
            past_meals: None,
        })
    }

    #[test]
    fn gender_line_is_omitted_when_undisclosed() {
        for gender in [None, Some("prefer not to say"), Some("Prefer Not To Say")] {
            let prompt = render(&profile(gender), None);
            assert!(!prompt.to_lowercase().contains("gender"), "{gender:?}");
            assert!(!prompt.to_lowercase().contains("prefer not"), "{gender:?}");
        }

        let prompt = render(&profile(Some("female")), None);
        assert!(prompt.contains("- Gender: female"));
    }

    #[test]
    fn description_is_included_only_when_present() {
        let prompt = render(&profile(None), Some("rice and beans"));
        assert!(prompt.contains("The food contains: rice and beans."));

        for description in [None, Some(""), Some("   ")] {
            let prompt = render(&profile(None), description);
            assert!(!prompt.contains("The food contains"));
        }
    }

    #[test]
    fn empty_week_uses_no_data_sentence() {
        let prompt = render(&profile(None), None);
        assert!(prompt.contains(NO_MEALS_THIS_WEEK));
        assert!(!prompt.contains("NaN"));
    }

    #[test]
    fn includes_averages_and_targets() {
        let mut profile = profile(None);
        profile.macro_targets = Some(MacroTargets {
            protein: 120.0,
            carbs: 200.0,
            fat: 60.0,
        });
        let averages = NutrientAverages {
            meal_count: 3,
            protein: 25.0,
            carbs: 40.0,
            fat: 12.5,
            fiber: 5.0,
            sugar: 8.0,
            sodium: 0.6,
            health_score: 7.25,
            portion_quality_score: 7.0,
            variety_score: 6.0,
            nutrition_balance_score: 7.5,
        };

        let prompt = render_analysis_prompt(&PromptInput {
            profile: &profile,
            meal_type: MealType::Dinner,
            description: None,
            past_meals: Some(&averages),
        });

        assert!(prompt.contains("Meals logged this week: 3"));
        assert!(prompt.contains("Fat: 12.5g"));
        assert!(prompt.contains("Daily macro targets: protein 120g, carbs 200g, fat 60g"));
        assert!(prompt.contains("- Meal Type: Dinner"));
        assert!(!prompt.contains(NO_MEALS_THIS_WEEK));
    }

    #[test]
    fn embeds_output_contract() {
        let prompt = render(&profile(None), None);
        for key in [
            "\"protein\"",
            "\"foodItems\"",
            "\"healthScore\"",
            "\"nutritionBalanceScore\"",
            "\"recommendations\"",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("between 1 and 10"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let profile = profile(Some("male"));
        assert_eq!(render(&profile, Some("soup")), render(&profile, Some("soup")));
    }
}
