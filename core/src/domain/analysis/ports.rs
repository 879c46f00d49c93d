use std::future::Future;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, meal::entities::MealType};

/// Remote vision model. Returns the first text segment of the answer verbatim.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisClient: Send + Sync {
    fn analyze_meal_image(
        &self,
        prompt: String,
        image: Bytes,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromptService: Send + Sync {
    /// Reads the profile and this week's meals, then renders the prompt.
    fn build_analysis_prompt(
        &self,
        user_id: Uuid,
        meal_type: MealType,
        description: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
