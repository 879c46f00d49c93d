use eatup_core::domain::meal::entities::MealType;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Largest accepted meal photo
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Room for the other multipart fields on top of the photo
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_IMAGE_BYTES + 1024 * 1024;

pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetMealsQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub meal_type: Option<MealType>,
}

pub fn validate_image(image: &[u8]) -> Result<(), String> {
    if image.is_empty() {
        return Err("Image cannot be empty".to_string());
    }
    if image.len() > MAX_IMAGE_BYTES {
        return Err(format!(
            "Image too large: {} bytes, max is {MAX_IMAGE_BYTES} bytes",
            image.len()
        ));
    }
    Ok(())
}

/// Blank descriptions are treated as absent.
pub fn normalize_description(description: Option<String>) -> Result<Option<String>, String> {
    let Some(description) = description else {
        return Ok(None);
    };

    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(format!(
            "Description is limited to {MAX_DESCRIPTION_CHARS} characters"
        ));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_limit_is_inclusive() {
        assert!(validate_image(&vec![0u8; MAX_IMAGE_BYTES]).is_ok());
        assert!(validate_image(&vec![0u8; MAX_IMAGE_BYTES + 1]).is_err());
        assert!(validate_image(&[]).is_err());
    }

    #[test]
    fn blank_descriptions_are_dropped() {
        assert_eq!(normalize_description(None), Ok(None));
        assert_eq!(normalize_description(Some("   ".into())), Ok(None));
        assert_eq!(
            normalize_description(Some(" oatmeal ".into())),
            Ok(Some("oatmeal".to_string()))
        );
        assert!(normalize_description(Some("x".repeat(MAX_DESCRIPTION_CHARS + 1))).is_err());
    }

    #[test]
    fn limit_must_be_positive() {
        let query = GetMealsQuery {
            limit: Some(0),
            offset: None,
            meal_type: None,
        };
        assert!(query.validate().is_err());

        let query = GetMealsQuery {
            limit: Some(20),
            offset: Some(40),
            meal_type: None,
        };
        assert!(query.validate().is_ok());
    }
}
