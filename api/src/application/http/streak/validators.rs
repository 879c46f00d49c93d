use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::application::http::analytics::validators::validate_calendar_date;

/// Longest range, in days, a single upload-days query may span
pub const MAX_RANGE_DAYS: i64 = 366;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_range"))]
pub struct UploadDaysQuery {
    /// First day, inclusive
    #[param(value_type = String, format = Date)]
    #[validate(custom(function = "validate_calendar_date"))]
    pub start: NaiveDate,
    /// Last day, inclusive
    #[param(value_type = String, format = Date)]
    #[validate(custom(function = "validate_calendar_date"))]
    pub end: NaiveDate,
}

fn validate_range(query: &UploadDaysQuery) -> Result<(), ValidationError> {
    if query.end < query.start {
        return Err(ValidationError::new("end_before_start"));
    }
    if (query.end - query.start).num_days() >= MAX_RANGE_DAYS {
        return Err(ValidationError::new("range_too_long"));
    }
    Ok(())
}
