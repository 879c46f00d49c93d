use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

/// Years a query date may fall in
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1970..=9999;

pub fn validate_calendar_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if !SUPPORTED_YEARS.contains(&date.year()) {
        return Err(ValidationError::new("date_out_of_range"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Calendar day, `YYYY-MM-DD`
    #[param(value_type = String, format = Date)]
    #[validate(custom(function = "validate_calendar_date"))]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeekQuery {
    /// Any day of the wanted week; all stored weeks when absent
    #[param(value_type = Option<String>, format = Date)]
    #[validate(custom(function = "validate_calendar_date"))]
    pub date: Option<NaiveDate>,
}
