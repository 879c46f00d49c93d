use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::aggregate::{MacroSplit, NutrientAverages},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    /// No meals the week before
    Baseline,
    Improving,
    Declining,
    Maintaining,
}

impl WeeklyTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeeklyTrend::Baseline => "baseline",
            WeeklyTrend::Improving => "improving",
            WeeklyTrend::Declining => "declining",
            WeeklyTrend::Maintaining => "maintaining",
        }
    }
}

impl fmt::Display for WeeklyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeeklyTrend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(WeeklyTrend::Baseline),
            "improving" => Ok(WeeklyTrend::Improving),
            "declining" => Ok(WeeklyTrend::Declining),
            "maintaining" => Ok(WeeklyTrend::Maintaining),
            other => Err(CoreError::Invalid(format!("unknown weekly trend: {other}"))),
        }
    }
}

/// Rollup of one user's meals over one ISO week (Monday to Sunday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyStat {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: NaiveDate,
    /// Sunday, inclusive
    pub week_end_date: NaiveDate,
    pub total_meals: u32,
    pub averages: NutrientAverages,
    pub macro_split: MacroSplit,
    pub best_meal_id: Option<Uuid>,
    pub worst_meal_id: Option<Uuid>,
    pub weekly_trend: WeeklyTrend,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_round_trips_through_text() {
        for trend in [
            WeeklyTrend::Baseline,
            WeeklyTrend::Improving,
            WeeklyTrend::Declining,
            WeeklyTrend::Maintaining,
        ] {
            assert_eq!(trend.as_str().parse::<WeeklyTrend>().unwrap(), trend);
        }
        assert!("better".parse::<WeeklyTrend>().is_err());
    }
}
