use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc,
};

use crate::domain::common::entities::app_errors::CoreError;

/// Calendar-day and ISO-week arithmetic in one fixed zone.
///
/// Every streak comparison, daily window and weekly window goes through the
/// same `Calendar` so that "today" means the same thing everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar {
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    pub fn from_offset_minutes(minutes: i32) -> Result<Self, CoreError> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| CoreError::Config(format!("invalid UTC offset: {minutes} minutes")))?;

        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar day containing `instant`.
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Instant at which `day` starts. Fails for days at the edge of the
    /// representable range.
    pub fn start_of_day(&self, day: NaiveDate) -> Result<DateTime<Utc>, CoreError> {
        let local_midnight = day.and_time(NaiveTime::MIN);
        let shift = Duration::seconds(i64::from(self.offset.local_minus_utc()));
        let utc = local_midnight
            .checked_sub_signed(shift)
            .ok_or_else(|| out_of_range(day))?;
        Ok(Utc.from_utc_datetime(&utc))
    }

    /// Half-open `[start, end)` instants covering `day`.
    pub fn day_bounds(&self, day: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>), CoreError> {
        let start = self.start_of_day(day)?;
        let end = start
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| out_of_range(day))?;
        Ok((start, end))
    }

    /// Monday of the ISO week containing `day`.
    pub fn week_start(&self, day: NaiveDate) -> Result<NaiveDate, CoreError> {
        day.checked_sub_signed(Duration::days(i64::from(
            day.weekday().num_days_from_monday(),
        )))
        .ok_or_else(|| out_of_range(day))
    }

    /// `week_start` moved by `weeks` whole weeks.
    pub fn shift_weeks(&self, week_start: NaiveDate, weeks: i64) -> Result<NaiveDate, CoreError> {
        week_start
            .checked_add_signed(Duration::weeks(weeks))
            .ok_or_else(|| out_of_range(week_start))
    }

    /// Half-open `[start, end)` instants covering the ISO week that starts on `week_start`.
    pub fn week_bounds(
        &self,
        week_start: NaiveDate,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), CoreError> {
        let start = self.start_of_day(week_start)?;
        let end = start
            .checked_add_signed(Duration::weeks(1))
            .ok_or_else(|| out_of_range(week_start))?;
        Ok((start, end))
    }

    pub fn iso_week_number(&self, day: NaiveDate) -> u32 {
        day.iso_week().week()
    }
}

fn out_of_range(day: NaiveDate) -> CoreError {
    CoreError::Invalid(format!("date out of supported range: {day}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_of_respects_offset() {
        let calendar = Calendar::from_offset_minutes(-5 * 60).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 11, 16, 3, 0, 0).unwrap();

        assert_eq!(calendar.day_of(instant), date(2025, 11, 15));
        assert_eq!(Calendar::utc().day_of(instant), date(2025, 11, 16));
    }

    #[test]
    fn day_bounds_are_local_midnights() {
        let calendar = Calendar::from_offset_minutes(120).unwrap();
        let (start, end) = calendar.day_bounds(date(2025, 11, 15)).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2025, 11, 14, 22, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 11, 15, 22, 0, 0).unwrap());
    }

    #[test]
    fn week_starts_on_monday() {
        let calendar = Calendar::utc();

        assert_eq!(calendar.week_start(date(2025, 11, 16)).unwrap(), date(2025, 11, 10));
        assert_eq!(calendar.week_start(date(2025, 11, 10)).unwrap(), date(2025, 11, 10));
        assert_eq!(calendar.iso_week_number(date(2025, 11, 16)), 46);
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert!(matches!(
            Calendar::from_offset_minutes(24 * 60),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn extreme_dates_are_invalid_not_a_panic() {
        let west = Calendar::from_offset_minutes(-5 * 60).unwrap();
        let east = Calendar::from_offset_minutes(2 * 60).unwrap();

        // the window end runs past the last representable instant
        assert!(matches!(west.day_bounds(NaiveDate::MAX), Err(CoreError::Invalid(_))));
        assert!(matches!(west.week_bounds(NaiveDate::MAX), Err(CoreError::Invalid(_))));
        // local midnight is before the first representable instant
        assert!(matches!(east.day_bounds(NaiveDate::MIN), Err(CoreError::Invalid(_))));
        assert!(matches!(east.week_bounds(NaiveDate::MIN), Err(CoreError::Invalid(_))));
        assert!(matches!(
            Calendar::utc().week_start(NaiveDate::MIN),
            Err(CoreError::Invalid(_))
        ));
        assert!(matches!(
            Calendar::utc().shift_weeks(NaiveDate::MAX, 1),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn shift_weeks_moves_by_whole_weeks() {
        let calendar = Calendar::utc();

        assert_eq!(calendar.shift_weeks(date(2025, 11, 10), 1).unwrap(), date(2025, 11, 17));
        assert_eq!(calendar.shift_weeks(date(2025, 11, 10), -1).unwrap(), date(2025, 11, 3));
    }
}
