//! Day classification for vacation windows.
//!
//! This module decides, for each calendar day of a vacation, whether it is
//! a payable workday, a configured weekend day, or a fixed-date holiday.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::DayMonth;

/// The type of a calendar day for vacation pay purposes.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::DayType;
///
/// assert!(DayType::Workday.is_payable());
/// assert!(!DayType::Holiday.is_payable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// An ordinary working day; counts toward paid vacation.
    Workday,
    /// A configured weekend weekday.
    Weekend,
    /// A configured fixed-date holiday that is not also a weekend day.
    Holiday,
}

impl DayType {
    /// Returns true if a vacation day of this type is paid.
    pub fn is_payable(self) -> bool {
        matches!(self, DayType::Workday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Workday => write!(f, "Workday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a single date against the configuration.
///
/// Weekend status is checked first, so a holiday falling on a weekend day
/// is reported as [`DayType::Weekend`]. Holidays match on day and month
/// only and recur every year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_pay::calculation::{classify_day, DayType};
/// use vacation_pay::config::CalculatorConfig;
///
/// let config = CalculatorConfig::default();
///
/// // 2022-10-24 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2022, 10, 24).unwrap();
/// assert_eq!(classify_day(monday, &config), DayType::Workday);
///
/// // 2022-10-29 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2022, 10, 29).unwrap();
/// assert_eq!(classify_day(saturday, &config), DayType::Weekend);
///
/// // 2022-11-04 is a Friday and a public holiday
/// let unity_day = NaiveDate::from_ymd_opt(2022, 11, 4).unwrap();
/// assert_eq!(classify_day(unity_day, &config), DayType::Holiday);
/// ```
pub fn classify_day(date: NaiveDate, config: &CalculatorConfig) -> DayType {
    if config.is_weekend(date.weekday()) {
        DayType::Weekend
    } else if config.is_holiday(&DayMonth::from_date(date)) {
        DayType::Holiday
    } else {
        DayType::Workday
    }
}

/// Tally of day types across a vacation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Days that count toward paid vacation.
    pub payable: u32,
    /// Days skipped because they fall on a weekend weekday.
    pub weekend: u32,
    /// Days skipped because they are fixed-date holidays.
    pub holiday: u32,
}

impl DayCounts {
    /// Total number of days tallied.
    pub fn total(&self) -> u32 {
        self.payable + self.weekend + self.holiday
    }

    fn record(&mut self, day_type: DayType) {
        match day_type {
            DayType::Workday => self.payable += 1,
            DayType::Weekend => self.weekend += 1,
            DayType::Holiday => self.holiday += 1,
        }
    }
}

/// Returns the last day of a window of `days` consecutive days from `start`.
///
/// # Errors
///
/// Returns [`CalculatorError::DateOutOfRange`] if the window would run past
/// the last date chrono can represent.
pub fn window_end(start: NaiveDate, days: u32) -> CalculatorResult<NaiveDate> {
    let offset = u64::from(days.saturating_sub(1));
    start
        .checked_add_days(Days::new(offset))
        .ok_or(CalculatorError::DateOutOfRange { start, days })
}

/// Classifies `days` consecutive calendar days starting at `start` (inclusive).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_pay::calculation::count_days;
/// use vacation_pay::config::CalculatorConfig;
///
/// // Monday 2022-10-24 through Wednesday 2022-11-02
/// let start = NaiveDate::from_ymd_opt(2022, 10, 24).unwrap();
/// let counts = count_days(start, 10, &CalculatorConfig::default()).unwrap();
/// assert_eq!(counts.payable, 8);
/// assert_eq!(counts.weekend, 2);
/// ```
pub fn count_days(
    start: NaiveDate,
    days: u32,
    config: &CalculatorConfig,
) -> CalculatorResult<DayCounts> {
    window_end(start, days)?;

    let mut counts = DayCounts::default();
    for date in start.iter_days().take(days as usize) {
        counts.record(classify_day(date, config));
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weekdays_are_workdays() {
        let config = CalculatorConfig::default();
        // 2026-01-12 is a Monday
        for offset in 0..5 {
            let day = date(2026, 1, 12 + offset);
            assert_eq!(classify_day(day, &config), DayType::Workday, "{day}");
        }
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        let config = CalculatorConfig::default();
        assert_eq!(classify_day(date(2026, 1, 17), &config), DayType::Weekend);
        assert_eq!(classify_day(date(2026, 1, 18), &config), DayType::Weekend);
    }

    #[test]
    fn test_holiday_on_weekday() {
        let config = CalculatorConfig::default();
        // 2023-02-23 is a Thursday
        assert_eq!(classify_day(date(2023, 2, 23), &config), DayType::Holiday);
    }

    #[test]
    fn test_holiday_on_weekend_counts_as_weekend() {
        let config = CalculatorConfig::default();
        // 2022-01-01 is a Saturday
        assert_eq!(classify_day(date(2022, 1, 1), &config), DayType::Weekend);
    }

    #[test]
    fn test_new_year_is_holiday_in_every_weekday_year() {
        let config = CalculatorConfig::default();
        for year in 2000..2040 {
            let day = date(year, 1, 1);
            assert!(
                !classify_day(day, &config).is_payable(),
                "{day} should not be payable"
            );
        }
    }

    #[test]
    fn test_leap_day_holiday() {
        let config = CalculatorConfig::new(
            28,
            vec![DayMonth::new(29, 2).unwrap()],
            Vec::<Weekday>::new(),
            29.3,
        )
        .unwrap();
        assert_eq!(classify_day(date(2024, 2, 29), &config), DayType::Holiday);
        assert_eq!(classify_day(date(2024, 2, 28), &config), DayType::Workday);
    }

    #[test]
    fn test_custom_weekends() {
        let config =
            CalculatorConfig::new(28, Vec::new(), vec![Weekday::Fri, Weekday::Sat], 29.3).unwrap();
        // 2026-01-16 Friday, 2026-01-18 Sunday
        assert_eq!(classify_day(date(2026, 1, 16), &config), DayType::Weekend);
        assert_eq!(classify_day(date(2026, 1, 18), &config), DayType::Workday);
    }

    #[test]
    fn test_count_days_crossing_new_year() {
        let config = CalculatorConfig::default();
        // Thursday 2022-12-29 for 14 days: 29, 30 Dec payable, Jan 1-8 holidays/weekend,
        // Jan 9-11 payable.
        let counts = count_days(date(2022, 12, 29), 14, &config).unwrap();
        assert_eq!(counts.payable, 5);
        assert_eq!(counts.total(), 14);
    }

    #[test]
    fn test_count_days_single_day() {
        let config = CalculatorConfig::default();
        let counts = count_days(date(2024, 2, 29), 1, &config).unwrap();
        assert_eq!(
            counts,
            DayCounts {
                payable: 1,
                weekend: 0,
                holiday: 0
            }
        );
    }

    #[test]
    fn test_window_end_inclusive() {
        assert_eq!(window_end(date(2024, 2, 28), 2).unwrap(), date(2024, 2, 29));
        assert_eq!(window_end(date(2023, 2, 28), 2).unwrap(), date(2023, 3, 1));
        assert_eq!(window_end(date(2023, 2, 28), 1).unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn test_window_past_max_date() {
        let result = count_days(NaiveDate::MAX, 2, &CalculatorConfig::default());
        assert_eq!(
            result,
            Err(CalculatorError::DateOutOfRange {
                start: NaiveDate::MAX,
                days: 2
            })
        );
    }
}
