//! Configuration types for vacation pay calculation.
//!
//! [`CalculatorConfig`] is the validated snapshot the calculator works
//! against. [`CalculatorSettings`] is the loosely-typed shape read from
//! YAML settings files.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::DayMonth;

/// Default upper bound on requested vacation days per calculation.
pub const DEFAULT_MAX_VACATION_PERIOD: u32 = 28;

/// Default divisor turning an average monthly wage into a daily rate.
pub const DEFAULT_AVERAGE_MONTH_LENGTH: f64 = 29.3;

/// Default non-working weekdays.
pub const DEFAULT_WEEKENDS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Default fixed-date public holidays (Russian federal calendar).
pub const DEFAULT_HOLIDAYS: [DayMonth; 14] = [
    DayMonth::new_unchecked(1, 1),
    DayMonth::new_unchecked(2, 1),
    DayMonth::new_unchecked(3, 1),
    DayMonth::new_unchecked(4, 1),
    DayMonth::new_unchecked(5, 1),
    DayMonth::new_unchecked(6, 1),
    DayMonth::new_unchecked(7, 1),
    DayMonth::new_unchecked(8, 1),
    DayMonth::new_unchecked(23, 2),
    DayMonth::new_unchecked(8, 3),
    DayMonth::new_unchecked(1, 5),
    DayMonth::new_unchecked(9, 5),
    DayMonth::new_unchecked(12, 6),
    DayMonth::new_unchecked(4, 11),
];

/// A validated calculator configuration.
///
/// Holidays and weekends are stored as sets, so duplicates passed to the
/// constructor or setters are silently dropped. Getters hand out owned,
/// sorted copies.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use vacation_pay::config::CalculatorConfig;
/// use vacation_pay::models::DayMonth;
///
/// let config = CalculatorConfig::new(
///     14,
///     vec![DayMonth::new(25, 12).unwrap(), DayMonth::new(25, 12).unwrap()],
///     vec![Weekday::Sun],
///     30.0,
/// )
/// .unwrap();
///
/// assert_eq!(config.holidays().len(), 1);
/// assert!(CalculatorConfig::new(0, vec![], vec![], 30.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    max_vacation_period: u32,
    average_month_length: f64,
    weekends: HashSet<Weekday>,
    holidays: HashSet<DayMonth>,
}

impl CalculatorConfig {
    /// Creates a configuration, validating the numeric limits.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidConfiguration`] if
    /// `max_vacation_period` is zero or `average_month_length` is not a
    /// positive finite number.
    pub fn new(
        max_vacation_period: u32,
        holidays: impl IntoIterator<Item = DayMonth>,
        weekends: impl IntoIterator<Item = Weekday>,
        average_month_length: f64,
    ) -> CalculatorResult<Self> {
        validate_average_month_length(average_month_length)?;
        validate_max_vacation_period(max_vacation_period)?;

        Ok(Self {
            max_vacation_period,
            average_month_length,
            weekends: weekends.into_iter().collect(),
            holidays: holidays.into_iter().collect(),
        })
    }

    /// Upper bound on requested vacation days.
    pub fn max_vacation_period(&self) -> u32 {
        self.max_vacation_period
    }

    /// Divisor used to derive the daily rate.
    pub fn average_month_length(&self) -> f64 {
        self.average_month_length
    }

    /// Non-working weekdays, Monday first.
    pub fn weekends(&self) -> Vec<Weekday> {
        let mut weekends: Vec<Weekday> = self.weekends.iter().copied().collect();
        weekends.sort_by_key(|day| day.num_days_from_monday());
        weekends
    }

    /// Fixed-date holidays in calendar order.
    pub fn holidays(&self) -> Vec<DayMonth> {
        let mut holidays: Vec<DayMonth> = self.holidays.iter().copied().collect();
        holidays.sort();
        holidays
    }

    /// Returns true if the weekday is configured as a weekend day.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekends.contains(&weekday)
    }

    /// Returns true if the day/month is configured as a holiday.
    pub fn is_holiday(&self, day_month: &DayMonth) -> bool {
        self.holidays.contains(day_month)
    }

    /// Replaces the maximum vacation period.
    pub fn set_max_vacation_period(&mut self, max_vacation_period: u32) -> CalculatorResult<()> {
        validate_max_vacation_period(max_vacation_period)?;
        self.max_vacation_period = max_vacation_period;
        Ok(())
    }

    /// Replaces the average month length.
    pub fn set_average_month_length(&mut self, average_month_length: f64) -> CalculatorResult<()> {
        validate_average_month_length(average_month_length)?;
        self.average_month_length = average_month_length;
        Ok(())
    }

    /// Replaces the whole weekend set.
    pub fn set_weekends(&mut self, weekends: impl IntoIterator<Item = Weekday>) {
        self.weekends = weekends.into_iter().collect();
    }

    /// Replaces the whole holiday set.
    pub fn set_holidays(&mut self, holidays: impl IntoIterator<Item = DayMonth>) {
        self.holidays = holidays.into_iter().collect();
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_vacation_period: DEFAULT_MAX_VACATION_PERIOD,
            average_month_length: DEFAULT_AVERAGE_MONTH_LENGTH,
            weekends: DEFAULT_WEEKENDS.into_iter().collect(),
            holidays: DEFAULT_HOLIDAYS.into_iter().collect(),
        }
    }
}

fn validate_average_month_length(value: f64) -> CalculatorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::InvalidConfiguration {
            message: format!("Average month length must be greater than zero (got {value})"),
        })
    }
}

fn validate_max_vacation_period(value: u32) -> CalculatorResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(CalculatorError::InvalidConfiguration {
            message: format!("Max vacation period must be at least 1 day (got {value})"),
        })
    }
}

/// Settings file contents.
///
/// Every field is optional; missing fields fall back to the defaults.
///
/// ```yaml
/// max_vacation_period: 28
/// average_month_length: 29.3
/// weekends: [Sat, Sun]
/// holidays: ["01.01", "23.02"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorSettings {
    /// Upper bound on requested vacation days.
    #[serde(default)]
    pub max_vacation_period: Option<u32>,
    /// Divisor used to derive the daily rate.
    #[serde(default)]
    pub average_month_length: Option<f64>,
    /// Non-working weekdays.
    #[serde(default)]
    pub weekends: Option<Vec<Weekday>>,
    /// Fixed-date holidays as `DD.MM` strings.
    #[serde(default)]
    pub holidays: Option<Vec<DayMonth>>,
}

impl TryFrom<CalculatorSettings> for CalculatorConfig {
    type Error = CalculatorError;

    fn try_from(settings: CalculatorSettings) -> Result<Self, Self::Error> {
        let defaults = CalculatorConfig::default();
        CalculatorConfig::new(
            settings
                .max_vacation_period
                .unwrap_or(defaults.max_vacation_period),
            settings.holidays.unwrap_or_else(|| defaults.holidays()),
            settings.weekends.unwrap_or_else(|| defaults.weekends()),
            settings
                .average_month_length
                .unwrap_or(defaults.average_month_length),
        )
    }
}
