//! Vacation pay calculation.
//!
//! [`VacationPayCalculator`] is a long-lived service shared between request
//! handlers. It keeps its configuration behind an `Arc` snapshot: every
//! calculation clones the current `Arc` once and works against that value,
//! while setters build a complete replacement and swap it in. A calculation
//! therefore never observes a half-updated holiday or weekend set.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::DayMonth;

use super::day_detection::{count_days, window_end};

/// Detailed result of a vacation pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationPayBreakdown {
    /// First day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the vacation (inclusive).
    pub end_date: NaiveDate,
    /// Number of calendar days requested.
    pub requested_days: u32,
    /// Days that count toward paid vacation.
    pub payable_days: u32,
    /// Days skipped as weekends.
    pub weekend_days: u32,
    /// Days skipped as fixed-date holidays.
    pub holiday_days: u32,
    /// `average_wage / average_month_length`.
    pub daily_rate: f64,
    /// `payable_days * daily_rate`, unrounded.
    pub amount: f64,
}

/// Builds the vacation start date from raw calendar fields.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidDate`] if the month is outside 1-12,
/// the day does not exist in that month (leap years included), or the year
/// is outside chrono's supported range.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::vacation_start;
///
/// assert!(vacation_start(2024, 2, 29).is_ok());
/// assert!(vacation_start(2023, 2, 29).is_err());
/// assert!(vacation_start(2023, 13, 1).is_err());
/// ```
pub fn vacation_start(year: i32, month: i32, day: i32) -> CalculatorResult<NaiveDate> {
    let invalid = CalculatorError::InvalidDate { year, month, day };
    let (Ok(month_u), Ok(day_u)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(invalid);
    };
    NaiveDate::from_ymd_opt(year, month_u, day_u).ok_or(invalid)
}

/// Computes vacation pay from an average wage and a vacation window.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_pay::calculation::VacationPayCalculator;
///
/// let calculator = VacationPayCalculator::default();
/// let start = NaiveDate::from_ymd_opt(2022, 10, 24).unwrap();
///
/// // 8 payable days out of 10, at 29300 / 29.3 = 1000 per day
/// let pay = calculator.calculate_vacation_pay(29300.0, 10, start).unwrap();
/// assert_eq!(pay, 8000.0);
/// ```
#[derive(Debug)]
pub struct VacationPayCalculator {
    config: RwLock<Arc<CalculatorConfig>>,
}

impl VacationPayCalculator {
    /// Creates a calculator using the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the current configuration snapshot.
    pub fn config(&self) -> Arc<CalculatorConfig> {
        let guard = self.config.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replaces the whole configuration at once.
    pub fn replace_config(&self, config: CalculatorConfig) {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(config);
        debug!("Calculator configuration replaced");
    }

    /// Applies `change` to a copy of the current configuration and swaps the
    /// copy in. The write lock is held throughout, so concurrent updates are
    /// serialized and none is lost.
    fn update<F>(&self, change: F) -> CalculatorResult<()>
    where
        F: FnOnce(&mut CalculatorConfig) -> CalculatorResult<()>,
    {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = CalculatorConfig::clone(&**guard);
        change(&mut next)?;
        *guard = Arc::new(next);
        debug!("Calculator configuration updated");
        Ok(())
    }

    /// Upper bound on requested vacation days.
    pub fn max_vacation_period(&self) -> u32 {
        self.config().max_vacation_period()
    }

    /// Sets the upper bound on requested vacation days.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidConfiguration`] if the value is zero.
    pub fn set_max_vacation_period(&self, max_vacation_period: u32) -> CalculatorResult<()> {
        self.update(|config| config.set_max_vacation_period(max_vacation_period))
    }

    /// Divisor used to derive the daily rate.
    pub fn average_month_length(&self) -> f64 {
        self.config().average_month_length()
    }

    /// Sets the divisor used to derive the daily rate.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidConfiguration`] unless the value is
    /// a positive finite number.
    pub fn set_average_month_length(&self, average_month_length: f64) -> CalculatorResult<()> {
        self.update(|config| config.set_average_month_length(average_month_length))
    }

    /// A copy of the configured weekend days.
    pub fn weekends(&self) -> Vec<Weekday> {
        self.config().weekends()
    }

    /// Replaces the weekend days.
    pub fn set_weekends(&self, weekends: impl IntoIterator<Item = Weekday>) {
        let weekends: Vec<Weekday> = weekends.into_iter().collect();
        // Infallible: the closure never returns an error.
        let _ = self.update(|config| {
            config.set_weekends(weekends);
            Ok(())
        });
    }

    /// A copy of the configured holidays.
    pub fn holidays(&self) -> Vec<DayMonth> {
        self.config().holidays()
    }

    /// Replaces the holidays. Duplicates are dropped.
    pub fn set_holidays(&self, holidays: impl IntoIterator<Item = DayMonth>) {
        let holidays: Vec<DayMonth> = holidays.into_iter().collect();
        let _ = self.update(|config| {
            config.set_holidays(holidays);
            Ok(())
        });
    }

    /// Calculates vacation pay.
    ///
    /// Counts the payable days among `vacation_days_amount` consecutive
    /// calendar days starting at `vacation_start` and multiplies the count by
    /// `average_wage / average_month_length`. No rounding is applied.
    ///
    /// # Errors
    ///
    /// Checked in this order, failing on the first violation:
    /// - [`CalculatorError::InvalidWage`] if `average_wage` is not a finite number greater than zero
    /// - [`CalculatorError::InvalidDayCount`] if fewer than one day is requested
    /// - [`CalculatorError::VacationPeriodTooLong`] if more than the configured maximum is requested
    /// - [`CalculatorError::DateOutOfRange`] if the window runs past chrono's last date
    pub fn calculate_vacation_pay(
        &self,
        average_wage: f64,
        vacation_days_amount: i32,
        vacation_start: NaiveDate,
    ) -> CalculatorResult<f64> {
        self.calculate_breakdown(average_wage, vacation_days_amount, vacation_start)
            .map(|breakdown| breakdown.amount)
    }

    /// Calculates vacation pay and reports how each day was classified.
    ///
    /// Validation and arithmetic are identical to
    /// [`calculate_vacation_pay`](Self::calculate_vacation_pay).
    pub fn calculate_breakdown(
        &self,
        average_wage: f64,
        vacation_days_amount: i32,
        vacation_start: NaiveDate,
    ) -> CalculatorResult<VacationPayBreakdown> {
        let config = self.config();
        calculate_with_config(&config, average_wage, vacation_days_amount, vacation_start)
    }
}

impl Default for VacationPayCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

/// Runs one calculation against a fixed configuration snapshot.
fn calculate_with_config(
    config: &CalculatorConfig,
    average_wage: f64,
    vacation_days_amount: i32,
    vacation_start: NaiveDate,
) -> CalculatorResult<VacationPayBreakdown> {
    if !(average_wage.is_finite() && average_wage > 0.0) {
        return Err(CalculatorError::InvalidWage { wage: average_wage });
    }
    if vacation_days_amount < 1 {
        return Err(CalculatorError::InvalidDayCount {
            days: i64::from(vacation_days_amount),
        });
    }
    let max = config.max_vacation_period();
    let requested_days = vacation_days_amount.unsigned_abs();
    if requested_days > max {
        return Err(CalculatorError::VacationPeriodTooLong {
            requested: i64::from(vacation_days_amount),
            max,
        });
    }

    let end_date = window_end(vacation_start, requested_days)?;
    let counts = count_days(vacation_start, requested_days, config)?;

    let daily_rate = average_wage / config.average_month_length();
    let amount = f64::from(counts.payable) * daily_rate;

    Ok(VacationPayBreakdown {
        start_date: vacation_start,
        end_date,
        requested_days,
        payable_days: counts.payable,
        weekend_days: counts.weekend,
        holiday_days: counts.holiday,
        daily_rate,
        amount,
    })
}
