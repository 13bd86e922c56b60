//! Calculation logic for vacation pay.
//!
//! This module contains day classification (workday, weekend, fixed-date
//! holiday) and the [`VacationPayCalculator`] service that prorates an
//! average wage over the payable days of a vacation window.

mod day_detection;
mod vacation_pay;

pub use day_detection::{DayCounts, DayType, classify_day, count_days, window_end};
pub use vacation_pay::{VacationPayBreakdown, VacationPayCalculator, vacation_start};
