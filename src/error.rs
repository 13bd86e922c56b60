//! Error types for the vacation pay calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every input-validation failure the calculator can report. None of
//! them are transient: the caller must correct the input and resubmit.

use chrono::NaiveDate;
use thiserror::Error;

/// The family an error belongs to, used to pick the HTTP body prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A numeric argument or configuration value was out of range.
    IllegalArgument,
    /// A calendar value could not be constructed or parsed.
    DateTime,
}

/// The main error type for the vacation pay calculator.
///
/// # Example
///
/// ```
/// use vacation_pay::error::CalculatorError;
///
/// let error = CalculatorError::VacationPeriodTooLong { requested: 30, max: 28 };
/// assert_eq!(
///     error.to_string(),
///     "The amount of vacation days is too big (30 > 28)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The calculator configuration was rejected.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// A description of the invalid value.
        message: String,
    },

    /// The average wage was not a finite number greater than zero.
    #[error("Average wage must be greater than zero (got {wage})")]
    InvalidWage {
        /// The rejected wage.
        wage: f64,
    },

    /// Fewer than one vacation day was requested.
    #[error("The amount of vacation days must be at least 1 (got {days})")]
    InvalidDayCount {
        /// The rejected day count.
        days: i64,
    },

    /// More vacation days were requested than the configuration allows.
    #[error("The amount of vacation days is too big ({requested} > {max})")]
    VacationPeriodTooLong {
        /// The requested number of days.
        requested: i64,
        /// The configured maximum.
        max: u32,
    },

    /// The vacation start date does not exist in the calendar.
    #[error("Invalid date: {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: i32,
        /// The requested day of month.
        day: i32,
    },

    /// The vacation window runs past the last representable date.
    #[error("Vacation of {days} days starting {start} runs past the last supported date")]
    DateOutOfRange {
        /// The first vacation day.
        start: NaiveDate,
        /// The requested number of days.
        days: u32,
    },

    /// A day/month pair that can never occur in any year.
    #[error("Invalid day and month: day {day} does not exist in month {month}")]
    InvalidDayMonth {
        /// The requested day of month.
        day: u32,
        /// The requested month.
        month: u32,
    },

    /// A day/month string did not match `DD.MM`.
    #[error("Text '{input}' could not be parsed as DD.MM")]
    DayMonthParse {
        /// The text that failed to parse.
        input: String,
    },

    /// A settings file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl CalculatorError {
    /// Returns the family this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalculatorError::InvalidDate { .. }
            | CalculatorError::DateOutOfRange { .. }
            | CalculatorError::InvalidDayMonth { .. }
            | CalculatorError::DayMonthParse { .. } => ErrorCategory::DateTime,
            _ => ErrorCategory::IllegalArgument,
        }
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
