//! Day-and-month values used for fixed-date holidays.
//!
//! A [`DayMonth`] ignores the year entirely, so a holiday defined as
//! `01.01` matches the first of January in every year.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Leap year used to validate day/month pairs, so `29.02` is accepted.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// An immutable calendar day-and-month pair.
///
/// Two values are equal iff both day and month are equal. Values order by
/// month first, then by day.
///
/// # Example
///
/// ```
/// use vacation_pay::models::DayMonth;
///
/// let new_year = DayMonth::new(1, 1).unwrap();
/// assert_eq!("01.01".parse::<DayMonth>().unwrap(), new_year);
/// assert_eq!(new_year.to_string(), "1.01");
///
/// assert!(DayMonth::new(29, 2).is_ok());
/// assert!(DayMonth::new(31, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayMonth {
    month: u32,
    day: u32,
}

impl DayMonth {
    /// Creates a day/month pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidDayMonth`] if no year (leap years
    /// included) has such a date, e.g. `31.04` or `30.02`.
    pub fn new(day: u32, month: u32) -> CalculatorResult<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day)
            .map(Self::from_date)
            .ok_or(CalculatorError::InvalidDayMonth { day, month })
    }

    /// Builds a pair without validation. Only for compile-time tables.
    pub(crate) const fn new_unchecked(day: u32, month: u32) -> Self {
        Self { month, day }
    }

    /// Parses a `DD.MM` string (one or two digits on each side of a single `.`).
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DayMonthParse`] for malformed text and
    /// [`CalculatorError::InvalidDayMonth`] for a well-formed but impossible date.
    pub fn parse(text: &str) -> CalculatorResult<Self> {
        let parse_error = || CalculatorError::DayMonthParse {
            input: text.to_string(),
        };

        let (day, month) = text.split_once('.').ok_or_else(parse_error)?;
        let day = parse_component(day).ok_or_else(parse_error)?;
        let month = parse_component(month).ok_or_else(parse_error)?;

        Self::new(day, month)
    }

    /// Extracts the day and month of a date, dropping the year.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Returns true if the date falls on this day and month in any year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() == self.day && date.month() == self.month
    }

    /// The day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.day, self.month)
    }
}

impl FromStr for DayMonth {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DayMonth {
    type Error = CalculatorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for DayMonth {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayMonth> for String {
    fn from(value: DayMonth) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for DayMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}
