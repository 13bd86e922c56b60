//! Core data models for the vacation pay calculator.

mod day_month;

pub use day_month::DayMonth;
