//! Request types for the vacation pay API.
//!
//! This module defines the query string accepted by the `/calculacte` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::vacation_start;
use crate::error::CalculatorResult;

/// Query parameters for `GET /calculacte`.
///
/// All five parameters are required. The start date is kept as raw
/// integers so that impossible dates reach the calculator and are reported
/// as date errors rather than binding errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationQuery {
    /// Average monthly wage.
    pub average_wage: f64,
    /// Number of consecutive calendar days of vacation.
    pub vacation_days_amount: i32,
    /// Day of month of the first vacation day.
    pub vacation_start_day: i32,
    /// Month of the first vacation day.
    pub vacation_start_month: i32,
    /// Year of the first vacation day.
    pub vacation_start_year: i32,
}

impl CalculationQuery {
    /// Builds the first vacation day from the query fields.
    pub fn vacation_start(&self) -> CalculatorResult<NaiveDate> {
        vacation_start(
            self.vacation_start_year,
            self.vacation_start_month,
            self.vacation_start_day,
        )
    }
}
