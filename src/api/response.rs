//! Response types for the vacation pay API.
//!
//! Every failure is a caller input problem and maps to `400 Bad Request`
//! with a plain-text body: a kind prefix line followed by the message.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::{CalculatorError, ErrorCategory};

/// Body prefix for argument validation failures.
pub const ILLEGAL_ARGUMENT_PREFIX: &str = "Illegal argument exception";

/// Body prefix for calendar construction failures.
pub const DATE_TIME_PREFIX: &str = "Date time exception";

/// API error with HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error family, which selects the body prefix.
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a `400 Bad Request` error.
    pub fn bad_request(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            category,
            message: message.into(),
        }
    }

    /// Creates an error for query parameters that were missing or malformed.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::bad_request(ErrorCategory::IllegalArgument, message)
    }

    /// The body prefix for this error's category.
    pub fn prefix(&self) -> &'static str {
        match self.category {
            ErrorCategory::IllegalArgument => ILLEGAL_ARGUMENT_PREFIX,
            ErrorCategory::DateTime => DATE_TIME_PREFIX,
        }
    }

    /// The full response body.
    pub fn body(&self) -> String {
        format!("{}:\n{}", self.prefix(), self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body(),
        )
            .into_response()
    }
}

impl From<CalculatorError> for ApiError {
    fn from(error: CalculatorError) -> Self {
        Self::bad_request(error.category(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_argument_body() {
        let error: ApiError = CalculatorError::InvalidDayCount { days: 0 }.into();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error.body(),
            "Illegal argument exception:\nThe amount of vacation days must be at least 1 (got 0)"
        );
    }

    #[test]
    fn test_date_time_body() {
        let error: ApiError = CalculatorError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        }
        .into();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert!(error.body().starts_with("Date time exception:\n"));
    }

    #[test]
    fn test_period_too_long_body_has_both_numbers() {
        let error: ApiError = CalculatorError::VacationPeriodTooLong {
            requested: 40,
            max: 28,
        }
        .into();
        assert!(error.body().ends_with("(40 > 28)"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::invalid_query("missing averageWage").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
