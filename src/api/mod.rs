//! HTTP API module for the vacation pay calculator.
//!
//! This module provides the `GET /calculacte` query endpoint, binding its
//! parameters, running the shared calculator and mapping failures to
//! `400 Bad Request` responses.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{CALCULATE_PATH, create_router};
pub use request::CalculationQuery;
pub use response::{ApiError, DATE_TIME_PREFIX, ILLEGAL_ARGUMENT_PREFIX};
pub use state::AppState;
