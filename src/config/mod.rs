//! Configuration for the vacation pay calculator.
//!
//! This module provides the validated [`CalculatorConfig`] snapshot, its
//! built-in defaults, and the [`ConfigLoader`] for YAML settings files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation_pay.yaml").unwrap();
//! println!("Holidays: {}", config.config().holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, CalculatorSettings, DEFAULT_AVERAGE_MONTH_LENGTH, DEFAULT_HOLIDAYS,
    DEFAULT_MAX_VACATION_PERIOD, DEFAULT_WEEKENDS,
};
