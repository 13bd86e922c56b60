//! Application state for the vacation pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::VacationPayCalculator;
use crate::config::CalculatorConfig;

/// Shared application state.
///
/// Holds the single calculator instance shared by every request.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<VacationPayCalculator>,
}

impl AppState {
    /// Creates a new application state with a calculator for the given configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_calculator(Arc::new(VacationPayCalculator::new(config)))
    }

    /// Creates a new application state around an existing calculator, so the
    /// caller can keep a handle for reconfiguring it at runtime.
    pub fn with_calculator(calculator: Arc<VacationPayCalculator>) -> Self {
        Self { calculator }
    }

    /// Returns a reference to the calculator.
    pub fn calculator(&self) -> &VacationPayCalculator {
        &self.calculator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_calculator() {
        let state = AppState::default();
        let clone = state.clone();
        state.calculator().set_max_vacation_period(10).unwrap();
        assert_eq!(clone.calculator().max_vacation_period(), 10);
    }
}
