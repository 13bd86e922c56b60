//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};

use super::types::{CalculatorConfig, CalculatorSettings};

/// Loads a [`CalculatorConfig`] from a YAML settings file.
///
/// # Example
///
/// ```no_run
/// use vacation_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vacation_pay.yaml")?;
/// println!("Max vacation period: {}", loader.config().max_vacation_period());
/// # Ok::<(), vacation_pay::error::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified settings file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    /// - The values fail validation (`InvalidConfiguration`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let settings = Self::load_yaml(path)?;
        let config = CalculatorConfig::try_from(settings)?;

        debug!(
            path = %path.display(),
            max_vacation_period = config.max_vacation_period(),
            average_month_length = config.average_month_length(),
            holidays = config.holidays().len(),
            "Loaded calculator configuration"
        );

        Ok(Self { config })
    }

    /// Parses settings from YAML text.
    pub fn from_yaml_str(content: &str) -> CalculatorResult<Self> {
        let settings: CalculatorSettings =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            config: CalculatorConfig::try_from(settings)?,
        })
    }

    fn load_yaml(path: &Path) -> CalculatorResult<CalculatorSettings> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalculatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayMonth;
    use chrono::Weekday;

    fn config_path() -> &'static str {
        "./config/vacation_pay.yaml"
    }

    #[test]
    fn test_load_shipped_configuration_matches_defaults() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        assert_eq!(result.unwrap().config(), &CalculatorConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/vacation_pay.yaml");
        match result {
            Err(CalculatorError::ConfigNotFound { path }) => {
                assert!(path.contains("vacation_pay.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_partial_settings() {
        let loader = ConfigLoader::from_yaml_str("weekends: [Sun]\n").unwrap();
        let config = loader.into_config();
        assert_eq!(config.weekends(), vec![Weekday::Sun]);
        assert_eq!(config.max_vacation_period(), 28);
        assert!(config.is_holiday(&DayMonth::new(1, 1).unwrap()));
    }

    #[test]
    fn test_from_yaml_str_unknown_key() {
        let result = ConfigLoader::from_yaml_str("max_vacation_days: 10\n");
        assert!(matches!(
            result,
            Err(CalculatorError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_from_yaml_str_invalid_values() {
        let result = ConfigLoader::from_yaml_str("max_vacation_period: 0\n");
        assert!(matches!(
            result,
            Err(CalculatorError::InvalidConfiguration { .. })
        ));
    }
}
