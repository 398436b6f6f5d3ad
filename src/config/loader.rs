//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollSettings;

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "payroll.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── payroll.yaml   # Threshold, multipliers and week start
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekly threshold: {}", loader.settings().weekly_threshold_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - The file contains invalid YAML
    /// - A value is out of range (non-positive threshold, non-finite multiplier)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join(SETTINGS_FILE);
        let settings = Self::load_yaml::<PayrollSettings>(&settings_path)?;
        Self::from_settings(settings)
    }

    /// Wraps already-built settings after validating them.
    ///
    /// ```
    /// use labor_engine::config::{ConfigLoader, PayrollSettings};
    ///
    /// let loader = ConfigLoader::from_settings(PayrollSettings::default()).unwrap();
    /// assert_eq!(loader.settings().overtime_multiplier, 1.5);
    /// ```
    pub fn from_settings(settings: PayrollSettings) -> EngineResult<Self> {
        validate(&settings)?;
        Ok(Self { settings })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }
}

fn validate(settings: &PayrollSettings) -> EngineResult<()> {
    if !(settings.weekly_threshold_hours.is_finite() && settings.weekly_threshold_hours > 0.0) {
        return Err(EngineError::InvalidConfig {
            field: "weekly_threshold_hours".to_string(),
            message: format!(
                "must be a positive number, got {}",
                settings.weekly_threshold_hours
            ),
        });
    }

    for (field, value) in [
        ("overtime_multiplier", settings.overtime_multiplier),
        ("holiday_multiplier", settings.holiday_multiplier),
    ] {
        if !value.is_finite() {
            return Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("must be a finite number, got {}", value),
            });
        }
    }

    if let Some(rate) = settings.default_hourly_rate {
        if !rate.is_finite() {
            return Err(EngineError::InvalidConfig {
                field: "default_hourly_rate".to_string(),
                message: format!("must be a finite number, got {}", rate),
            });
        }
    }

    Ok(())
}
