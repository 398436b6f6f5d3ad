//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `payroll.yaml`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_HOLIDAY_MULTIPLIER, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_THRESHOLD,
};

/// Payroll settings applied uniformly to every worker.
///
/// Every field has a default, so a YAML file only needs to list the values
/// that differ from the standard 40 hour week at time-and-a-half.
///
/// # Example
///
/// ```
/// use labor_engine::config::PayrollSettings;
///
/// let settings: PayrollSettings = serde_yaml::from_str("holiday_multiplier: 2.5").unwrap();
/// assert_eq!(settings.weekly_threshold_hours, 40.0);
/// assert_eq!(settings.holiday_multiplier, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Weekly hours above which time counts as overtime.
    #[serde(default = "default_weekly_threshold")]
    pub weekly_threshold_hours: f64,
    /// Multiplier applied to the hourly rate for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: f64,
    /// Multiplier applied to the hourly rate for holiday hours.
    #[serde(default = "default_holiday_multiplier")]
    pub holiday_multiplier: f64,
    /// First day of the payroll week, used to bucket dated entries.
    #[serde(default = "default_week_start")]
    pub week_starts_on: Weekday,
    /// Rate used when neither the entry nor the request supplies one.
    #[serde(default)]
    pub default_hourly_rate: Option<f64>,
}

fn default_weekly_threshold() -> f64 {
    DEFAULT_WEEKLY_THRESHOLD
}

fn default_overtime_multiplier() -> f64 {
    DEFAULT_OVERTIME_MULTIPLIER
}

fn default_holiday_multiplier() -> f64 {
    DEFAULT_HOLIDAY_MULTIPLIER
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            weekly_threshold_hours: DEFAULT_WEEKLY_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            holiday_multiplier: DEFAULT_HOLIDAY_MULTIPLIER,
            week_starts_on: default_week_start(),
            default_hourly_rate: None,
        }
    }
}

impl PayrollSettings {
    /// Returns a copy with any provided overrides applied.
    pub fn with_overrides(
        &self,
        weekly_threshold_hours: Option<f64>,
        overtime_multiplier: Option<f64>,
        holiday_multiplier: Option<f64>,
    ) -> Self {
        Self {
            weekly_threshold_hours: weekly_threshold_hours.unwrap_or(self.weekly_threshold_hours),
            overtime_multiplier: overtime_multiplier.unwrap_or(self.overtime_multiplier),
            holiday_multiplier: holiday_multiplier.unwrap_or(self.holiday_multiplier),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PayrollSettings::default();
        assert_eq!(settings.weekly_threshold_hours, 40.0);
        assert_eq!(settings.overtime_multiplier, 1.5);
        assert_eq!(settings.holiday_multiplier, 2.0);
        assert_eq!(settings.week_starts_on, Weekday::Mon);
        assert_eq!(settings.default_hourly_rate, None);
    }

    #[test]
    fn test_empty_yaml_mapping_uses_defaults() {
        let settings: PayrollSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, PayrollSettings::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "
weekly_threshold_hours: 38
overtime_multiplier: 1.75
holiday_multiplier: 2.5
week_starts_on: Sunday
default_hourly_rate: 27.5
";
        let settings: PayrollSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.weekly_threshold_hours, 38.0);
        assert_eq!(settings.overtime_multiplier, 1.75);
        assert_eq!(settings.holiday_multiplier, 2.5);
        assert_eq!(settings.week_starts_on, Weekday::Sun);
        assert_eq!(settings.default_hourly_rate, Some(27.5));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let base = PayrollSettings {
            default_hourly_rate: Some(30.0),
            ..PayrollSettings::default()
        };

        let overridden = base.with_overrides(Some(44.0), None, Some(3.0));
        assert_eq!(overridden.weekly_threshold_hours, 44.0);
        assert_eq!(overridden.overtime_multiplier, 1.5);
        assert_eq!(overridden.holiday_multiplier, 3.0);
        assert_eq!(overridden.default_hourly_rate, Some(30.0));
    }
}
