//! Request types for the Labor Cost Engine API.
//!
//! Every request carries the raw time entries plus optional overrides for
//! the configured payroll settings. Numeric content is never rejected here;
//! only structurally invalid JSON is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::PayrollSettings;
use crate::models::TimeEntry;

/// Request body for the `/overtime` and `/overtime/breakdown` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The week's time entries.
    pub entries: Vec<TimeEntry>,
    /// Overrides the configured weekly threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_threshold: Option<f64>,
}

impl OvertimeRequest {
    /// Returns the threshold to apply, falling back to the configured one.
    pub fn threshold(&self, settings: &PayrollSettings) -> f64 {
        self.weekly_threshold
            .unwrap_or(settings.weekly_threshold_hours)
    }
}

/// Request body for the `/labor-cost` and `/labor-cost/period` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborCostRequest {
    /// The time entries to cost.
    pub entries: Vec<TimeEntry>,
    /// Overrides the configured weekly threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_threshold: Option<f64>,
    /// Overrides the configured overtime multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_multiplier: Option<f64>,
    /// Overrides the configured holiday multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_multiplier: Option<f64>,
    /// Pay rates by worker key, used for entries that carry no rate of their own.
    #[serde(default)]
    pub worker_rates: HashMap<String, f64>,
}

impl LaborCostRequest {
    /// Returns the configured settings with this request's overrides applied.
    pub fn settings(&self, base: &PayrollSettings) -> PayrollSettings {
        base.with_overrides(
            self.weekly_threshold,
            self.overtime_multiplier,
            self.holiday_multiplier,
        )
    }

    /// Consumes the request, filling in rates for entries that have none.
    ///
    /// An entry's own non-zero rate always wins. Otherwise the rate comes
    /// from `worker_rates` for the entry's worker key, then from
    /// `default_rate`. Entries that resolve nothing are left as they are.
    pub fn into_rated_entries(self, default_rate: Option<f64>) -> Vec<TimeEntry> {
        let worker_rates = self.worker_rates;

        self.entries
            .into_iter()
            .map(|mut entry| {
                if entry.known_rate().is_none() {
                    let fallback = worker_rates
                        .get(entry.worker_key())
                        .copied()
                        .filter(|rate| *rate != 0.0)
                        .or(default_rate);
                    if let Some(rate) = fallback {
                        entry.hourly_rate = Some(rate);
                    }
                }
                entry
            })
            .collect()
    }
}
