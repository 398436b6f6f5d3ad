//! Weekly overtime result models.
//!
//! These types carry the regular/overtime split produced by the weekly
//! aggregation, both in total and per worker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Regular and overtime portions of a single hour total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the weekly threshold.
    pub regular_hours: f64,
    /// Hours beyond the weekly threshold.
    pub overtime_hours: f64,
}

/// Aggregate regular, overtime and total hours across all workers.
///
/// `total_hours` is always built as `regular_hours + overtime_hours`.
///
/// # Example
///
/// ```
/// use labor_engine::models::OvertimeTotals;
///
/// let totals = OvertimeTotals::from_parts(60.0, 10.0);
/// assert_eq!(totals.total_hours, 70.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OvertimeTotals {
    /// Sum of every worker's regular hours.
    pub regular_hours: f64,
    /// Sum of every worker's overtime hours.
    pub overtime_hours: f64,
    /// `regular_hours + overtime_hours`.
    pub total_hours: f64,
}

impl OvertimeTotals {
    /// Builds totals from their regular and overtime parts.
    pub fn from_parts(regular_hours: f64, overtime_hours: f64) -> Self {
        Self {
            regular_hours,
            overtime_hours,
            total_hours: regular_hours + overtime_hours,
        }
    }
}

/// One worker's weekly hours and their split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerHours {
    /// Sum of the worker's effective hours.
    pub total_hours: f64,
    /// Hours up to the weekly threshold.
    pub regular_hours: f64,
    /// Hours beyond the weekly threshold.
    pub overtime_hours: f64,
}

/// Weekly totals together with the per-worker figures they were summed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Totals across all workers.
    pub totals: OvertimeTotals,
    /// Per-worker hours, keyed by worker key.
    pub by_worker: BTreeMap<String, WorkerHours>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_identity_holds_by_construction() {
        let totals = OvertimeTotals::from_parts(40.0, 5.5);
        assert_eq!(totals.total_hours, totals.regular_hours + totals.overtime_hours);
    }

    #[test]
    fn test_default_totals_are_zero() {
        let totals = OvertimeTotals::default();
        assert_eq!(totals.regular_hours, 0.0);
        assert_eq!(totals.overtime_hours, 0.0);
        assert_eq!(totals.total_hours, 0.0);
    }

    #[test]
    fn test_breakdown_serializes_workers_by_key() {
        let mut by_worker = BTreeMap::new();
        by_worker.insert(
            "A".to_string(),
            WorkerHours {
                total_hours: 45.0,
                regular_hours: 40.0,
                overtime_hours: 5.0,
            },
        );
        let breakdown = OvertimeBreakdown {
            totals: OvertimeTotals::from_parts(40.0, 5.0),
            by_worker,
        };

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["totals"]["total_hours"], 45.0);
        assert_eq!(json["by_worker"]["A"]["overtime_hours"], 5.0);
    }
}
