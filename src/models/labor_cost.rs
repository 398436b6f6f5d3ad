//! Labor cost result models.
//!
//! This module contains the per-worker cost lines, their totals, and the
//! week-by-week wrapper used for pay periods longer than one week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// Hours and cost for one worker within one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerLaborCost {
    /// The worker key the entries were grouped under.
    pub worker_key: String,
    /// The hourly rate used for every cost component.
    pub hourly_rate: f64,
    /// Non-holiday hours up to the threshold.
    pub regular_hours: f64,
    /// Non-holiday hours beyond the threshold.
    pub overtime_hours: f64,
    /// Hours flagged as holiday work.
    pub holiday_hours: f64,
    /// `regular_hours * hourly_rate`.
    pub regular_cost: f64,
    /// `overtime_hours * hourly_rate * overtime_multiplier`.
    pub overtime_cost: f64,
    /// `holiday_hours * hourly_rate * holiday_multiplier`.
    pub holiday_cost: f64,
    /// Sum of the three cost components.
    pub total_cost: f64,
}

/// Totals across a set of [`WorkerLaborCost`] lines.
///
/// # Example
///
/// ```
/// use labor_engine::models::LaborCostTotals;
///
/// let totals = LaborCostTotals::default();
/// assert_eq!(totals.total_cost, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborCostTotals {
    /// Sum of regular hours.
    pub regular_hours: f64,
    /// Sum of overtime hours.
    pub overtime_hours: f64,
    /// Sum of holiday hours.
    pub holiday_hours: f64,
    /// `regular_hours + overtime_hours + holiday_hours`.
    pub total_hours: f64,
    /// Sum of every worker's total cost.
    pub total_cost: f64,
}

impl LaborCostTotals {
    /// Sums worker lines into totals.
    pub fn from_workers<'a>(workers: impl IntoIterator<Item = &'a WorkerLaborCost>) -> Self {
        let mut totals = Self::default();
        for worker in workers {
            totals.regular_hours += worker.regular_hours;
            totals.overtime_hours += worker.overtime_hours;
            totals.holiday_hours += worker.holiday_hours;
            totals.total_cost += worker.total_cost;
        }
        totals.total_hours = totals.regular_hours + totals.overtime_hours + totals.holiday_hours;
        totals
    }

    /// Adds another set of totals to this one.
    pub fn accumulate(&mut self, other: &LaborCostTotals) {
        self.regular_hours += other.regular_hours;
        self.overtime_hours += other.overtime_hours;
        self.holiday_hours += other.holiday_hours;
        self.total_hours += other.total_hours;
        self.total_cost += other.total_cost;
    }
}

/// A labor cost estimate for one week of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborCostEstimate {
    /// Per-worker cost lines, ordered by worker key.
    pub workers: Vec<WorkerLaborCost>,
    /// Totals across all workers.
    pub totals: LaborCostTotals,
    /// Decisions and warnings recorded while estimating.
    pub audit_trace: AuditTrace,
}

/// The estimate for one week of a pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLaborCost {
    /// First day of the week, or `None` for entries without a work date.
    pub week_start: Option<NaiveDate>,
    /// The estimate for that week's entries.
    pub estimate: LaborCostEstimate,
}

/// A labor cost estimate for a pay period split into weeks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodLaborCost {
    /// Weekly estimates, dated weeks first in date order.
    pub weeks: Vec<WeeklyLaborCost>,
    /// Totals across every week.
    pub totals: LaborCostTotals,
}
