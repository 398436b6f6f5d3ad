//! Calculation logic for the Labor Cost Engine.
//!
//! This module contains the weekly overtime aggregation (per worker and in
//! total), the labor cost formula, the holiday-aware per-worker cost
//! estimate with hourly rate resolution, and the week bucketing used for
//! pay periods longer than a week.

mod labor_cost;
mod pay_period;
mod weekly_overtime;

pub use labor_cost::{calculate_labor_cost_estimate, resolve_worker_rate};
pub use pay_period::{WeekBuckets, calculate_period_labor_cost, split_by_week, week_start_for};
pub use weekly_overtime::{
    DEFAULT_HOLIDAY_MULTIPLIER, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_THRESHOLD,
    aggregate_single_worker_overtime, aggregate_weekly_overtime,
    aggregate_weekly_overtime_with_breakdown, calculate_labor_cost, group_by_worker,
};
