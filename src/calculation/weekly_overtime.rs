//! Weekly overtime aggregation.
//!
//! Hours are summed per worker across a week and each worker's total is
//! split against a single weekly threshold:
//!
//! - **Regular hours:** `min(total, threshold)`
//! - **Overtime hours:** `max(0, total - threshold)`
//!
//! The per-worker splits are then summed. Inputs are not validated; a `NaN`
//! or negative hour value travels through the arithmetic and shows up in
//! the result instead of being rejected or clamped.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{HoursSplit, OvertimeBreakdown, OvertimeTotals, TimeEntry, WorkerHours};

/// Weekly hours above which time counts as overtime.
pub const DEFAULT_WEEKLY_THRESHOLD: f64 = 40.0;

/// Pay multiplier applied to overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: f64 = 1.5;

/// Pay multiplier applied to holiday hours.
pub const DEFAULT_HOLIDAY_MULTIPLIER: f64 = 2.0;

/// Groups entries by worker key, preserving input order within each group.
///
/// # Example
///
/// ```
/// use labor_engine::calculation::group_by_worker;
/// use labor_engine::models::TimeEntry;
///
/// let entries = vec![
///     TimeEntry::for_personnel("A", 8.0),
///     TimeEntry::for_user("u1", 6.0),
///     TimeEntry::for_personnel("A", 4.0),
/// ];
///
/// let groups = group_by_worker(&entries);
/// assert_eq!(groups["A"].len(), 2);
/// assert_eq!(groups["u1"].len(), 1);
/// ```
pub fn group_by_worker(entries: &[TimeEntry]) -> BTreeMap<&str, Vec<&TimeEntry>> {
    let mut groups: BTreeMap<&str, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.worker_key()).or_default().push(entry);
    }
    groups
}

/// Splits a single worker's weekly total into regular and overtime hours.
///
/// # Arguments
///
/// * `total_hours` - The worker's total hours for the week
/// * `threshold` - Weekly hours above which time counts as overtime
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::{aggregate_single_worker_overtime, DEFAULT_WEEKLY_THRESHOLD};
///
/// let split = aggregate_single_worker_overtime(46.5, DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(split.regular_hours, 40.0);
/// assert_eq!(split.overtime_hours, 6.5);
///
/// let split = aggregate_single_worker_overtime(40.0, DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(split.overtime_hours, 0.0);
/// ```
pub fn aggregate_single_worker_overtime(total_hours: f64, threshold: f64) -> HoursSplit {
    HoursSplit {
        regular_hours: nan_min(total_hours, threshold),
        overtime_hours: nan_max(0.0, total_hours - threshold),
    }
}

/// Aggregates regular and overtime hours across all workers for one week.
///
/// Entries are grouped by [`TimeEntry::worker_key`], each worker's effective
/// hours are summed and split against `threshold`, and the splits are added
/// up. `total_hours` is always exactly `regular_hours + overtime_hours`.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::{aggregate_weekly_overtime, DEFAULT_WEEKLY_THRESHOLD};
/// use labor_engine::models::TimeEntry;
///
/// let entries = vec![
///     TimeEntry::for_personnel("A", 30.0),
///     TimeEntry::for_personnel("A", 20.0),
///     TimeEntry::for_personnel("B", 20.0),
/// ];
///
/// let totals = aggregate_weekly_overtime(&entries, DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(totals.regular_hours, 60.0);
/// assert_eq!(totals.overtime_hours, 10.0);
/// assert_eq!(totals.total_hours, 70.0);
/// ```
pub fn aggregate_weekly_overtime(entries: &[TimeEntry], threshold: f64) -> OvertimeTotals {
    aggregate_weekly_overtime_with_breakdown(entries, threshold).totals
}

/// Aggregates weekly overtime and also returns each worker's figures.
///
/// The totals are summed from `by_worker`, so they always agree with it.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::{aggregate_weekly_overtime_with_breakdown, DEFAULT_WEEKLY_THRESHOLD};
/// use labor_engine::models::TimeEntry;
///
/// let entries = vec![
///     TimeEntry::for_personnel("A", 50.0),
///     TimeEntry::for_user("u1", 20.0),
/// ];
///
/// let breakdown = aggregate_weekly_overtime_with_breakdown(&entries, DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(breakdown.by_worker["A"].overtime_hours, 10.0);
/// assert_eq!(breakdown.by_worker["u1"].regular_hours, 20.0);
/// assert_eq!(breakdown.totals.total_hours, 70.0);
/// ```
pub fn aggregate_weekly_overtime_with_breakdown(
    entries: &[TimeEntry],
    threshold: f64,
) -> OvertimeBreakdown {
    let mut by_worker = BTreeMap::new();

    for (worker_key, worker_entries) in group_by_worker(entries) {
        let total_hours: f64 = worker_entries.iter().map(|e| e.effective_hours()).sum();
        let split = aggregate_single_worker_overtime(total_hours, threshold);

        by_worker.insert(
            worker_key.to_string(),
            WorkerHours {
                total_hours,
                regular_hours: split.regular_hours,
                overtime_hours: split.overtime_hours,
            },
        );
    }

    let (regular_hours, overtime_hours) = by_worker
        .values()
        .fold((0.0, 0.0), |(regular, overtime), worker: &WorkerHours| {
            (regular + worker.regular_hours, overtime + worker.overtime_hours)
        });
    let totals = OvertimeTotals::from_parts(regular_hours, overtime_hours);

    debug!(
        entries = entries.len(),
        workers = by_worker.len(),
        threshold,
        regular_hours = totals.regular_hours,
        overtime_hours = totals.overtime_hours,
        "Aggregated weekly overtime"
    );

    OvertimeBreakdown { totals, by_worker }
}

/// Computes the cost of regular and overtime hours at one hourly rate.
///
/// `regular_hours * hourly_rate + overtime_hours * hourly_rate * overtime_multiplier`.
/// No rounding is applied and the multiplier is not range-checked; a
/// multiplier below 1 simply yields a smaller figure.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::calculate_labor_cost;
///
/// assert_eq!(calculate_labor_cost(30.0, 10.0, 20.0, 1.5), 900.0);
/// ```
pub fn calculate_labor_cost(
    regular_hours: f64,
    overtime_hours: f64,
    hourly_rate: f64,
    overtime_multiplier: f64,
) -> f64 {
    regular_hours * hourly_rate + overtime_hours * hourly_rate * overtime_multiplier
}

/// `min` that returns `NaN` when either side is `NaN`.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a <= b {
        a
    } else {
        b
    }
}

/// `max` that returns `NaN` when either side is `NaN`.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a >= b {
        a
    } else {
        b
    }
}
