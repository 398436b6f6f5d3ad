//! Holiday-aware labor cost estimation.
//!
//! For each worker the entries are partitioned into holiday and non-holiday
//! hours. Only the non-holiday hours are split against the weekly threshold;
//! holiday hours are costed in full at the holiday multiplier.
//!
//! ## Cost Structure
//!
//! - Regular: `regular_hours × rate`
//! - Overtime: `overtime_hours × rate × overtime_multiplier`
//! - Holiday: `holiday_hours × rate × holiday_multiplier`
//!
//! Holiday hours never count toward the threshold. Leaving them in the pool
//! would let a holiday fill the regular bucket and understate holiday pay.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::PayrollSettings;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, LaborCostEstimate, LaborCostTotals, TimeEntry,
    WarningSeverity, WorkerLaborCost,
};

use super::weekly_overtime::{
    aggregate_single_worker_overtime, calculate_labor_cost, group_by_worker,
};

/// Resolves the hourly rate for one worker's entries.
///
/// The first entry, in input order, with a present non-zero rate wins.
/// Returns `0.0` when no entry carries a rate.
///
/// # Example
///
/// ```
/// use labor_engine::calculation::resolve_worker_rate;
/// use labor_engine::models::TimeEntry;
///
/// let a = TimeEntry::for_personnel("A", 8.0).with_rate(0.0);
/// let b = TimeEntry::for_personnel("A", 8.0).with_rate(32.0);
/// let c = TimeEntry::for_personnel("A", 8.0).with_rate(35.0);
///
/// assert_eq!(resolve_worker_rate(&[&a, &b, &c]), 32.0);
/// assert_eq!(resolve_worker_rate(&[&a]), 0.0);
/// ```
pub fn resolve_worker_rate(entries: &[&TimeEntry]) -> f64 {
    entries
        .iter()
        .find_map(|entry| entry.known_rate())
        .unwrap_or(0.0)
}

/// Estimates the labor cost of one week of time entries.
///
/// # Arguments
///
/// * `entries` - The week's time entries, for any number of workers
/// * `settings` - Threshold and multipliers to apply
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// A [`LaborCostEstimate`] with one cost line per worker (ordered by worker
/// key), the totals across them, and one audit step per worker. Data
/// problems are reported as warnings; the estimate is always produced.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::calculate_labor_cost_estimate;
/// use labor_engine::config::PayrollSettings;
/// use labor_engine::models::TimeEntry;
///
/// let entries = vec![
///     TimeEntry::for_personnel("A", 45.0).with_rate(20.0),
///     TimeEntry::for_personnel("A", 8.0).with_rate(20.0).holiday(),
/// ];
///
/// let estimate = calculate_labor_cost_estimate(&entries, &PayrollSettings::default(), 1);
/// let worker = &estimate.workers[0];
///
/// assert_eq!(worker.regular_hours, 40.0);
/// assert_eq!(worker.overtime_hours, 5.0);
/// assert_eq!(worker.holiday_cost, 320.0);
/// assert_eq!(estimate.totals.total_cost, 1270.0);
/// ```
pub fn calculate_labor_cost_estimate(
    entries: &[TimeEntry],
    settings: &PayrollSettings,
    step_number_start: u32,
) -> LaborCostEstimate {
    let mut workers = Vec::new();
    let mut audit_trace = AuditTrace::default();
    let mut step_number = step_number_start;

    for (worker_key, worker_entries) in group_by_worker(entries) {
        let hourly_rate = resolve_worker_rate(&worker_entries);

        let (holiday_hours, non_holiday_hours) = worker_entries.iter().fold(
            (0.0, 0.0),
            |(holiday, non_holiday), entry| {
                if entry.is_holiday {
                    (holiday + entry.effective_hours(), non_holiday)
                } else {
                    (holiday, non_holiday + entry.effective_hours())
                }
            },
        );

        let split =
            aggregate_single_worker_overtime(non_holiday_hours, settings.weekly_threshold_hours);

        let regular_cost = split.regular_hours * hourly_rate;
        let overtime_cost = split.overtime_hours * hourly_rate * settings.overtime_multiplier;
        let holiday_cost = holiday_hours * hourly_rate * settings.holiday_multiplier;
        let total_cost = calculate_labor_cost(
            split.regular_hours,
            split.overtime_hours,
            hourly_rate,
            settings.overtime_multiplier,
        ) + holiday_cost;

        audit_trace
            .warnings
            .extend(rate_warnings(worker_key, hourly_rate, &worker_entries));
        if !(non_holiday_hours.is_finite() && holiday_hours.is_finite() && hourly_rate.is_finite())
        {
            audit_trace.warnings.push(AuditWarning {
                code: "NON_FINITE_VALUES".to_string(),
                message: format!(
                    "Worker '{}' has non-finite hours or rate; cost figures are not meaningful",
                    worker_key
                ),
                severity: WarningSeverity::High,
                worker_key: worker_key.to_string(),
            });
        }

        let reasoning = if split.overtime_hours > 0.0 {
            format!(
                "{} non-holiday hours exceed the {} hour threshold by {}: {} regular × ${} + {} overtime × ${} × {}",
                non_holiday_hours,
                settings.weekly_threshold_hours,
                split.overtime_hours,
                split.regular_hours,
                hourly_rate,
                split.overtime_hours,
                hourly_rate,
                settings.overtime_multiplier
            )
        } else {
            format!(
                "{} non-holiday hours within the {} hour threshold: {} regular × ${}",
                non_holiday_hours, settings.weekly_threshold_hours, split.regular_hours, hourly_rate
            )
        };
        let reasoning = if holiday_hours != 0.0 {
            format!(
                "{}; {} holiday hours excluded from the threshold and paid at {} × ${}",
                reasoning, holiday_hours, settings.holiday_multiplier, hourly_rate
            )
        } else {
            reasoning
        };

        audit_trace.steps.push(AuditStep {
            step_number,
            rule_id: "weekly_labor_cost".to_string(),
            rule_name: "Weekly Labor Cost".to_string(),
            worker_key: worker_key.to_string(),
            input: serde_json::json!({
                "entries": worker_entries.len(),
                "non_holiday_hours": non_holiday_hours,
                "holiday_hours": holiday_hours,
                "hourly_rate": hourly_rate,
                "weekly_threshold": settings.weekly_threshold_hours,
                "overtime_multiplier": settings.overtime_multiplier,
                "holiday_multiplier": settings.holiday_multiplier
            }),
            output: serde_json::json!({
                "regular_hours": split.regular_hours,
                "overtime_hours": split.overtime_hours,
                "regular_cost": regular_cost,
                "overtime_cost": overtime_cost,
                "holiday_cost": holiday_cost,
                "total_cost": total_cost
            }),
            reasoning,
        });
        step_number += 1;

        workers.push(WorkerLaborCost {
            worker_key: worker_key.to_string(),
            hourly_rate,
            regular_hours: split.regular_hours,
            overtime_hours: split.overtime_hours,
            holiday_hours,
            regular_cost,
            overtime_cost,
            holiday_cost,
            total_cost,
        });
    }

    let totals = LaborCostTotals::from_workers(&workers);

    debug!(
        workers = workers.len(),
        total_cost = totals.total_cost,
        warnings = audit_trace.warnings.len(),
        "Estimated weekly labor cost"
    );

    LaborCostEstimate {
        workers,
        totals,
        audit_trace,
    }
}

fn rate_warnings(worker_key: &str, hourly_rate: f64, entries: &[&TimeEntry]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if hourly_rate == 0.0 {
        warnings.push(AuditWarning {
            code: "NO_RATE".to_string(),
            message: format!(
                "No hourly rate found for worker '{}'; hours are costed at $0",
                worker_key
            ),
            severity: WarningSeverity::Medium,
            worker_key: worker_key.to_string(),
        });
        return warnings;
    }

    // f64 is not Ord; compare bit patterns so distinct rates are counted once
    let distinct: BTreeSet<u64> = entries
        .iter()
        .filter_map(|entry| entry.known_rate())
        .map(f64::to_bits)
        .collect();

    if distinct.len() > 1 {
        warnings.push(AuditWarning {
            code: "CONFLICTING_RATES".to_string(),
            message: format!(
                "Worker '{}' has {} different hourly rates; using the first found (${})",
                worker_key,
                distinct.len(),
                hourly_rate
            ),
            severity: WarningSeverity::Low,
            worker_key: worker_key.to_string(),
        });
    }

    warnings
}
