//! Pay periods spanning more than one week.
//!
//! The overtime threshold is weekly, so a fortnightly or monthly estimate
//! cannot simply pool every entry. Dated entries are bucketed into payroll
//! weeks and each week is estimated on its own. Entries with no work date
//! are estimated together as one extra week.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::config::PayrollSettings;
use crate::models::{LaborCostTotals, PeriodLaborCost, TimeEntry, WeeklyLaborCost};

use super::labor_cost::calculate_labor_cost_estimate;

/// Entries bucketed by payroll week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekBuckets {
    /// Dated entries keyed by the first day of their week.
    pub weeks: BTreeMap<NaiveDate, Vec<TimeEntry>>,
    /// Entries without a work date, in input order.
    pub undated: Vec<TimeEntry>,
}

/// Returns the first day of the payroll week containing `date`.
///
/// Dates so close to the start of the calendar that their week start is not
/// representable are their own week start.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::week_start_for;
/// use chrono::{NaiveDate, Weekday};
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// assert_eq!(week_start_for(thursday, Weekday::Mon), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week_start_for(thursday, Weekday::Sun), NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
/// assert_eq!(week_start_for(thursday, Weekday::Thu), thursday);
/// ```
pub fn week_start_for(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday()
        - week_starts_on.num_days_from_monday())
        % 7;
    date.checked_sub_signed(Duration::days(i64::from(offset)))
        .unwrap_or(date)
}

/// Buckets entries by the payroll week of their work date.
pub fn split_by_week(entries: &[TimeEntry], week_starts_on: Weekday) -> WeekBuckets {
    let mut buckets = WeekBuckets::default();

    for entry in entries {
        match entry.work_date {
            Some(date) => buckets
                .weeks
                .entry(week_start_for(date, week_starts_on))
                .or_default()
                .push(entry.clone()),
            None => buckets.undated.push(entry.clone()),
        }
    }

    buckets
}

/// Estimates labor cost for a pay period, one payroll week at a time.
///
/// Weeks are returned in date order, followed by a `week_start: None`
/// bucket when any entry lacks a work date. Audit step numbers continue
/// across weeks.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::calculate_period_labor_cost;
/// use labor_engine::config::PayrollSettings;
/// use labor_engine::models::TimeEntry;
/// use chrono::NaiveDate;
///
/// let week1 = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let week2 = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
///
/// // 30 hours in each of two weeks: no overtime, even though the period total is 60
/// let entries = vec![
///     TimeEntry::for_personnel("A", 30.0).with_rate(20.0).on(week1),
///     TimeEntry::for_personnel("A", 30.0).with_rate(20.0).on(week2),
/// ];
///
/// let period = calculate_period_labor_cost(&entries, &PayrollSettings::default());
/// assert_eq!(period.weeks.len(), 2);
/// assert_eq!(period.totals.overtime_hours, 0.0);
/// assert_eq!(period.totals.total_cost, 1200.0);
/// ```
pub fn calculate_period_labor_cost(
    entries: &[TimeEntry],
    settings: &PayrollSettings,
) -> PeriodLaborCost {
    let buckets = split_by_week(entries, settings.week_starts_on);
    let mut weeks = Vec::with_capacity(buckets.weeks.len() + 1);
    let mut totals = LaborCostTotals::default();
    let mut step_number: u32 = 1;

    let dated = buckets
        .weeks
        .into_iter()
        .map(|(week_start, entries)| (Some(week_start), entries));
    let undated = (!buckets.undated.is_empty()).then_some((None, buckets.undated));

    for (week_start, week_entries) in dated.chain(undated) {
        let estimate = calculate_labor_cost_estimate(&week_entries, settings, step_number);
        step_number += estimate.audit_trace.steps.len() as u32;
        totals.accumulate(&estimate.totals);

        weeks.push(WeeklyLaborCost {
            week_start,
            estimate,
        });
    }

    debug!(
        entries = entries.len(),
        weeks = weeks.len(),
        total_cost = totals.total_cost,
        "Estimated pay period labor cost"
    );

    PeriodLaborCost { weeks, totals }
}
