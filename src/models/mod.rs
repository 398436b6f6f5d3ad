//! Core data models for the Labor Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod labor_cost;
mod overtime;
mod time_entry;

pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use labor_cost::{
    LaborCostEstimate, LaborCostTotals, PeriodLaborCost, WeeklyLaborCost, WorkerLaborCost,
};
pub use overtime::{HoursSplit, OvertimeBreakdown, OvertimeTotals, WorkerHours};
pub use time_entry::{TimeEntry, UNKNOWN_WORKER_KEY};
