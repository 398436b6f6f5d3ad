//! Audit trace models.
//!
//! Every labor cost estimate records the decisions it made for each worker
//! so a payroll reviewer can see how a figure was reached.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use labor_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "weekly_labor_cost".to_string(),
///     rule_name: "Weekly Labor Cost".to_string(),
///     worker_key: "A".to_string(),
///     input: serde_json::json!({"non_holiday_hours": 45.0}),
///     output: serde_json::json!({"overtime_hours": 5.0}),
///     reasoning: "45 non-holiday hours exceed the 40 hour threshold by 5".to_string(),
/// };
/// assert_eq!(step.worker_key, "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The worker the step applies to.
    pub worker_key: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Severity of an [`AuditWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; the figure is still trustworthy.
    Low,
    /// The figure is likely understated or incomplete.
    Medium,
    /// The figure is not meaningful.
    High,
}

/// A warning generated during calculation.
///
/// Warnings never stop a calculation; they flag data worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// How much the warning affects the result.
    pub severity: WarningSeverity,
    /// The worker the warning refers to.
    pub worker_key: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&WarningSeverity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let severity: WarningSeverity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(severity, WarningSeverity::High);
    }
}
