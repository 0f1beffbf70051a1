//! Outcome models returned by the rule engine.
//!
//! Every operation returns the persisted [`Employee`] together with an
//! [`AuditTrace`] describing each rule decision that produced it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// A single step in the audit trace recording a rule decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning raised while applying rules.
///
/// Warnings never stop an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The ordered record of rule decisions for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated along the way.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the number the next pushed step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Finds the first step produced by the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// Revenue attainment band used to score commercial staff.
///
/// Bands are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// At least 80% and below 95% of target.
    BelowTarget,
    /// Between 95% and 105% of target, inclusive.
    OnTarget,
    /// Above 105% and at most 120% of target.
    AboveTarget,
    /// Above 120% of target.
    FarAboveTarget,
    /// Below 80% of target.
    Missed,
}

impl PerformanceBand {
    /// Returns the snake_case name of the band.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceBand::BelowTarget => "below_target",
            PerformanceBand::OnTarget => "on_target",
            PerformanceBand::AboveTarget => "above_target",
            PerformanceBand::FarAboveTarget => "far_above_target",
            PerformanceBand::Missed => "missed",
        }
    }
}

/// The result of hiring an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringOutcome {
    /// Correlation ID shared with the operation's log lines.
    pub correlation_id: Uuid,
    /// The employee as persisted.
    pub employee: Employee,
    /// Matricule and salary decisions.
    pub audit_trace: AuditTrace,
}

/// The result of recording a commercial employee's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceOutcome {
    /// Correlation ID shared with the operation's log lines.
    pub correlation_id: Uuid,
    /// The employee as persisted, carrying the new score.
    pub employee: Employee,
    /// The score before this recording.
    pub previous_performance: u32,
    /// The band the revenue ratio fell into.
    pub band: PerformanceBand,
    /// Mean score of commercial staff at the time of the adjustment.
    pub commercial_average: Option<f64>,
    /// Whether the above-average bonus point was granted.
    pub bonus_applied: bool,
    /// Band and adjustment decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_band_serialization_matches_as_str() {
        for band in [
            PerformanceBand::BelowTarget,
            PerformanceBand::OnTarget,
            PerformanceBand::AboveTarget,
            PerformanceBand::FarAboveTarget,
            PerformanceBand::Missed,
        ] {
            assert_eq!(
                serde_json::to_string(&band).unwrap(),
                format!("\"{}\"", band.as_str())
            );
        }
    }

    #[test]
    fn test_next_step_number_starts_at_one() {
        let mut trace = AuditTrace::default();
        assert_eq!(trace.next_step_number(), 1);

        trace.steps.push(AuditStep {
            step_number: 1,
            rule_id: "matricule_generation".to_string(),
            rule_name: "Matricule Generation".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        });
        assert_eq!(trace.next_step_number(), 2);
        assert!(trace.step("matricule_generation").is_some());
        assert!(trace.step("salary").is_none());
    }
}
