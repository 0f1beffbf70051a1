//! Commercial performance scoring.
//!
//! A commercial employee's score moves according to how much of their
//! revenue target they processed, then gains one bonus point if it ends up
//! above the commercial staff average.
//!
//! | processed vs target     | new score                 |
//! |-------------------------|---------------------------|
//! | >= 0.80 and < 0.95      | max(base, current - 2)    |
//! | >= 0.95 and <= 1.05     | max(base, current)        |
//! | > 1.05 and <= 1.20      | current + 1               |
//! | > 1.20                  | current + 4               |
//! | < 0.80                  | base                      |
//!
//! Bands are checked top to bottom and the first match wins.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PerformanceBand};

/// Lower bound (inclusive) of the below-target band, as a fraction of target.
pub const BELOW_TARGET_FLOOR: Decimal = Decimal::from_parts(80, 0, 0, false, 2);
/// Lower bound (inclusive) of the on-target band.
pub const ON_TARGET_FLOOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
/// Upper bound (inclusive) of the on-target band.
pub const ON_TARGET_CEILING: Decimal = Decimal::from_parts(105, 0, 0, false, 2);
/// Upper bound (inclusive) of the above-target band.
pub const ABOVE_TARGET_CEILING: Decimal = Decimal::from_parts(120, 0, 0, false, 2);

/// The result of scoring revenue against target, including the audit step.
#[derive(Debug, Clone)]
pub struct BandScoreResult {
    /// The band the revenue fell into.
    pub band: PerformanceBand,
    /// The score after applying the band rule.
    pub score: u32,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// The result of the commercial average adjustment.
#[derive(Debug, Clone)]
pub struct AverageAdjustmentResult {
    /// The final score.
    pub score: u32,
    /// Whether the bonus point was granted.
    pub bonus_applied: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Classifies processed revenue against a target.
///
/// Comparisons are exact: `0.95 × target` and `1.05 × target` both fall in
/// [`PerformanceBand::OnTarget`].
///
/// # Examples
///
/// ```
/// use employee_rules::models::PerformanceBand;
/// use employee_rules::rules::determine_band;
///
/// assert_eq!(determine_band(800, 1000), PerformanceBand::BelowTarget);
/// assert_eq!(determine_band(1050, 1000), PerformanceBand::OnTarget);
/// assert_eq!(determine_band(1300, 1000), PerformanceBand::FarAboveTarget);
/// assert_eq!(determine_band(500, 1000), PerformanceBand::Missed);
/// ```
pub fn determine_band(revenue_processed: i64, revenue_target: i64) -> PerformanceBand {
    let processed = Decimal::from(revenue_processed);
    let target = Decimal::from(revenue_target);

    if processed >= target * BELOW_TARGET_FLOOR && processed < target * ON_TARGET_FLOOR {
        PerformanceBand::BelowTarget
    } else if processed >= target * ON_TARGET_FLOOR && processed <= target * ON_TARGET_CEILING {
        PerformanceBand::OnTarget
    } else if processed > target * ON_TARGET_CEILING && processed <= target * ABOVE_TARGET_CEILING
    {
        PerformanceBand::AboveTarget
    } else if processed > target * ABOVE_TARGET_CEILING {
        PerformanceBand::FarAboveTarget
    } else {
        PerformanceBand::Missed
    }
}

/// Applies a band's rule to the current score.
pub fn score_for_band(band: PerformanceBand, current: u32, base: u32) -> u32 {
    match band {
        PerformanceBand::BelowTarget => current.saturating_sub(2).max(base),
        PerformanceBand::OnTarget => current.max(base),
        PerformanceBand::AboveTarget => current.saturating_add(1),
        PerformanceBand::FarAboveTarget => current.saturating_add(4),
        PerformanceBand::Missed => base,
    }
}

/// Scores processed revenue against target for an employee.
///
/// # Arguments
///
/// * `current` - The employee's score before this recording
/// * `revenue_processed` - Revenue actually processed (non-negative)
/// * `revenue_target` - Revenue target (non-negative)
/// * `base` - The company base performance
/// * `step_number` - The step number for audit trail sequencing
pub fn score_revenue(
    current: u32,
    revenue_processed: i64,
    revenue_target: i64,
    base: u32,
    step_number: u32,
) -> BandScoreResult {
    let band = determine_band(revenue_processed, revenue_target);
    let score = score_for_band(band, current, base);

    let audit_step = AuditStep {
        step_number,
        rule_id: "revenue_band".to_string(),
        rule_name: "Revenue Band Scoring".to_string(),
        input: serde_json::json!({
            "current_performance": current,
            "revenue_processed": revenue_processed,
            "revenue_target": revenue_target,
            "base_performance": base
        }),
        output: serde_json::json!({
            "band": band.as_str(),
            "performance": score
        }),
        reasoning: format!(
            "{} of {} falls in band '{}': {} -> {}",
            revenue_processed,
            revenue_target,
            band.as_str(),
            current,
            score
        ),
    };

    BandScoreResult {
        band,
        score,
        audit_step,
    }
}

/// Grants one bonus point when `score` is strictly above the commercial
/// average. No average means no bonus.
///
/// # Examples
///
/// ```
/// use employee_rules::rules::adjust_to_average;
///
/// assert_eq!(adjust_to_average(5, Some(4.5), 1).score, 6);
/// assert_eq!(adjust_to_average(5, Some(5.0), 1).score, 5);
/// assert_eq!(adjust_to_average(5, None, 1).score, 5);
/// ```
pub fn adjust_to_average(
    score: u32,
    commercial_average: Option<f64>,
    step_number: u32,
) -> AverageAdjustmentResult {
    let bonus_applied = commercial_average.is_some_and(|avg| f64::from(score) > avg);
    let adjusted = if bonus_applied {
        score.saturating_add(1)
    } else {
        score
    };

    let reasoning = match commercial_average {
        Some(avg) if bonus_applied => format!("{} > average {}: +1 -> {}", score, avg, adjusted),
        Some(avg) => format!("{} <= average {}: no bonus", score, avg),
        None => "No commercial average available: no bonus".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "commercial_average_bonus".to_string(),
        rule_name: "Commercial Average Bonus".to_string(),
        input: serde_json::json!({
            "performance": score,
            "commercial_average": commercial_average
        }),
        output: serde_json::json!({
            "performance": adjusted,
            "bonus_applied": bonus_applied
        }),
        reasoning,
    };

    AverageAdjustmentResult {
        score: adjusted,
        bonus_applied,
        audit_step,
    }
}
