//! Starting salary calculation.
//!
//! salary = base salary × education coefficient, scaled by the part-time
//! ratio when one is given. No rounding is applied.

use rust_decimal::Decimal;

use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EducationLevel};

/// The result of a salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SalaryResult {
    /// The computed monthly salary.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the starting salary for an education level.
///
/// # Returns
///
/// Returns a `SalaryResult`, or an error if:
/// - The configuration has no coefficient for `level` (`MissingCoefficient`)
/// - The coefficient or part-time ratio is too large for a salary
///   (`InvalidArgument`)
///
/// # Examples
///
/// ```
/// use employee_rules::config::CompanyConfig;
/// use employee_rules::models::EducationLevel;
/// use employee_rules::rules::calculate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = CompanyConfig::standard();
/// let result = calculate_salary(&config, EducationLevel::Bac, None, 1).unwrap();
/// assert_eq!(result.salary, Decimal::from_str("1628.297").unwrap());
///
/// let half = Decimal::from_str("0.5").unwrap();
/// let result = calculate_salary(&config, EducationLevel::Cap, Some(half), 1).unwrap();
/// assert_eq!(result.salary, Decimal::from_str("740.135").unwrap());
/// ```
pub fn calculate_salary(
    config: &CompanyConfig,
    level: EducationLevel,
    part_time_ratio: Option<Decimal>,
    step_number: u32,
) -> EngineResult<SalaryResult> {
    let coefficient = config.coefficient(level)?;
    let full_time_salary = config.base_salary.checked_mul(coefficient).ok_or_else(|| {
        EngineError::invalid_argument(format!(
            "salary coefficient {} for {} is too large",
            coefficient, level
        ))
    })?;
    let salary = match part_time_ratio {
        Some(ratio) => full_time_salary.checked_mul(ratio).ok_or_else(|| {
            EngineError::invalid_argument(format!("part-time ratio {} is too large", ratio))
        })?,
        None => full_time_salary,
    };

    let reasoning = match part_time_ratio {
        Some(ratio) => format!(
            "${} x {} x {} = ${}",
            config.base_salary.normalize(),
            coefficient.normalize(),
            ratio.normalize(),
            salary.normalize()
        ),
        None => format!(
            "${} x {} = ${}",
            config.base_salary.normalize(),
            coefficient.normalize(),
            salary.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "starting_salary".to_string(),
        rule_name: "Starting Salary".to_string(),
        input: serde_json::json!({
            "base_salary": config.base_salary.normalize().to_string(),
            "education_level": level.as_str(),
            "part_time_ratio": part_time_ratio.map(|r| r.normalize().to_string())
        }),
        output: serde_json::json!({
            "coefficient": coefficient.normalize().to_string(),
            "salary": salary.normalize().to_string()
        }),
        reasoning,
    };

    Ok(SalaryResult { salary, audit_step })
}
