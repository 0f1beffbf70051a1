//! The employee rule engine.
//!
//! [`EmployeeRuleEngine`] applies the hiring and commercial performance
//! rules on top of an [`EmployeeRepository`]. Each operation validates its
//! input, computes the new record and saves it exactly once; on any error
//! nothing is saved.
//!
//! # Example
//!
//! ```
//! use employee_rules::config::CompanyConfig;
//! use employee_rules::engine::EmployeeRuleEngine;
//! use employee_rules::models::{EducationLevel, HireRequest, PerformanceRequest, Position};
//! use employee_rules::repository::InMemoryEmployeeRepository;
//!
//! let mut engine =
//!     EmployeeRuleEngine::new(CompanyConfig::standard(), InMemoryEmployeeRepository::new());
//!
//! let hired = engine.hire_employee(HireRequest::new(
//!     "Durand",
//!     "Claire",
//!     Position::Commercial,
//!     EducationLevel::Master,
//! ))?;
//! assert_eq!(hired.employee.matricule, "C00001");
//!
//! let scored = engine.record_commercial_performance(PerformanceRequest::new("C00001", 1300, 1000))?;
//! assert_eq!(scored.employee.performance, 6);
//! # Ok::<(), employee_rules::error::EngineError>(())
//! ```

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, Employee, HireRequest, HiringOutcome, PerformanceOutcome,
    PerformanceRequest,
};
use crate::repository::EmployeeRepository;
use crate::rules::{adjust_to_average, calculate_salary, next_matricule, score_revenue};

/// Applies hiring and performance rules against a repository.
///
/// The engine holds no state besides its immutable configuration and the
/// repository handle. Operations take `&mut self`, so calls through one
/// engine never interleave; serializing matricule generation across
/// processes is the store's job.
#[derive(Debug, Clone)]
pub struct EmployeeRuleEngine<R> {
    config: CompanyConfig,
    repository: R,
}

impl<R: EmployeeRepository> EmployeeRuleEngine<R> {
    /// Creates an engine over `repository` using `config`.
    pub fn new(config: CompanyConfig, repository: R) -> Self {
        Self { config, repository }
    }

    /// Returns the company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Hires an employee today.
    ///
    /// See [`EmployeeRuleEngine::hire_employee_on`].
    pub fn hire_employee(&mut self, request: HireRequest) -> EngineResult<HiringOutcome> {
        self.hire_employee_on(request, Local::now().date_naive())
    }

    /// Hires an employee with an explicit hire date.
    ///
    /// Generates the next matricule for the position, computes the starting
    /// salary and saves the new employee with the base performance.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the part-time ratio is zero or negative, or
    ///   too large to compute a salary
    /// - `InvalidMatricule` if the stored last matricule cannot be parsed
    /// - `LimitExceeded` if the matricule sequence is exhausted
    /// - `DuplicateIdentifier` if the generated matricule is already taken
    /// - `MissingCoefficient` if the education level has no coefficient
    /// - `Repository` if the store fails
    pub fn hire_employee_on(
        &mut self,
        request: HireRequest,
        hire_date: NaiveDate,
    ) -> EngineResult<HiringOutcome> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            position = %request.position,
            education_level = %request.education_level,
            "Processing hiring request"
        );

        let mut audit_trace = AuditTrace::default();

        if let Some(ratio) = request.part_time_ratio {
            if ratio <= Decimal::ZERO {
                warn!(correlation_id = %correlation_id, ratio = %ratio, "Rejected part-time ratio");
                return Err(EngineError::invalid_argument(format!(
                    "part-time ratio must be positive, got {}",
                    ratio
                )));
            }
            if ratio > Decimal::ONE {
                warn!(correlation_id = %correlation_id, ratio = %ratio, "Part-time ratio above full time");
                audit_trace.warnings.push(AuditWarning {
                    code: "PART_TIME_RATIO_ABOVE_ONE".to_string(),
                    message: format!("Part-time ratio {} exceeds full time", ratio),
                });
            }
        }

        let last_matricule = self.repository.find_last_matricule()?;
        let generated = next_matricule(
            last_matricule.as_deref(),
            &self.config.initial_matricule,
            request.position,
            audit_trace.next_step_number(),
        )?;
        let matricule = generated.matricule.to_string();
        audit_trace.steps.push(generated.audit_step);

        if self.repository.find_by_matricule(&matricule)?.is_some() {
            warn!(
                correlation_id = %correlation_id,
                matricule = %matricule,
                "Generated matricule already exists"
            );
            return Err(EngineError::DuplicateIdentifier { matricule });
        }

        let salary = calculate_salary(
            &self.config,
            request.education_level,
            request.part_time_ratio,
            audit_trace.next_step_number(),
        )?;
        audit_trace.steps.push(salary.audit_step);

        let employee = Employee {
            last_name: request.last_name,
            first_name: request.first_name,
            matricule,
            hire_date,
            salary: salary.salary,
            performance: self.config.base_performance,
            part_time_ratio: request.part_time_ratio,
        };
        self.repository.save(&employee)?;

        info!(
            correlation_id = %correlation_id,
            matricule = %employee.matricule,
            salary = %employee.salary,
            "Employee hired"
        );

        Ok(HiringOutcome {
            correlation_id,
            employee,
            audit_trace,
        })
    }

    /// Records a commercial employee's revenue and updates their score.
    ///
    /// Recording the same figures twice may give different scores, since
    /// the first save moves the commercial average.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if revenue processed is missing or negative, then
    ///   if the target is missing or negative, then if the matricule is
    ///   missing or not a commercial one
    /// - `NotFound` if no employee has the matricule
    /// - `Repository` if the store fails
    pub fn record_commercial_performance(
        &mut self,
        request: PerformanceRequest,
    ) -> EngineResult<PerformanceOutcome> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            matricule = ?request.matricule,
            "Processing performance request"
        );

        let (matricule, revenue_processed, revenue_target) =
            validate_performance_request(&request, &self.config.commercial_prefix).inspect_err(
                |err| warn!(correlation_id = %correlation_id, error = %err, "Invalid performance request"),
            )?;

        let mut employee = self
            .repository
            .find_by_matricule(matricule)?
            .ok_or_else(|| EngineError::NotFound {
                matricule: matricule.to_string(),
            })?;

        let mut audit_trace = AuditTrace::default();
        let previous_performance = employee.performance;
        let base = self.config.base_performance;

        let banded = score_revenue(
            previous_performance,
            revenue_processed,
            revenue_target,
            base,
            audit_trace.next_step_number(),
        );
        audit_trace.steps.push(banded.audit_step);
        debug!(
            correlation_id = %correlation_id,
            band = banded.band.as_str(),
            performance = banded.score,
            "Revenue band applied"
        );

        let commercial_average = self
            .repository
            .average_performance_for_prefix(&self.config.commercial_prefix)?;
        let adjusted = adjust_to_average(
            banded.score,
            commercial_average,
            audit_trace.next_step_number(),
        );
        audit_trace.steps.push(adjusted.audit_step);

        employee.performance = adjusted.score;
        self.repository.save(&employee)?;

        info!(
            correlation_id = %correlation_id,
            matricule = %employee.matricule,
            previous = previous_performance,
            performance = employee.performance,
            "Performance recorded"
        );

        Ok(PerformanceOutcome {
            correlation_id,
            employee,
            previous_performance,
            band: banded.band,
            commercial_average,
            bonus_applied: adjusted.bonus_applied,
            audit_trace,
        })
    }
}

/// Checks a performance request's preconditions in order.
fn validate_performance_request<'a>(
    request: &'a PerformanceRequest,
    commercial_prefix: &str,
) -> EngineResult<(&'a str, i64, i64)> {
    let revenue_processed = match request.revenue_processed {
        Some(value) if value >= 0 => value,
        _ => {
            return Err(EngineError::invalid_argument(
                "revenue processed cannot be missing or negative",
            ));
        }
    };

    let revenue_target = match request.revenue_target {
        Some(value) if value >= 0 => value,
        _ => {
            return Err(EngineError::invalid_argument(
                "revenue target cannot be missing or negative",
            ));
        }
    };

    let matricule = match request.matricule.as_deref() {
        Some(m) if m.starts_with(commercial_prefix) => m,
        _ => {
            return Err(EngineError::invalid_argument(format!(
                "matricule cannot be missing and must start with '{}'",
                commercial_prefix
            )));
        }
    };

    Ok((matricule, revenue_processed, revenue_target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, PerformanceBand, Position};
    use crate::repository::{InMemoryEmployeeRepository, RepositoryError};
    use std::str::FromStr;

    fn hire_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn commercial(matricule: &str, performance: u32) -> Employee {
        Employee {
            last_name: "Leroy".to_string(),
            first_name: "Paul".to_string(),
            matricule: matricule.to_string(),
            hire_date: hire_date(),
            salary: Decimal::new(148027, 2),
            performance,
            part_time_ratio: None,
        }
    }

    fn engine_with(employees: Vec<Employee>) -> EmployeeRuleEngine<InMemoryEmployeeRepository> {
        EmployeeRuleEngine::new(
            CompanyConfig::standard(),
            InMemoryEmployeeRepository::with_employees(employees),
        )
    }

    fn invalid_reason(result: EngineResult<PerformanceOutcome>) -> String {
        match result {
            Err(EngineError::InvalidArgument { reason }) => reason,
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    /// Repository stub whose matricule lookup always finds someone.
    struct CollidingRepository;

    impl EmployeeRepository for CollidingRepository {
        fn find_last_matricule(&self) -> Result<Option<String>, RepositoryError> {
            Ok(Some("T00004".to_string()))
        }

        fn find_by_matricule(&self, matricule: &str) -> Result<Option<Employee>, RepositoryError> {
            Ok(Some(commercial(matricule, 1)))
        }

        fn save(&mut self, _employee: &Employee) -> Result<(), RepositoryError> {
            panic!("save must not be called");
        }

        fn average_performance_for_prefix(
            &self,
            _prefix: &str,
        ) -> Result<Option<f64>, RepositoryError> {
            Ok(None)
        }
    }

    #[test]
    fn test_hire_first_employee() {
        let mut engine = engine_with(vec![]);
        let outcome = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Technician, EducationLevel::Bac),
                hire_date(),
            )
            .unwrap();

        let employee = &outcome.employee;
        assert_eq!(employee.matricule, "T00001");
        assert_eq!(employee.hire_date, hire_date());
        assert_eq!(employee.salary, Decimal::from_str("1628.297").unwrap());
        assert_eq!(employee.performance, 1);
        assert_eq!(employee.part_time_ratio, None);
        assert_eq!(outcome.audit_trace.steps.len(), 2);
        assert!(outcome.audit_trace.warnings.is_empty());

        let stored = engine.repository().find_by_matricule("T00001").unwrap();
        assert_eq!(stored.as_ref(), Some(employee));
    }

    #[test]
    fn test_hire_continues_sequence() {
        let mut engine = engine_with(vec![commercial("C00041", 1)]);
        let outcome = engine
            .hire_employee_on(
                HireRequest::new("Bernard", "Lea", Position::Manager, EducationLevel::Master),
                hire_date(),
            )
            .unwrap();
        assert_eq!(outcome.employee.matricule, "M00042");
    }

    #[test]
    fn test_hire_part_time() {
        let mut engine = engine_with(vec![]);
        let ratio = Decimal::from_str("0.5").unwrap();
        let outcome = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Cap)
                    .part_time(ratio),
                hire_date(),
            )
            .unwrap();
        assert_eq!(outcome.employee.salary, Decimal::from_str("740.135").unwrap());
        assert_eq!(outcome.employee.part_time_ratio, Some(ratio));
    }

    #[test]
    fn test_hire_rejects_non_positive_ratio() {
        let mut engine = engine_with(vec![]);
        for ratio in [Decimal::ZERO, Decimal::from_str("-0.5").unwrap()] {
            let err = engine
                .hire_employee_on(
                    HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Cap)
                        .part_time(ratio),
                    hire_date(),
                )
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidArgument { .. }));
        }
        assert!(engine.repository().is_empty().unwrap());
    }

    #[test]
    fn test_hire_ratio_above_one_is_warned_not_rejected() {
        let mut engine = engine_with(vec![]);
        let outcome = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Cap)
                    .part_time(Decimal::from_str("1.5").unwrap()),
                hire_date(),
            )
            .unwrap();
        assert_eq!(outcome.audit_trace.warnings.len(), 1);
        assert_eq!(
            outcome.audit_trace.warnings[0].code,
            "PART_TIME_RATIO_ABOVE_ONE"
        );
    }

    #[test]
    fn test_hire_oversized_ratio_is_an_error() {
        let mut engine = engine_with(vec![]);
        let err = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Doctorate)
                    .part_time(Decimal::MAX),
                hire_date(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { .. }));
        assert!(engine.repository().is_empty().unwrap());
    }

    /// Repository stub handing back an out-of-range numeric last matricule.
    struct OverflowingRepository;

    impl EmployeeRepository for OverflowingRepository {
        fn find_last_matricule(&self) -> Result<Option<String>, RepositoryError> {
            Ok(Some("4294967295".to_string()))
        }

        fn find_by_matricule(&self, _matricule: &str) -> Result<Option<Employee>, RepositoryError> {
            Ok(None)
        }

        fn save(&mut self, _employee: &Employee) -> Result<(), RepositoryError> {
            panic!("save must not be called");
        }

        fn average_performance_for_prefix(
            &self,
            _prefix: &str,
        ) -> Result<Option<f64>, RepositoryError> {
            Ok(None)
        }
    }

    #[test]
    fn test_hire_with_oversized_stored_matricule_is_an_error() {
        let mut engine = EmployeeRuleEngine::new(CompanyConfig::standard(), OverflowingRepository);
        let err = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Cap),
                hire_date(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidMatricule { .. }));
    }

    #[test]
    fn test_hire_limit_exceeded_saves_nothing() {
        let mut engine = engine_with(vec![commercial("C99999", 1)]);
        let err = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Commercial, EducationLevel::Cap),
                hire_date(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::LimitExceeded { .. }));
        assert_eq!(engine.repository().len().unwrap(), 1);
    }

    #[test]
    fn test_hire_duplicate_identifier() {
        let mut engine = EmployeeRuleEngine::new(CompanyConfig::standard(), CollidingRepository);
        let err = engine
            .hire_employee_on(
                HireRequest::new("Durand", "Claire", Position::Technician, EducationLevel::Cap),
                hire_date(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::DuplicateIdentifier { matricule } if matricule == "T00005"));
    }

    #[test]
    fn test_performance_validation_order() {
        let mut engine = engine_with(vec![]);

        let reason = invalid_reason(engine.record_commercial_performance(PerformanceRequest {
            matricule: None,
            revenue_processed: Some(-1),
            revenue_target: None,
        }));
        assert!(reason.contains("revenue processed"));

        let reason = invalid_reason(engine.record_commercial_performance(PerformanceRequest {
            matricule: None,
            revenue_processed: Some(10),
            revenue_target: None,
        }));
        assert!(reason.contains("revenue target"));

        let reason = invalid_reason(engine.record_commercial_performance(PerformanceRequest {
            matricule: None,
            revenue_processed: Some(10),
            revenue_target: Some(10),
        }));
        assert!(reason.contains("matricule"));
    }

    #[test]
    fn test_performance_rejects_non_commercial_matricule() {
        let mut engine = engine_with(vec![]);
        for matricule in ["", "T00001", "c00001"] {
            let result = engine
                .record_commercial_performance(PerformanceRequest::new(matricule, 1000, 1000));
            invalid_reason(result);
        }
    }

    #[test]
    fn test_performance_unknown_matricule() {
        let mut engine = engine_with(vec![]);
        let err = engine
            .record_commercial_performance(PerformanceRequest::new("C00009", 1000, 1000))
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound { matricule } if matricule == "C00009"));
    }

    #[test]
    fn test_performance_far_above_target_with_bonus() {
        let mut engine = engine_with(vec![commercial("C00001", 3), commercial("C00002", 3)]);
        let outcome = engine
            .record_commercial_performance(PerformanceRequest::new("C00001", 1300, 1000))
            .unwrap();

        assert_eq!(outcome.previous_performance, 3);
        assert_eq!(outcome.band, PerformanceBand::FarAboveTarget);
        assert_eq!(outcome.commercial_average, Some(3.0));
        assert!(outcome.bonus_applied);
        assert_eq!(outcome.employee.performance, 8);

        let stored = engine
            .repository()
            .find_by_matricule("C00001")
            .unwrap()
            .unwrap();
        assert_eq!(stored.performance, 8);
    }

    #[test]
    fn test_performance_boundary_at_80_percent() {
        let mut engine = EmployeeRuleEngine::new(
            CompanyConfig {
                base_performance: 10,
                ..CompanyConfig::standard()
            },
            InMemoryEmployeeRepository::with_employees([commercial("C00001", 10)]),
        );
        let outcome = engine
            .record_commercial_performance(PerformanceRequest::new("C00001", 800, 1000))
            .unwrap();
        assert_eq!(outcome.band, PerformanceBand::BelowTarget);
        // 10 is not above the average of 10, so no bonus.
        assert_eq!(outcome.employee.performance, 10);
    }

    #[test]
    fn test_performance_missed_resets_to_base() {
        let mut engine = engine_with(vec![commercial("C00001", 12), commercial("C00002", 20)]);
        let outcome = engine
            .record_commercial_performance(PerformanceRequest::new("C00001", 500, 1000))
            .unwrap();
        assert_eq!(outcome.band, PerformanceBand::Missed);
        assert!(!outcome.bonus_applied);
        assert_eq!(outcome.employee.performance, 1);
    }

    #[test]
    fn test_performance_audit_trace() {
        let mut engine = engine_with(vec![commercial("C00001", 3)]);
        let outcome = engine
            .record_commercial_performance(PerformanceRequest::new("C00001", 1000, 1000))
            .unwrap();
        let rule_ids: Vec<&str> = outcome
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(rule_ids, vec!["revenue_band", "commercial_average_bonus"]);
        assert_eq!(outcome.audit_trace.steps[1].step_number, 2);
    }
}
