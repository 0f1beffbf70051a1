//! Configuration types for the company's hiring rules.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from `company.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::EducationLevel;

fn default_commercial_prefix() -> String {
    "C".to_string()
}

/// Company-wide constants used by the hiring and performance rules.
///
/// The coefficient table must cover every [`EducationLevel`]; there is no
/// fallback coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Monthly salary of a full-time employee with coefficient 1.
    pub base_salary: Decimal,
    /// Floor and starting value of every performance score.
    pub base_performance: u32,
    /// Sequence used when no matricule has been assigned yet.
    pub initial_matricule: String,
    /// Matricule prefix identifying commercial staff.
    #[serde(default = "default_commercial_prefix")]
    pub commercial_prefix: String,
    /// Salary coefficient per education level.
    pub education_coefficients: HashMap<EducationLevel, Decimal>,
}

impl CompanyConfig {
    /// The built-in company constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_rules::config::CompanyConfig;
    /// use employee_rules::models::EducationLevel;
    /// use rust_decimal::Decimal;
    ///
    /// let config = CompanyConfig::standard();
    /// assert_eq!(config.base_performance, 1);
    /// assert_eq!(
    ///     config.coefficient(EducationLevel::Master).unwrap(),
    ///     Decimal::new(14, 1)
    /// );
    /// ```
    pub fn standard() -> Self {
        let education_coefficients = HashMap::from([
            (EducationLevel::Cap, Decimal::new(10, 1)),
            (EducationLevel::Bac, Decimal::new(11, 1)),
            (EducationLevel::BtsIut, Decimal::new(12, 1)),
            (EducationLevel::Licence, Decimal::new(12, 1)),
            (EducationLevel::Master, Decimal::new(14, 1)),
            (EducationLevel::Engineer, Decimal::new(16, 1)),
            (EducationLevel::Doctorate, Decimal::new(17, 1)),
        ]);

        Self {
            base_salary: Decimal::new(148027, 2),
            base_performance: 1,
            initial_matricule: "00000".to_string(),
            commercial_prefix: default_commercial_prefix(),
            education_coefficients,
        }
    }

    /// Returns the salary coefficient for an education level.
    pub fn coefficient(&self, level: EducationLevel) -> EngineResult<Decimal> {
        self.education_coefficients
            .get(&level)
            .copied()
            .ok_or(EngineError::MissingCoefficient { level })
    }

    /// Lists the education levels with no configured coefficient.
    pub fn missing_levels(&self) -> Vec<EducationLevel> {
        EducationLevel::ALL
            .into_iter()
            .filter(|level| !self.education_coefficients.contains_key(level))
            .collect()
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self::standard()
    }
}
