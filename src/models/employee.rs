//! Employee model.
//!
//! This module defines the Employee record persisted by the repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee record.
///
/// Identity is the matricule. Records are created by hiring and only
/// mutated afterwards by performance recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Unique employee code (e.g. "C00042").
    pub matricule: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Monthly salary.
    pub salary: Decimal,
    /// Performance score, never below the company base.
    pub performance: u32,
    /// Working time as a fraction of full time, when part-time.
    #[serde(default)]
    pub part_time_ratio: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee's matricule starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_rules::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     last_name: "Durand".to_string(),
    ///     first_name: "Claire".to_string(),
    ///     matricule: "C00012".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     salary: Decimal::new(148027, 2),
    ///     performance: 1,
    ///     part_time_ratio: None,
    /// };
    /// assert!(employee.has_prefix("C"));
    /// assert!(!employee.has_prefix("M"));
    /// ```
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.matricule.starts_with(prefix)
    }
}
