//! Request types accepted by the rule engine.
//!
//! Fields the caller may leave out are `Option`s so that absent values reach
//! the engine's validation instead of failing at deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EducationLevel, Position};

/// Input for hiring a new employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireRequest {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Role the employee is hired into.
    pub position: Position,
    /// Highest diploma held.
    pub education_level: EducationLevel,
    /// Fraction of full time, when part-time.
    #[serde(default)]
    pub part_time_ratio: Option<Decimal>,
}

impl HireRequest {
    /// Creates a full-time hiring request.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        position: Position,
        education_level: EducationLevel,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            position,
            education_level,
            part_time_ratio: None,
        }
    }

    /// Sets the part-time ratio.
    pub fn part_time(mut self, ratio: Decimal) -> Self {
        self.part_time_ratio = Some(ratio);
        self
    }
}

/// Input for recording a commercial employee's revenue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    /// Matricule of the commercial employee.
    #[serde(default)]
    pub matricule: Option<String>,
    /// Revenue the employee actually processed.
    #[serde(default)]
    pub revenue_processed: Option<i64>,
    /// Revenue the employee was expected to process.
    #[serde(default)]
    pub revenue_target: Option<i64>,
}

impl PerformanceRequest {
    /// Creates a request with every field present.
    pub fn new(matricule: impl Into<String>, revenue_processed: i64, revenue_target: i64) -> Self {
        Self {
            matricule: Some(matricule.into()),
            revenue_processed: Some(revenue_processed),
            revenue_target: Some(revenue_target),
        }
    }
}
