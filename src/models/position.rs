//! Position and education level enumerations.
//!
//! Both are fixed lookup tables: a position determines the matricule prefix,
//! an education level selects a salary coefficient.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An employee's role within the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Sales staff, subject to performance scoring.
    Commercial,
    /// Technical staff.
    Technician,
    /// Management staff.
    Manager,
}

impl Position {
    /// All positions, in declaration order.
    pub const ALL: [Position; 3] = [Position::Commercial, Position::Technician, Position::Manager];

    /// Returns the position's name.
    pub fn name(&self) -> &'static str {
        match self {
            Position::Commercial => "Commercial",
            Position::Technician => "Technician",
            Position::Manager => "Manager",
        }
    }

    /// Returns the one-letter type code used as matricule prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_rules::models::Position;
    ///
    /// assert_eq!(Position::Commercial.type_code(), 'C');
    /// assert_eq!(Position::Technician.type_code(), 'T');
    /// ```
    pub fn type_code(&self) -> char {
        match self {
            Position::Commercial => 'C',
            Position::Technician => 'T',
            Position::Manager => 'M',
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Highest diploma held by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Certificat d'aptitude professionnelle.
    Cap,
    /// Baccalauréat.
    Bac,
    /// Two-year technical degree (BTS or IUT).
    BtsIut,
    /// Three-year university degree.
    Licence,
    /// Five-year university degree.
    Master,
    /// Engineering school diploma.
    Engineer,
    /// Doctorate.
    Doctorate,
}

impl EducationLevel {
    /// All education levels, lowest first.
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::Cap,
        EducationLevel::Bac,
        EducationLevel::BtsIut,
        EducationLevel::Licence,
        EducationLevel::Master,
        EducationLevel::Engineer,
        EducationLevel::Doctorate,
    ];

    /// Returns the snake_case key used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Cap => "cap",
            EducationLevel::Bac => "bac",
            EducationLevel::BtsIut => "bts_iut",
            EducationLevel::Licence => "licence",
            EducationLevel::Master => "master",
            EducationLevel::Engineer => "engineer",
            EducationLevel::Doctorate => "doctorate",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
