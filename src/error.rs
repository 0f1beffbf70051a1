//! Error types for the Employee Rules Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while hiring employees or
//! recording commercial performance.

use thiserror::Error;

use crate::models::EducationLevel;
use crate::repository::RepositoryError;

/// The main error type for the Employee Rules Engine.
///
/// All operations in the engine return this error type. Errors are raised
/// synchronously and never retried; nothing is persisted once one occurs.
///
/// # Example
///
/// ```
/// use employee_rules::error::EngineError;
///
/// let error = EngineError::NotFound {
///     matricule: "C00042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee with matricule C00042 does not exist");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The matricule sequence is exhausted.
    #[error("Matricule limit of {limit} reached")]
    LimitExceeded {
        /// The exclusive upper bound of the sequence.
        limit: u32,
    },

    /// A generated matricule is already held by a stored employee.
    #[error("Employee with matricule {matricule} already exists")]
    DuplicateIdentifier {
        /// The conflicting matricule.
        matricule: String,
    },

    /// A caller-supplied argument violated a precondition.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Which precondition was violated.
        reason: String,
    },

    /// No employee is stored under the given matricule.
    #[error("Employee with matricule {matricule} does not exist")]
    NotFound {
        /// The matricule that was looked up.
        matricule: String,
    },

    /// A stored matricule could not be parsed.
    #[error("Invalid matricule '{value}'")]
    InvalidMatricule {
        /// The raw value that failed to parse.
        value: String,
    },

    /// The company configuration has no coefficient for an education level.
    #[error("No salary coefficient configured for education level {level}")]
    MissingCoefficient {
        /// The education level without a coefficient.
        level: EducationLevel,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
