//! Persistence collaborator for employee records.
//!
//! The engine only talks to storage through [`EmployeeRepository`]. Real
//! stores are expected to serialize matricule generation inside their own
//! transaction boundary; [`InMemoryEmployeeRepository`] is provided for
//! tests and development.

mod in_memory;

use thiserror::Error;

use crate::models::Employee;

pub use in_memory::InMemoryEmployeeRepository;

/// Errors raised by a repository implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The underlying store failed.
    #[error("Persistence error: {message}")]
    PersistenceError {
        /// A description of the failure.
        message: String,
    },
}

/// Storage of employee records keyed by matricule.
pub trait EmployeeRepository {
    /// Returns the most recently assigned matricule across all employees,
    /// or `None` when no employee exists yet.
    ///
    /// Implementations may return either the full matricule or only its
    /// numeric part.
    fn find_last_matricule(&self) -> Result<Option<String>, RepositoryError>;

    /// Finds an employee by matricule.
    fn find_by_matricule(&self, matricule: &str) -> Result<Option<Employee>, RepositoryError>;

    /// Inserts or updates an employee, keyed by matricule.
    fn save(&mut self, employee: &Employee) -> Result<(), RepositoryError>;

    /// Mean performance of employees whose matricule starts with `prefix`,
    /// or `None` when no employee matches.
    fn average_performance_for_prefix(&self, prefix: &str) -> Result<Option<f64>, RepositoryError>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &mut R {
    fn find_last_matricule(&self) -> Result<Option<String>, RepositoryError> {
        (**self).find_last_matricule()
    }

    fn find_by_matricule(&self, matricule: &str) -> Result<Option<Employee>, RepositoryError> {
        (**self).find_by_matricule(matricule)
    }

    fn save(&mut self, employee: &Employee) -> Result<(), RepositoryError> {
        (**self).save(employee)
    }

    fn average_performance_for_prefix(&self, prefix: &str) -> Result<Option<f64>, RepositoryError> {
        (**self).average_performance_for_prefix(prefix)
    }
}
