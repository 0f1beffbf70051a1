//! In-memory employee repository.
//!
//! Thread-safe implementation using `RwLock`. Clones share the same store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Employee, Matricule};

use super::{EmployeeRepository, RepositoryError};

/// In-memory employee store keyed by matricule.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<HashMap<String, Employee>>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `employees`.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees = employees
            .into_iter()
            .map(|e| (e.matricule.clone(), e))
            .collect();
        Self {
            employees: Arc::new(RwLock::new(employees)),
        }
    }

    /// Number of stored employees.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    /// Returns true if no employee is stored.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.read()?.is_empty())
    }

    /// All stored employees, ordered by matricule.
    pub fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let mut employees: Vec<Employee> = self.read()?.values().cloned().collect();
        employees.sort_by(|a, b| a.matricule.cmp(&b.matricule));
        Ok(employees)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Employee>>, RepositoryError> {
        self.employees
            .read()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Employee>>, RepositoryError> {
        self.employees
            .write()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            })
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_last_matricule(&self) -> Result<Option<String>, RepositoryError> {
        // Highest sequence wins, whatever the prefix.
        Ok(self
            .read()?
            .keys()
            .filter_map(|m| Matricule::parse_sequence(m).map(|seq| (seq, m)))
            .max_by_key(|(seq, _)| *seq)
            .map(|(_, m)| m.clone()))
    }

    fn find_by_matricule(&self, matricule: &str) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.read()?.get(matricule).cloned())
    }

    fn save(&mut self, employee: &Employee) -> Result<(), RepositoryError> {
        self.write()?
            .insert(employee.matricule.clone(), employee.clone());
        Ok(())
    }

    fn average_performance_for_prefix(&self, prefix: &str) -> Result<Option<f64>, RepositoryError> {
        let employees = self.read()?;
        let scores: Vec<u32> = employees
            .values()
            .filter(|e| e.has_prefix(prefix))
            .map(|e| e.performance)
            .collect();

        if scores.is_empty() {
            return Ok(None);
        }
        let total: f64 = scores.iter().map(|&s| f64::from(s)).sum();
        Ok(Some(total / scores.len() as f64))
    }
}
