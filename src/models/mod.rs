//! Core data models for the Employee Rules Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod matricule;
mod outcome;
mod position;
mod request;

pub use employee::Employee;
pub use matricule::{MATRICULE_DIGITS, MATRICULE_LIMIT, Matricule};
pub use outcome::{
    AuditStep, AuditTrace, AuditWarning, HiringOutcome, PerformanceBand, PerformanceOutcome,
};
pub use position::{EducationLevel, Position};
pub use request::{HireRequest, PerformanceRequest};
