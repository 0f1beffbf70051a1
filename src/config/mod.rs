//! Configuration loading and management for the Employee Rules Engine.
//!
//! This module provides the company constants (base salary, base
//! performance, initial matricule and education coefficients) and a loader
//! for reading them from YAML.
//!
//! # Example
//!
//! ```no_run
//! use employee_rules::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Base performance: {}", config.config().base_performance);
//! ```

mod loader;
mod types;

pub use loader::{COMPANY_FILE, ConfigLoader};
pub use types::CompanyConfig;
