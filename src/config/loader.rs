//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! constants from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{MATRICULE_LIMIT, Matricule};

use super::types::CompanyConfig;

/// Name of the configuration file inside a configuration directory.
pub const COMPANY_FILE: &str = "company.yaml";

/// Loads and validates company configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── company.yaml   # Base salary, base performance, coefficients
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_rules::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Base salary: {}", loader.config().base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `company.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or fails validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = path.as_ref().join(COMPANY_FILE);
        let path_str = file.display().to_string();

        let content = fs::read_to_string(&file).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded company configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_rules::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// base_salary: "1500.00"
    /// base_performance: 1
    /// initial_matricule: "00000"
    /// education_coefficients:
    ///   cap: "1.0"
    ///   bac: "1.1"
    ///   bts_iut: "1.2"
    ///   licence: "1.2"
    ///   master: "1.4"
    ///   engineer: "1.6"
    ///   doctorate: "1.7"
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.config().commercial_prefix, "C");
    /// # Ok::<(), employee_rules::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: CompanyConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config).map_err(|message| EngineError::ConfigParseError {
            path: path.to_string(),
            message,
        })?;

        Ok(Self { config })
    }

    fn validate(config: &CompanyConfig) -> Result<(), String> {
        let missing = config.missing_levels();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|l| l.as_str()).collect();
            return Err(format!(
                "missing education coefficients for: {}",
                names.join(", ")
            ));
        }

        match Matricule::parse_sequence(&config.initial_matricule) {
            Some(seq) if seq < MATRICULE_LIMIT => {}
            _ => {
                return Err(format!(
                    "initial_matricule '{}' is not a sequence below {}",
                    config.initial_matricule, MATRICULE_LIMIT
                ));
            }
        }

        if config.commercial_prefix.is_empty() {
            return Err("commercial_prefix cannot be empty".to_string());
        }

        if config.base_salary <= rust_decimal::Decimal::ZERO {
            return Err("base_salary must be positive".to_string());
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CompanyConfig {
        self.config
    }
}
