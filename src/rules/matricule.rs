//! Matricule generation.
//!
//! New matricules continue the company-wide sequence: the last assigned
//! sequence number plus one, prefixed with the hiring position's type code.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MATRICULE_LIMIT, Matricule, Position};

/// The result of generating a matricule, including the audit step.
#[derive(Debug, Clone)]
pub struct MatriculeResult {
    /// The newly generated matricule.
    pub matricule: Matricule,
    /// The audit step recording this generation.
    pub audit_step: AuditStep,
}

/// Generates the next matricule for a position.
///
/// # Arguments
///
/// * `last_matricule` - The last assigned matricule, if any
/// * `initial_matricule` - Sequence to continue from when none was assigned
/// * `position` - Position the employee is hired into
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `MatriculeResult`, or an error if:
/// - The stored or initial matricule cannot be parsed (`InvalidMatricule`)
/// - The next sequence would reach 100000 (`LimitExceeded`)
///
/// # Examples
///
/// ```
/// use employee_rules::models::Position;
/// use employee_rules::rules::next_matricule;
///
/// let result = next_matricule(None, "00000", Position::Manager, 1).unwrap();
/// assert_eq!(result.matricule.to_string(), "M00001");
///
/// let result = next_matricule(Some("C00041"), "00000", Position::Technician, 1).unwrap();
/// assert_eq!(result.matricule.to_string(), "T00042");
/// ```
pub fn next_matricule(
    last_matricule: Option<&str>,
    initial_matricule: &str,
    position: Position,
    step_number: u32,
) -> EngineResult<MatriculeResult> {
    let (previous, source) = match last_matricule {
        Some(last) => (last, "repository"),
        None => (initial_matricule, "initial"),
    };

    let sequence =
        Matricule::parse_sequence(previous).ok_or_else(|| EngineError::InvalidMatricule {
            value: previous.to_string(),
        })?;

    let next = sequence
        .checked_add(1)
        .filter(|next| *next < MATRICULE_LIMIT)
        .ok_or(EngineError::LimitExceeded {
            limit: MATRICULE_LIMIT,
        })?;

    let type_code = position.type_code();
    let matricule = Matricule::new(type_code, next).ok_or(EngineError::LimitExceeded {
        limit: MATRICULE_LIMIT,
    })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "matricule_generation".to_string(),
        rule_name: "Matricule Generation".to_string(),
        input: serde_json::json!({
            "previous": previous,
            "source": source,
            "position": position.name()
        }),
        output: serde_json::json!({
            "matricule": matricule.to_string(),
            "sequence": next
        }),
        reasoning: format!(
            "{} ({}) + 1 = {}, prefixed with '{}' for {}",
            sequence, source, next, type_code, position
        ),
    };

    Ok(MatriculeResult {
        matricule,
        audit_step,
    })
}
