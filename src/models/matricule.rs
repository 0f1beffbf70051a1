//! Matricule value type.
//!
//! A matricule is one uppercase letter followed by a five-digit,
//! zero-padded sequence number (e.g. `C00042`).

use std::fmt;

/// Exclusive upper bound of the matricule sequence.
pub const MATRICULE_LIMIT: u32 = 100_000;

/// Number of digits in the sequence part of a matricule.
pub const MATRICULE_DIGITS: usize = 5;

/// A parsed employee matricule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matricule {
    type_code: char,
    sequence: u32,
}

impl Matricule {
    /// Builds a matricule, or `None` when the type code is not an uppercase
    /// ASCII letter or the sequence is outside `0..MATRICULE_LIMIT`.
    pub fn new(type_code: char, sequence: u32) -> Option<Self> {
        if !type_code.is_ascii_uppercase() || sequence >= MATRICULE_LIMIT {
            return None;
        }
        Some(Self {
            type_code,
            sequence,
        })
    }

    /// Extracts the numeric sequence from a stored matricule.
    ///
    /// Stores may hand back either a full matricule or only its numeric
    /// part, so one optional leading uppercase letter is skipped. At most
    /// [`MATRICULE_DIGITS`] digits are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_rules::models::Matricule;
    ///
    /// assert_eq!(Matricule::parse_sequence("C00042"), Some(42));
    /// assert_eq!(Matricule::parse_sequence("00042"), Some(42));
    /// assert_eq!(Matricule::parse_sequence("CX0042"), None);
    /// ```
    pub fn parse_sequence(raw: &str) -> Option<u32> {
        let digits = raw
            .strip_prefix(|c: char| c.is_ascii_uppercase())
            .unwrap_or(raw);
        if digits.is_empty()
            || digits.len() > MATRICULE_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.type_code,
            self.sequence,
            width = MATRICULE_DIGITS
        )
    }
}
