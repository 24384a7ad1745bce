//! Name-to-patient resolution.
//!
//! A request is validated into a [`NameQuery`] before any port is touched,
//! so malformed input never reaches the directory.

use serde_json::Value;

use crate::envelope::{self, PatientIdResult};
use crate::error::SkillError;
use crate::ports::PatientDirectory;

/// A validated lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    first_name: String,
}

impl NameQuery {
    /// Builds a query from a full name, keeping only its first token.
    ///
    /// Returns `None` for an empty or whitespace-only name.
    #[must_use]
    pub fn from_full_name(name: &str) -> Option<Self> {
        name.split_whitespace().next().map(|first| Self { first_name: first.to_string() })
    }

    /// The first name exactly as supplied.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The key used against the directory.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.first_name.to_lowercase()
    }
}

/// Parses a raw skill argument into a [`NameQuery`].
///
/// # Errors
///
/// Returns [`SkillError::InvalidJson`] for malformed JSON and
/// [`SkillError::MissingName`] when `inputArgs.name` is absent, not a
/// string, or blank.
pub fn parse_query(raw: &str) -> Result<NameQuery, SkillError> {
    let input = envelope::parse(raw)?;
    envelope::input_arg(&input, "name")
        .and_then(Value::as_str)
        .and_then(NameQuery::from_full_name)
        .ok_or(SkillError::MissingName)
}

/// Looks a query up in the directory.
///
/// # Errors
///
/// Returns [`SkillError::UnknownPatient`] with the original-case first name
/// when the directory has no entry.
pub fn resolve(
    directory: &dyn PatientDirectory,
    query: &NameQuery,
) -> Result<PatientIdResult, SkillError> {
    let key = query.lookup_key();
    match directory.lookup(&key) {
        Some(patient_id) => {
            tracing::debug!(first_name = %key, %patient_id, "resolved patient");
            Ok(PatientIdResult { patient_id })
        }
        None => {
            tracing::debug!(first_name = %key, "no directory entry");
            Err(SkillError::UnknownPatient(query.first_name().to_string()))
        }
    }
}
