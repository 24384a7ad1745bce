//! Skill input and output envelopes.
//!
//! Every skill receives a single JSON argument shaped like
//! `{ "inputArgs": { ... } }`. Fields outside `inputArgs` are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SkillError;

/// Parses the raw skill argument as JSON.
///
/// # Errors
///
/// Returns [`SkillError::InvalidJson`] carrying the parser message.
pub fn parse(raw: &str) -> Result<Value, SkillError> {
    serde_json::from_str(raw).map_err(SkillError::InvalidJson)
}

/// Reads `inputArgs.<field>`, treating a non-object at any level as absent.
#[must_use]
pub fn input_arg<'a>(input: &'a Value, field: &str) -> Option<&'a Value> {
    input.get("inputArgs")?.as_object()?.get(field)
}

/// Returns `true` for values a skill treats as "provided".
///
/// `null`, `false`, zero, empty strings and empty containers are not.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Successful resolver output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIdResult {
    /// The resolved patient identifier.
    pub patient_id: String,
}

impl PatientIdResult {
    /// Renders the result as 2-space indented JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        // A struct with one string field cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
