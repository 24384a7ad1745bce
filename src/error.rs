//! Skill error taxonomy and the exit codes each failure maps to.

use thiserror::Error;

/// Terminal failures of a skill invocation.
///
/// The `Display` output is the exact diagnostic line written to stderr.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Wrong number of command-line arguments.
    #[error("{usage}")]
    Usage {
        /// Usage line for the binary that was invoked.
        usage: &'static str,
    },
    /// The argument was not valid JSON.
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// `inputArgs.name` was absent, not a string, or blank.
    #[error("Missing inputArgs.name")]
    MissingName,
    /// The first name has no entry in the patient directory.
    #[error("Unknown patient name: {0}")]
    UnknownPatient(String),
    /// A required `inputArgs` field was absent or falsy.
    #[error("Missing required field: inputArgs.{0}")]
    MissingField(&'static str),
    /// Runtime configuration could not be applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SkillError {
    /// Process exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 1,
            Self::InvalidJson(_) | Self::MissingField(_) => 2,
            Self::MissingName => 3,
            Self::UnknownPatient(_) => 4,
            Self::Config(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_resolver_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let codes = [
            SkillError::Usage { usage: "Usage: x" }.exit_code(),
            SkillError::InvalidJson(parse_err).exit_code(),
            SkillError::MissingName.exit_code(),
            SkillError::UnknownPatient("Bob".into()).exit_code(),
            SkillError::Config("bad".into()).exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn display_matches_diagnostic_wording() {
        assert_eq!(SkillError::MissingName.to_string(), "Missing inputArgs.name");
        assert_eq!(
            SkillError::UnknownPatient("Bob".into()).to_string(),
            "Unknown patient name: Bob"
        );
        assert_eq!(
            SkillError::MissingField("patient_id").to_string(),
            "Missing required field: inputArgs.patient_id"
        );
    }

    #[test]
    fn invalid_json_keeps_parser_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let message = parse_err.to_string();
        let err = SkillError::InvalidJson(parse_err);
        assert_eq!(err.to_string(), format!("Invalid JSON input: {message}"));
    }
}
