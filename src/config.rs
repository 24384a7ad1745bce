//! Runtime settings read from the environment.
//!
//! With no variables set the resolver uses the built-in directory, records
//! nothing, and emits no diagnostics beyond its single result line.

use std::path::PathBuf;

/// Path to a YAML directory file that replaces the built-in table.
pub const DIRECTORY_VAR: &str = "RESOLVE_PATIENT_ID_DIRECTORY";
/// Path of a cassette file that captures every directory lookup.
pub const RECORD_VAR: &str = "RESOLVE_PATIENT_ID_RECORD";
/// `tracing` filter directive enabling diagnostics on stderr.
pub const LOG_VAR: &str = "RESOLVE_PATIENT_ID_LOG";

/// Settings that shape how a skill invocation is wired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory file to load instead of the built-in table.
    pub directory: Option<PathBuf>,
    /// Cassette path to record lookups to.
    pub record: Option<PathBuf>,
    /// Log filter directive; logging stays off when `None`.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            directory: get(DIRECTORY_VAR).map(PathBuf::from),
            record: get(RECORD_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR),
        }
    }
}
