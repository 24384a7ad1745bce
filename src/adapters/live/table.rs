//! Table-file adapter for the `PatientDirectory` port.
//!
//! Reads a YAML file of the form:
//!
//! ```yaml
//! patients:
//!   john: H12345
//!   sheila: H23456
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::ports::PatientDirectory;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DirectoryFile {
    patients: BTreeMap<String, String>,
}

/// Directory backed by an in-memory table loaded from YAML.
#[derive(Debug, Clone, Default)]
pub struct TableDirectory {
    patients: HashMap<String, String>,
}

impl TableDirectory {
    /// Builds a directory from name/id pairs, lowercasing the names.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let patients =
            entries.into_iter().map(|(name, id)| (name.as_ref().to_lowercase(), id.into())).collect();
        Self { patients }
    }

    /// Parses a directory from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the expected shape or
    /// any patient identifier is empty.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        let file: DirectoryFile =
            serde_yaml::from_str(yaml).map_err(|e| format!("invalid directory file: {e}"))?;
        if let Some((name, _)) = file.patients.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(format!("empty patient identifier for {name:?}"));
        }
        Ok(Self::from_entries(file.patients))
    }

    /// Loads a directory from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read directory file {}: {e}", path.display()))?;
        Self::from_yaml_str(&content).map_err(|e| format!("{}: {e}", path.display()))
    }

    /// Number of patients in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns `true` if the table has no patients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl PatientDirectory for TableDirectory {
    fn lookup(&self, first_name: &str) -> Option<String> {
        self.patients.get(first_name).cloned()
    }
}
