//! Built-in adapter for the `PatientDirectory` port.

use crate::ports::PatientDirectory;

/// Lowercase first name to patient identifier.
const PATIENTS: [(&str, &str); 3] = [("john", "H12345"), ("sheila", "H23456"), ("anand", "H56789")];

/// Directory backed by the fixed three-patient table.
///
/// Stands in for a real patient lookup service.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDirectory;

impl PatientDirectory for BuiltinDirectory {
    fn lookup(&self, first_name: &str) -> Option<String> {
        PATIENTS
            .iter()
            .find(|(name, _)| *name == first_name)
            .map(|(_, id)| (*id).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_patients() {
        let dir = BuiltinDirectory;
        assert_eq!(dir.lookup("john").as_deref(), Some("H12345"));
        assert_eq!(dir.lookup("sheila").as_deref(), Some("H23456"));
        assert_eq!(dir.lookup("anand").as_deref(), Some("H56789"));
    }

    #[test]
    fn lookup_expects_lowercased_input() {
        let dir = BuiltinDirectory;
        assert!(dir.lookup("John").is_none());
        assert!(dir.lookup("bob").is_none());
        assert!(dir.lookup("").is_none());
    }

    #[test]
    fn table_keys_are_lowercase_and_ids_non_empty() {
        for (name, id) in PATIENTS {
            assert_eq!(name, name.to_lowercase());
            assert!(!id.is_empty());
        }
    }
}
