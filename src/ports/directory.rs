//! Patient directory port for resolving first names to patient identifiers.

/// Resolves a normalized first name to a patient identifier.
///
/// Abstracting the directory lets the built-in table be replaced by a
/// configured table file, a recording wrapper, or a cassette replay
/// without touching the resolver contract.
pub trait PatientDirectory: Send + Sync {
    /// Looks up a lowercased first name.
    ///
    /// Returns `None` when the directory has no entry for the name.
    fn lookup(&self, first_name: &str) -> Option<String>;
}
