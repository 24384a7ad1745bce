//! Port traits defining external boundaries.
//!
//! The resolver core only talks to the patient directory through the
//! [`PatientDirectory`] trait. Implementations live in `src/adapters/`.

pub mod directory;

pub use directory::PatientDirectory;
