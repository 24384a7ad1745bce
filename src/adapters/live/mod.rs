//! Live adapters for real patient lookups.

pub mod directory;
pub mod table;

pub use directory::BuiltinDirectory;
pub use table::TableDirectory;
