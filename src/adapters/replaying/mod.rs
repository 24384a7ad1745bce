//! Replaying adapters that replay recorded interactions.

pub mod directory;

pub use directory::ReplayingDirectory;
