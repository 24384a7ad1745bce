//! Adapter implementations for the port traits.
//!
//! - `live`: the built-in table and table files loaded from disk.
//! - `recording`: wraps another adapter and writes a cassette.
//! - `replaying`: serves lookups back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
