//! Smart defaults resolution
//!
//! The only part of the engine that performs I/O. All reads go through
//! injected port traits; the resolver itself only merges their results.

pub mod ports;
pub mod resolver;

pub use ports::{AutocompleteReader, FlightHistoryReader, ProfileReader};
pub use resolver::{infer_role, DefaultsResolver};
