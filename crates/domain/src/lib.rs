//! # SkyLedger Domain
//!
//! Business domain types and models for SkyLedger.
//!
//! This crate contains:
//! - Domain data types (QuickEntry, TimeBuckets, CalculatedFlight, etc.)
//! - Domain error types and Result definitions
//! - Domain constants (rule values, warning messages)
//! - Pure parsing utilities (route strings)
//!
//! ## Architecture
//! - No dependencies on other SkyLedger crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export route parser utilities
pub use utils::route::{parse_route, ParsedRoute};
