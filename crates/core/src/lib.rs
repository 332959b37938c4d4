//! # SkyLedger Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The aircraft classifier and bucket-allocation rule engine
//! - The hours totalizer and bucket validators
//! - The flight record builder
//! - Port interfaces (traits) for the defaults resolver
//!
//! ## Architecture Principles
//! - Only depends on `skyledger-domain`
//! - No database, HTTP, or platform code
//! - All external reads via traits
//! - Pure, testable business logic

pub mod aircraft;
pub mod allocation;
pub mod builder;
pub mod defaults;

// Re-export the engine surface
pub use aircraft::{classify, AircraftClass};
pub use allocation::{allocate, primary_sum, total_hours, validate_sum, validate_xc_subset};
pub use builder::build_flight;
pub use defaults::{
    infer_role, AutocompleteReader, DefaultsResolver, FlightHistoryReader, ProfileReader,
};
// Re-export the route parser alongside the engine surface
pub use skyledger_domain::utils::route::{parse_route, ParsedRoute};
