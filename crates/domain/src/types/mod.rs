//! Domain type definitions
//!
//! Types are grouped by concern: quick-entry input, the bucket grid,
//! calculated flight output, and entry-form defaults.

pub mod buckets;
pub mod defaults;
pub mod entry;
pub mod flight;

pub use buckets::{BucketKey, TimeBuckets};
pub use defaults::{AutocompleteOptions, FlightDefaults, PilotProfile};
pub use entry::{FlightRole, FlightTag, QuickEntry};
pub use flight::{CalculatedFlight, CalculationResult, SumCheck, XcSubsetCheck};
