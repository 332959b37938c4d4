//! Application constants
//!
//! Centralized location for all domain-level constants used by the
//! allocation engine and its validators.

// Allocation rule values
pub const DEFAULT_TAKEOFFS_LANDINGS: f64 = 1.0;
pub const CIRCUITS_TAKEOFFS_LANDINGS: f64 = 4.0;

// Hours arithmetic
pub const HOURS_ROUNDING_FACTOR: f64 = 10.0; // one decimal place
pub const SUM_TOLERANCE: f64 = 0.01;

// Warning messages (shared between services and tests)
pub const WARNING_XC_DUPLICATED: &str = "XC time duplicated as qualifier (not additive to total)";
pub const WARNING_PARTIAL_IMC: &str =
    "IFR tag allocates the full flight time to actual IMC - partial IMC requires manual entry";
pub const WARNING_OVERRIDES_APPLIED: &str =
    "Manual overrides applied - calculation may not follow standard rules";

// Route prefix separator appended after the seed airport code
pub const ROUTE_PREFIX_SEPARATOR: &str = "-";
