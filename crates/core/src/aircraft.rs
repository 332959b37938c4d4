//! Aircraft type classification
//!
//! Maps a free-text make/model string to an engine class via ordered,
//! data-driven pattern tables. Simulator patterns are checked before
//! multi-engine patterns: a "FRASCA PA44 FTD" is a simulator session even
//! though it names a multi-engine type. Anything unmatched is treated as
//! single-engine, the safe default for a personal logbook.

use skyledger_domain::impl_domain_enum_conversions;
use tracing::debug;

/// Engine class resolved from the aircraft make/model string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftClass {
    SingleEngine,
    MultiEngine,
    Simulator,
}

impl_domain_enum_conversions!(AircraftClass {
    SingleEngine => "single-engine",
    MultiEngine => "multi-engine",
    Simulator => "simulator",
});

/// Substrings that mark a ground trainer. Checked first.
pub const SIMULATOR_PATTERNS: &[&str] = &[
    "SIM", "FRASCA", "REDBIRD", "ALSIM", "ELITE", "FNPT", "FTD", "FMX", "CAE", "TRAINER",
];

/// Substrings that mark a multi-engine type. Checked after the simulator
/// table.
pub const MULTI_ENGINE_PATTERNS: &[&str] = &[
    "PA44", "PA34", "PA31", "PA23", "BE76", "BE58", "BE55", "BE20", "DA42", "DA62", "C310",
    "C340", "C402", "C421", "SEMINOLE", "SENECA", "DUCHESS", "BARON", "NAVAJO", "AZTEC",
    "KING AIR", "TWIN",
];

/// Classify a free-text make/model string.
///
/// Case-insensitive substring match, simulator table before multi-engine
/// table. Never fails; unmatched strings classify as single-engine.
pub fn classify(make_model: &str) -> AircraftClass {
    let upper = make_model.to_uppercase();

    if SIMULATOR_PATTERNS.iter().any(|pattern| upper.contains(pattern)) {
        return AircraftClass::Simulator;
    }
    if MULTI_ENGINE_PATTERNS.iter().any(|pattern| upper.contains(pattern)) {
        return AircraftClass::MultiEngine;
    }

    debug!(make_model, "no pattern match, defaulting to single-engine");
    AircraftClass::SingleEngine
}
