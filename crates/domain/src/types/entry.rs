//! Quick-entry input types
//!
//! A quick entry is the terse form a pilot submits: aircraft, role, total
//! time, and a handful of qualifier tags. The allocation engine expands it
//! into the full bucket grid.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// The seat role claimed for the flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightRole {
    /// Pilot in command
    #[serde(rename = "PIC")]
    Pic,
    /// Dual instruction received
    Student,
    /// Instructing from the right seat (logged as PIC plus instructor time)
    Instructor,
    /// Ground simulator session
    Simulator,
}

impl_domain_enum_conversions!(FlightRole {
    Pic => "pic",
    Student => "student",
    Instructor => "instructor",
    Simulator => "simulator",
});

/// Qualifier tags attached to a quick entry.
///
/// Tags form a set: order is irrelevant and duplicates are meaningless,
/// hence `BTreeSet` in [`QuickEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightTag {
    /// The flight is classified night; redirects day buckets to their
    /// night counterparts
    Night,
    /// Cross-country; mirrors the primary time into an XC bucket
    #[serde(rename = "XC")]
    CrossCountry,
    /// Instrument flight; allocates actual IMC time
    #[serde(rename = "IFR")]
    Ifr,
    /// Circuit work; bumps the takeoffs/landings count
    Circuits,
}

impl_domain_enum_conversions!(FlightTag {
    Night => "night",
    CrossCountry => "xc",
    Ifr => "ifr",
    Circuits => "circuits",
});

/// One quick-entry form submission.
///
/// Preconditions (non-empty aircraft string, positive flight time) are
/// enforced by the surrounding API layer before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickEntry {
    pub flight_date: NaiveDate,
    pub aircraft_make_model: String,
    pub registration: String,
    pub role: FlightRole,
    /// Total flight time in hours, as entered
    pub flight_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<FlightTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Merge-patch over the computed buckets, keyed by camelCase bucket
    /// name. An explicit `null` clears the computed value; unknown keys
    /// are ignored.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, Option<f64>>,
}
