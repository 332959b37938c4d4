//! Entry-form default types
//!
//! The defaults resolver merges the pilot's most recent flight, profile
//! settings, and autocomplete history into pre-fill suggestions for a new
//! quick entry.

use serde::{Deserialize, Serialize};

use super::entry::FlightRole;

/// Profile settings read from the profile store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_instructor: Option<String>,
}

/// Autocomplete option lists aggregated from flight history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteOptions {
    pub aircraft: Vec<String>,
    pub registrations: Vec<String>,
    pub routes: Vec<String>,
}

/// Merged pre-fill suggestions for a new quick entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDefaults {
    /// Aircraft make/model from the most recent flight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_aircraft_make_model: Option<String>,
    /// Registration from the most recent flight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_registration: Option<String>,
    /// Role inferred from the last flight's recorded buckets
    pub inferred_role: FlightRole,
    /// Seed for the route field: last arrival airport (or home base)
    /// with a trailing separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_instructor: Option<String>,
    /// True iff both pilot name and home base are present and non-empty
    pub has_profile: bool,
    pub autocomplete: AutocompleteOptions,
    pub flight_count: i64,
}
