//! Calculated flight output types
//!
//! The allocation engine produces a [`CalculationResult`] per invocation;
//! the record builder folds it together with route and attribution into
//! the persisted [`CalculatedFlight`] shape. Validator outcomes are plain
//! result structs the caller may choose to block on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::buckets::TimeBuckets;
use super::entry::FlightRole;

/// Output of one allocation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// The expanded bucket grid
    pub buckets: TimeBuckets,
    /// Rounded sum of the primary buckets (qualifier buckets excluded)
    pub flight_hours: f64,
    /// Ordered advisory messages; never block persistence
    pub warnings: Vec<String>,
}

/// The persisted-record shape handed to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedFlight {
    pub flight_date: NaiveDate,
    pub aircraft_make_model: String,
    pub registration: String,
    pub role: FlightRole,
    /// The route string as entered; the derived endpoints live in
    /// `departure_airport`/`arrival_airport`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Bucket slots flatten into the record itself on the JSON boundary
    #[serde(flatten)]
    pub buckets: TimeBuckets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_in_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copilot_or_student: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,
    /// The caller-entered total time. Authoritative for storage; expected
    /// to match the recomputed total within validator tolerance.
    pub flight_hours: f64,
}

/// Result of the sum-consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SumCheck {
    pub is_valid: bool,
    /// Unrounded sum of the primary buckets
    pub calculated_total: f64,
    /// Signed `calculated_total - expected`
    pub difference: f64,
}

/// Result of the cross-country subset check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcSubsetCheck {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
