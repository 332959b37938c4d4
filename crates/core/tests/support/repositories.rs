//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the defaults-resolver ports, enabling
//! deterministic unit tests without a record store.

use async_trait::async_trait;
use chrono::NaiveDate;
use skyledger_core::defaults::ports::{AutocompleteReader, FlightHistoryReader, ProfileReader};
use skyledger_domain::types::buckets::TimeBuckets;
use skyledger_domain::types::defaults::{AutocompleteOptions, PilotProfile};
use skyledger_domain::types::entry::FlightRole;
use skyledger_domain::types::flight::CalculatedFlight;
use skyledger_domain::{Result as DomainResult, SkyLedgerError};
use uuid::Uuid;

/// In-memory mock for `FlightHistoryReader`.
///
/// Stores one most-recent flight and a fixed count.
#[derive(Default, Clone)]
pub struct MockFlightHistory {
    last_flight: Option<CalculatedFlight>,
    count: i64,
}

impl MockFlightHistory {
    /// Create a mock with no logged flights.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convenience helper seeding the most recent flight.
    pub fn with_last_flight(mut self, flight: CalculatedFlight) -> Self {
        self.last_flight = Some(flight);
        self
    }

    /// Convenience helper seeding the flight count.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }
}

#[async_trait]
impl FlightHistoryReader for MockFlightHistory {
    async fn most_recent_flight(&self, _user_id: Uuid) -> DomainResult<Option<CalculatedFlight>> {
        Ok(self.last_flight.clone())
    }

    async fn flight_count(&self, _user_id: Uuid) -> DomainResult<i64> {
        Ok(self.count)
    }
}

/// History mock whose lookups always fail, for error-path tests.
#[derive(Default, Clone)]
pub struct FailingFlightHistory;

#[async_trait]
impl FlightHistoryReader for FailingFlightHistory {
    async fn most_recent_flight(&self, _user_id: Uuid) -> DomainResult<Option<CalculatedFlight>> {
        Err(SkyLedgerError::Lookup("history store unavailable".to_string()))
    }

    async fn flight_count(&self, _user_id: Uuid) -> DomainResult<i64> {
        Err(SkyLedgerError::Lookup("history store unavailable".to_string()))
    }
}

/// In-memory mock for `AutocompleteReader`.
#[derive(Default, Clone)]
pub struct MockAutocomplete {
    options: AutocompleteOptions,
}

impl MockAutocomplete {
    /// Create a mock returning the provided option lists.
    pub fn new(options: AutocompleteOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl AutocompleteReader for MockAutocomplete {
    async fn options(&self, _user_id: Uuid) -> DomainResult<AutocompleteOptions> {
        Ok(self.options.clone())
    }
}

/// In-memory mock for `ProfileReader`.
#[derive(Default, Clone)]
pub struct MockProfiles {
    profile: Option<PilotProfile>,
}

impl MockProfiles {
    /// Create a mock returning the provided profile.
    pub fn new(profile: Option<PilotProfile>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl ProfileReader for MockProfiles {
    async fn profile(&self, _user_id: Uuid) -> DomainResult<Option<PilotProfile>> {
        Ok(self.profile.clone())
    }
}

/// Build a past flight with the given buckets and arrival airport.
pub fn past_flight(buckets: TimeBuckets, arrival: Option<&str>) -> CalculatedFlight {
    CalculatedFlight {
        flight_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        aircraft_make_model: "C172".to_string(),
        registration: "C-GABC".to_string(),
        role: FlightRole::Pic,
        route: arrival.map(|to| format!("CZBB-{to}")),
        remarks: None,
        buckets,
        pilot_in_command: Some("A. Pilot".to_string()),
        copilot_or_student: None,
        departure_airport: Some("CZBB".to_string()),
        arrival_airport: arrival.map(str::to_owned),
        flight_hours: 1.0,
    }
}
