//! Port interfaces for defaults resolution
//!
//! These traits define the boundaries between the defaults resolver and
//! the record store. Each is a simple key-to-record fetch by user id;
//! implementations live in the surrounding application and tests supply
//! in-memory mocks.

use async_trait::async_trait;
use skyledger_domain::types::defaults::{AutocompleteOptions, PilotProfile};
use skyledger_domain::types::flight::CalculatedFlight;
use skyledger_domain::Result;
use uuid::Uuid;

/// Read-only access to a user's flight history.
#[async_trait]
pub trait FlightHistoryReader: Send + Sync {
    /// The user's most recently logged flight, if any.
    async fn most_recent_flight(&self, user_id: Uuid) -> Result<Option<CalculatedFlight>>;

    /// Total number of flights the user has logged.
    async fn flight_count(&self, user_id: Uuid) -> Result<i64>;
}

/// Read-only access to autocomplete aggregates for a user.
#[async_trait]
pub trait AutocompleteReader: Send + Sync {
    /// Distinct aircraft, registrations, and routes from the user's log.
    async fn options(&self, user_id: Uuid) -> Result<AutocompleteOptions>;
}

/// Read-only access to profile settings.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// The user's profile, if one has been saved.
    async fn profile(&self, user_id: Uuid) -> Result<Option<PilotProfile>>;
}
