//! Defaults resolver - merges history, profile, and autocomplete reads
//! into entry-form pre-fill suggestions.

use std::sync::Arc;

use skyledger_domain::constants::ROUTE_PREFIX_SEPARATOR;
use skyledger_domain::types::buckets::TimeBuckets;
use skyledger_domain::types::defaults::FlightDefaults;
use skyledger_domain::types::entry::FlightRole;
use skyledger_domain::Result;
use tracing::debug;
use uuid::Uuid;

use super::ports::{AutocompleteReader, FlightHistoryReader, ProfileReader};

/// Infer the role of a past flight from its recorded buckets.
///
/// Fixed precedence: a nonzero simulator bucket marks a simulator
/// session; else nonzero instructor time marks an instructor flight; else
/// nonzero dual received marks a student flight; everything else is PIC.
pub fn infer_role(buckets: &TimeBuckets) -> FlightRole {
    let nonzero = |value: Option<f64>| value.unwrap_or(0.0) > 0.0;

    if nonzero(buckets.simulator) {
        FlightRole::Simulator
    } else if nonzero(buckets.as_flight_instructor) {
        FlightRole::Instructor
    } else if nonzero(buckets.dual_received) {
        FlightRole::Student
    } else {
        FlightRole::Pic
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Resolves pre-fill defaults for a new quick entry.
pub struct DefaultsResolver {
    history: Arc<dyn FlightHistoryReader>,
    autocomplete: Arc<dyn AutocompleteReader>,
    profiles: Arc<dyn ProfileReader>,
}

impl DefaultsResolver {
    /// Create a new resolver over the injected read ports.
    pub fn new(
        history: Arc<dyn FlightHistoryReader>,
        autocomplete: Arc<dyn AutocompleteReader>,
        profiles: Arc<dyn ProfileReader>,
    ) -> Self {
        Self { history, autocomplete, profiles }
    }

    /// Resolve defaults for one user.
    ///
    /// The four lookups are independent and issued concurrently; their
    /// completion order does not affect the merged output.
    pub async fn resolve(&self, user_id: Uuid) -> Result<FlightDefaults> {
        let (last_flight, options, profile, flight_count) = tokio::join!(
            self.history.most_recent_flight(user_id),
            self.autocomplete.options(user_id),
            self.profiles.profile(user_id),
            self.history.flight_count(user_id),
        );

        let last_flight = last_flight?;
        let options = options?;
        let profile = profile?.unwrap_or_default();
        let flight_count = flight_count?;

        let pilot_name = non_empty(profile.pilot_name);
        let home_base = non_empty(profile.home_base);
        let default_instructor = non_empty(profile.default_instructor);
        let has_profile = pilot_name.is_some() && home_base.is_some();

        let last_arrival = last_flight.as_ref().and_then(|f| f.arrival_airport.clone());
        let route_prefix = last_arrival
            .or_else(|| home_base.clone())
            .map(|airport| format!("{airport}{ROUTE_PREFIX_SEPARATOR}"));

        let inferred_role = last_flight
            .as_ref()
            .map_or(FlightRole::Pic, |flight| infer_role(&flight.buckets));

        debug!(%user_id, flight_count, has_profile, "resolved entry defaults");

        Ok(FlightDefaults {
            last_aircraft_make_model: last_flight.as_ref().map(|f| f.aircraft_make_model.clone()),
            last_registration: last_flight.as_ref().map(|f| f.registration.clone()),
            inferred_role,
            route_prefix,
            pilot_name,
            home_base,
            default_instructor,
            has_profile,
            autocomplete: options,
            flight_count,
        })
    }
}
