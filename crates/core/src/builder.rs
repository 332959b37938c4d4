//! Flight record builder
//!
//! Composes the classifier, allocator, and route parser into the
//! persisted-record shape, attaching pilot attribution by role.

use skyledger_domain::types::entry::{FlightRole, QuickEntry};
use skyledger_domain::types::flight::CalculatedFlight;
use skyledger_domain::utils::route::parse_route;

use crate::allocation::allocate;

/// Build the persisted flight record for one quick entry.
///
/// Attribution follows the claimed role: PIC and instructor flights name
/// the pilot as PIC; student flights name the default instructor as PIC
/// and the pilot as student; simulator sessions carry no attribution.
///
/// The record's `flight_hours` is the caller-entered time, not the
/// recomputed total: the entered value is authoritative for storage and
/// is expected to match the allocation within validator tolerance.
pub fn build_flight(
    entry: &QuickEntry,
    pilot_name: Option<&str>,
    default_instructor: Option<&str>,
) -> CalculatedFlight {
    let result = allocate(entry);
    let route = parse_route(entry.route.as_deref());

    let (pilot_in_command, copilot_or_student) = match entry.role {
        FlightRole::Pic | FlightRole::Instructor => (pilot_name.map(str::to_owned), None),
        FlightRole::Student => {
            (default_instructor.map(str::to_owned), pilot_name.map(str::to_owned))
        }
        FlightRole::Simulator => (None, None),
    };

    CalculatedFlight {
        flight_date: entry.flight_date,
        aircraft_make_model: entry.aircraft_make_model.clone(),
        registration: entry.registration.clone(),
        role: entry.role,
        route: entry.route.clone(),
        remarks: entry.remarks.clone(),
        buckets: result.buckets,
        pilot_in_command,
        copilot_or_student,
        departure_airport: route.from,
        arrival_airport: route.to,
        flight_hours: entry.flight_time,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use chrono::NaiveDate;
    use skyledger_domain::types::entry::FlightTag;

    use super::*;

    fn entry(role: FlightRole) -> QuickEntry {
        QuickEntry {
            flight_date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
            aircraft_make_model: "C172".to_string(),
            registration: "C-GABC".to_string(),
            role,
            flight_time: 1.4,
            route: Some("CZBB-CYCW".to_string()),
            tags: BTreeSet::new(),
            remarks: None,
            overrides: BTreeMap::new(),
        }
    }

    #[test]
    fn test_pic_attribution() {
        let flight = build_flight(&entry(FlightRole::Pic), Some("A. Pilot"), Some("I. Instructor"));
        assert_eq!(flight.pilot_in_command.as_deref(), Some("A. Pilot"));
        assert_eq!(flight.copilot_or_student, None);
    }

    #[test]
    fn test_instructor_attribution() {
        let flight =
            build_flight(&entry(FlightRole::Instructor), Some("A. Pilot"), Some("I. Instructor"));
        assert_eq!(flight.pilot_in_command.as_deref(), Some("A. Pilot"));
        assert_eq!(flight.copilot_or_student, None);
    }

    #[test]
    fn test_student_attribution() {
        let flight =
            build_flight(&entry(FlightRole::Student), Some("S. Student"), Some("I. Instructor"));
        assert_eq!(flight.pilot_in_command.as_deref(), Some("I. Instructor"));
        assert_eq!(flight.copilot_or_student.as_deref(), Some("S. Student"));
    }

    #[test]
    fn test_simulator_attribution_is_empty() {
        let flight =
            build_flight(&entry(FlightRole::Simulator), Some("A. Pilot"), Some("I. Instructor"));
        assert_eq!(flight.pilot_in_command, None);
        assert_eq!(flight.copilot_or_student, None);
    }

    #[test]
    fn test_route_endpoints_are_attached() {
        let flight = build_flight(&entry(FlightRole::Pic), None, None);
        assert_eq!(flight.departure_airport.as_deref(), Some("CZBB"));
        assert_eq!(flight.arrival_airport.as_deref(), Some("CYCW"));
    }

    #[test]
    fn test_route_string_is_kept_verbatim() {
        // The entered route is a quick-entry field and persists alongside
        // its derived endpoints.
        let flight = build_flight(&entry(FlightRole::Pic), None, None);
        assert_eq!(flight.route.as_deref(), Some("CZBB-CYCW"));

        let mut no_route = entry(FlightRole::Pic);
        no_route.route = None;
        let flight = build_flight(&no_route, None, None);
        assert_eq!(flight.route, None);
    }

    #[test]
    fn test_entered_time_is_authoritative() {
        let mut quick = entry(FlightRole::Pic);
        quick.tags.insert(FlightTag::CrossCountry);
        quick.flight_time = 2.5;

        let flight = build_flight(&quick, None, None);
        assert!((flight.flight_hours - 2.5).abs() < f64::EPSILON);
        assert_eq!(flight.buckets.se_day_pic, Some(2.5));
    }
}
