//! Quick-entry allocation
//!
//! Expands one quick entry into the full bucket grid in a fixed rule
//! order: primary allocation, cross-country mirror, instrument qualifier,
//! takeoffs/landings default, caller overrides, totalizing. The pass is
//! deterministic: identical input yields identical buckets and warning
//! order.

use skyledger_domain::constants::{
    CIRCUITS_TAKEOFFS_LANDINGS, DEFAULT_TAKEOFFS_LANDINGS, WARNING_OVERRIDES_APPLIED,
    WARNING_PARTIAL_IMC, WARNING_XC_DUPLICATED,
};
use skyledger_domain::types::buckets::{BucketKey, TimeBuckets};
use skyledger_domain::types::entry::{FlightTag, QuickEntry};
use skyledger_domain::types::flight::CalculationResult;
use tracing::debug;

use super::rules::{primary_rule, PrimaryRule};
use super::totals::total_hours;
use crate::aircraft;

/// Expand a quick entry into buckets, warnings, and reconciled hours.
pub fn allocate(entry: &QuickEntry) -> CalculationResult {
    let class = aircraft::classify(&entry.aircraft_make_model);
    let night = entry.tags.contains(&FlightTag::Night);

    let mut buckets = TimeBuckets::default();
    let mut warnings = Vec::new();

    match primary_rule(entry.role, class, night) {
        PrimaryRule::Simulator => {
            buckets.simulator = Some(entry.flight_time);
        }
        PrimaryRule::Flight { primary, echo, xc_mirror } => {
            buckets.set(primary, Some(entry.flight_time));
            if let Some(echo) = echo {
                buckets.set(echo, Some(entry.flight_time));
            }

            // XC mirrors the primary value; it is a qualifier, never
            // additional time.
            if entry.tags.contains(&FlightTag::CrossCountry) {
                buckets.set(xc_mirror, Some(entry.flight_time));
                warnings.push(WARNING_XC_DUPLICATED.to_string());
            }

            // IFR allocates the whole flight to actual IMC. Partial IMC
            // is out of reach of quick entry and is only flagged, not
            // split.
            if entry.tags.contains(&FlightTag::Ifr) {
                buckets.actual_imc = Some(entry.flight_time);
                warnings.push(WARNING_PARTIAL_IMC.to_string());
            }

            let landings = if entry.tags.contains(&FlightTag::Circuits) {
                CIRCUITS_TAKEOFFS_LANDINGS
            } else {
                DEFAULT_TAKEOFFS_LANDINGS
            };
            let landings_key = if night {
                BucketKey::NightTakeoffsLandings
            } else {
                BucketKey::DayTakeoffsLandings
            };
            buckets.set(landings_key, Some(landings));
        }
    }

    apply_overrides(entry, &mut buckets, &mut warnings);

    let flight_hours = total_hours(&buckets);
    debug!(
        role = %entry.role,
        class = %class,
        night,
        flight_hours,
        warning_count = warnings.len(),
        "allocated quick entry"
    );

    CalculationResult { buckets, flight_hours, warnings }
}

/// Merge-patch caller overrides through the bucket-key whitelist.
///
/// Known keys replace the computed value verbatim (a `None` clears it);
/// unknown keys are dropped. Applying any override appends the overrides
/// warning once.
fn apply_overrides(entry: &QuickEntry, buckets: &mut TimeBuckets, warnings: &mut Vec<String>) {
    let mut applied = false;

    for (name, value) in &entry.overrides {
        match BucketKey::from_name(name) {
            Some(key) => {
                buckets.set(key, *value);
                applied = true;
            }
            None => {
                debug!(bucket = %name, "ignoring override for unknown bucket");
            }
        }
    }

    if applied {
        warnings.push(WARNING_OVERRIDES_APPLIED.to_string());
    }
}
