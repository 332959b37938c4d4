//! Total flight hours derivation
//!
//! Only the twelve primary buckets count toward total time. Simulator,
//! cross-country, instrument, instructor, and dual-received values are
//! qualifiers: either non-flight time or subsets already counted in a
//! primary bucket, so adding them would double-count.

use skyledger_domain::constants::HOURS_ROUNDING_FACTOR;
use skyledger_domain::types::buckets::{BucketKey, TimeBuckets};

/// Unrounded sum of the twelve primary buckets, absent treated as 0.
///
/// The validators compare against this raw figure; display code wants
/// [`total_hours`].
pub fn primary_sum(buckets: &TimeBuckets) -> f64 {
    BucketKey::PRIMARY.into_iter().map(|key| buckets.get(key).unwrap_or(0.0)).sum()
}

/// Authoritative total flight hours: the primary sum rounded to one
/// decimal place.
pub fn total_hours(buckets: &TimeBuckets) -> f64 {
    (primary_sum(buckets) * HOURS_ROUNDING_FACTOR).round() / HOURS_ROUNDING_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_all_twelve_primaries() {
        let mut buckets = TimeBuckets::default();
        for key in BucketKey::PRIMARY {
            buckets.set(key, Some(0.5));
        }

        assert!((primary_sum(&buckets) - 6.0).abs() < f64::EPSILON);
        assert!((total_hours(&buckets) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_is_zero() {
        let buckets = TimeBuckets { se_day_pic: Some(1.2), ..TimeBuckets::default() };
        assert!((total_hours(&buckets) - 1.2).abs() < f64::EPSILON);

        assert!(total_hours(&TimeBuckets::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_qualifier_buckets_never_change_the_total() {
        let base = TimeBuckets { me_night_pic: Some(2.5), ..TimeBuckets::default() };
        let base_total = total_hours(&base);

        let mut noisy = base;
        noisy.simulator = Some(5.0);
        noisy.actual_imc = Some(2.5);
        noisy.hood = Some(1.0);
        noisy.as_flight_instructor = Some(2.5);
        noisy.dual_received = Some(2.5);
        noisy.ifr_approaches = Some(2.0);
        noisy.holding = Some(0.3);
        noisy.day_takeoffs_landings = Some(4.0);
        noisy.night_takeoffs_landings = Some(1.0);
        for key in BucketKey::CROSS_COUNTRY {
            noisy.set(key, Some(2.5));
        }

        assert!((total_hours(&noisy) - base_total).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let buckets = TimeBuckets {
            se_day_pic: Some(1.0),
            me_day_pic: Some(1.25),
            ..TimeBuckets::default()
        };
        // 2.25 rounds half away from zero to 2.3
        assert!((total_hours(&buckets) - 2.3).abs() < 1e-9);

        let buckets =
            TimeBuckets { se_day_pic: Some(2.009), ..TimeBuckets::default() };
        assert!((total_hours(&buckets) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulator_only_entry_totals_zero() {
        let buckets = TimeBuckets { simulator: Some(1.5), ..TimeBuckets::default() };
        assert!(total_hours(&buckets).abs() < f64::EPSILON);
    }
}
