//! Bucket-set consistency checks
//!
//! Two independent, pure checks. Both return structured results for the
//! caller to act on; the engine itself never blocks on them.

use skyledger_domain::constants::SUM_TOLERANCE;
use skyledger_domain::types::buckets::{BucketKey, TimeBuckets};
use skyledger_domain::types::flight::{SumCheck, XcSubsetCheck};

use super::totals::primary_sum;

fn sum_keys(buckets: &TimeBuckets, keys: &[BucketKey]) -> f64 {
    keys.iter().map(|key| buckets.get(*key).unwrap_or(0.0)).sum()
}

/// Check that the primary buckets reconcile with the entered total time.
///
/// The comparison uses the unrounded primary sum: a set summing to 2.009
/// validates against 2.0, one summing to 2.02 does not.
pub fn validate_sum(buckets: &TimeBuckets, expected_time: f64) -> SumCheck {
    let calculated_total = primary_sum(buckets);
    let difference = calculated_total - expected_time;

    SumCheck { is_valid: difference.abs() < SUM_TOLERANCE, calculated_total, difference }
}

/// Check that cross-country time does not exceed the PIC and dual time it
/// mirrors.
///
/// XC buckets are always copies of primary values, never independent
/// quantities, so their sum can never legitimately exceed total PIC plus
/// total dual time.
pub fn validate_xc_subset(buckets: &TimeBuckets) -> XcSubsetCheck {
    let total_pic = sum_keys(buckets, &BucketKey::PIC_PRIMARY);
    let total_dual = sum_keys(buckets, &BucketKey::DUAL_PRIMARY);
    let total_xc = sum_keys(buckets, &BucketKey::CROSS_COUNTRY);

    if total_xc <= total_pic + total_dual + SUM_TOLERANCE {
        XcSubsetCheck { is_valid: true, message: None }
    } else {
        XcSubsetCheck {
            is_valid: false,
            message: Some(format!(
                "Cross-country time ({total_xc:.2}) exceeds PIC and dual time ({:.2})",
                total_pic + total_dual
            )),
        }
    }
}
