//! Primary allocation rule table
//!
//! Role and engine class jointly select one "home" bucket for the entered
//! time; the night flag only redirects day to night within the selected
//! cell. Tags never change which cell is home - they annotate it with
//! qualifier buckets downstream in the allocator.
//!
//! The table is an exhaustive match over every (role, class) pair so that
//! adding a role or class is a compile error until the new rules are
//! spelled out.

use skyledger_domain::types::buckets::BucketKey;
use skyledger_domain::types::entry::FlightRole;

use crate::aircraft::AircraftClass;

/// Outcome of the primary allocation step for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryRule {
    /// The whole entry is a simulator session: all time goes to the
    /// simulator bucket and no flight bucket is touched.
    Simulator,
    /// A real flight: time lands in `primary`, is echoed into an optional
    /// qualifier bucket, and `xc_mirror` names the matching cross-country
    /// bucket should the XC tag be present.
    Flight {
        primary: BucketKey,
        echo: Option<BucketKey>,
        xc_mirror: BucketKey,
    },
}

const fn day_night(night: bool, day: BucketKey, night_key: BucketKey) -> BucketKey {
    if night {
        night_key
    } else {
        day
    }
}

/// Select the primary rule for a (role, class, night) combination.
pub const fn primary_rule(role: FlightRole, class: AircraftClass, night: bool) -> PrimaryRule {
    use BucketKey::{
        AsFlightInstructor, DualReceived, MeDayDual, MeDayPic, MeNightDual, MeNightPic, SeDayDual,
        SeDayPic, SeNightDual, SeNightPic, XcDayDual, XcDayPic, XcNightDual, XcNightPic,
    };

    match (role, class) {
        // A simulator session, whether declared by role or detected from
        // the aircraft string, never fills flight buckets.
        (FlightRole::Simulator, _) | (_, AircraftClass::Simulator) => PrimaryRule::Simulator,

        (FlightRole::Student, AircraftClass::SingleEngine) => PrimaryRule::Flight {
            primary: day_night(night, SeDayDual, SeNightDual),
            echo: Some(DualReceived),
            xc_mirror: day_night(night, XcDayDual, XcNightDual),
        },
        (FlightRole::Student, AircraftClass::MultiEngine) => PrimaryRule::Flight {
            primary: day_night(night, MeDayDual, MeNightDual),
            echo: Some(DualReceived),
            xc_mirror: day_night(night, XcDayDual, XcNightDual),
        },
        (FlightRole::Pic, AircraftClass::SingleEngine) => PrimaryRule::Flight {
            primary: day_night(night, SeDayPic, SeNightPic),
            echo: None,
            xc_mirror: day_night(night, XcDayPic, XcNightPic),
        },
        (FlightRole::Pic, AircraftClass::MultiEngine) => PrimaryRule::Flight {
            primary: day_night(night, MeDayPic, MeNightPic),
            echo: None,
            xc_mirror: day_night(night, XcDayPic, XcNightPic),
        },
        (FlightRole::Instructor, AircraftClass::SingleEngine) => PrimaryRule::Flight {
            primary: day_night(night, SeDayPic, SeNightPic),
            echo: Some(AsFlightInstructor),
            xc_mirror: day_night(night, XcDayPic, XcNightPic),
        },
        (FlightRole::Instructor, AircraftClass::MultiEngine) => PrimaryRule::Flight {
            primary: day_night(night, MeDayPic, MeNightPic),
            echo: Some(AsFlightInstructor),
            xc_mirror: day_night(night, XcDayPic, XcNightPic),
        },
    }
}
