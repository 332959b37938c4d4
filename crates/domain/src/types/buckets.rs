//! The flight-time bucket grid
//!
//! `TimeBuckets` is the 27-slot record every flight expands into: twelve
//! primary hour buckets (engine class x day/night x seat role), six
//! cross-country mirrors of the same grid, and nine independent qualifier
//! buckets (landings counts, instrument time, simulator time, instructor
//! time, dual received).
//!
//! Every slot is `Option<f64>`: absent means "not applicable" and is
//! distinct from an explicit zero. The totalizer and validators rely on
//! that distinction, so the struct is a fixed-shape record rather than a
//! sparse map.

use serde::{Deserialize, Serialize};

/// Identifier for one slot in the bucket grid.
///
/// This enum is the whitelist of known bucket names: override merging,
/// the totalizer, and the validators all index the grid through it, so
/// an unknown name can never reach a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    SeDayDual,
    SeDayPic,
    SeDayCopilot,
    SeNightDual,
    SeNightPic,
    SeNightCopilot,
    MeDayDual,
    MeDayPic,
    MeDayCopilot,
    MeNightDual,
    MeNightPic,
    MeNightCopilot,
    XcDayDual,
    XcDayPic,
    XcDayCopilot,
    XcNightDual,
    XcNightPic,
    XcNightCopilot,
    DayTakeoffsLandings,
    NightTakeoffsLandings,
    ActualImc,
    Hood,
    Simulator,
    IfrApproaches,
    Holding,
    AsFlightInstructor,
    DualReceived,
}

impl BucketKey {
    /// Every bucket in the grid, in serialization order.
    pub const ALL: [Self; 27] = [
        Self::SeDayDual,
        Self::SeDayPic,
        Self::SeDayCopilot,
        Self::SeNightDual,
        Self::SeNightPic,
        Self::SeNightCopilot,
        Self::MeDayDual,
        Self::MeDayPic,
        Self::MeDayCopilot,
        Self::MeNightDual,
        Self::MeNightPic,
        Self::MeNightCopilot,
        Self::XcDayDual,
        Self::XcDayPic,
        Self::XcDayCopilot,
        Self::XcNightDual,
        Self::XcNightPic,
        Self::XcNightCopilot,
        Self::DayTakeoffsLandings,
        Self::NightTakeoffsLandings,
        Self::ActualImc,
        Self::Hood,
        Self::Simulator,
        Self::IfrApproaches,
        Self::Holding,
        Self::AsFlightInstructor,
        Self::DualReceived,
    ];

    /// The twelve primary hour buckets. These are the only buckets that
    /// count toward total flight hours.
    pub const PRIMARY: [Self; 12] = [
        Self::SeDayDual,
        Self::SeDayPic,
        Self::SeDayCopilot,
        Self::SeNightDual,
        Self::SeNightPic,
        Self::SeNightCopilot,
        Self::MeDayDual,
        Self::MeDayPic,
        Self::MeDayCopilot,
        Self::MeNightDual,
        Self::MeNightPic,
        Self::MeNightCopilot,
    ];

    /// Primary PIC buckets (SE + ME, day + night).
    pub const PIC_PRIMARY: [Self; 4] =
        [Self::SeDayPic, Self::SeNightPic, Self::MeDayPic, Self::MeNightPic];

    /// Primary dual buckets (SE + ME, day + night).
    pub const DUAL_PRIMARY: [Self; 4] =
        [Self::SeDayDual, Self::SeNightDual, Self::MeDayDual, Self::MeNightDual];

    /// The six cross-country mirror buckets.
    pub const CROSS_COUNTRY: [Self; 6] = [
        Self::XcDayDual,
        Self::XcDayPic,
        Self::XcDayCopilot,
        Self::XcNightDual,
        Self::XcNightPic,
        Self::XcNightCopilot,
    ];

    /// The camelCase name used on the JSON boundary.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeDayDual => "seDayDual",
            Self::SeDayPic => "seDayPic",
            Self::SeDayCopilot => "seDayCopilot",
            Self::SeNightDual => "seNightDual",
            Self::SeNightPic => "seNightPic",
            Self::SeNightCopilot => "seNightCopilot",
            Self::MeDayDual => "meDayDual",
            Self::MeDayPic => "meDayPic",
            Self::MeDayCopilot => "meDayCopilot",
            Self::MeNightDual => "meNightDual",
            Self::MeNightPic => "meNightPic",
            Self::MeNightCopilot => "meNightCopilot",
            Self::XcDayDual => "xcDayDual",
            Self::XcDayPic => "xcDayPic",
            Self::XcDayCopilot => "xcDayCopilot",
            Self::XcNightDual => "xcNightDual",
            Self::XcNightPic => "xcNightPic",
            Self::XcNightCopilot => "xcNightCopilot",
            Self::DayTakeoffsLandings => "dayTakeoffsLandings",
            Self::NightTakeoffsLandings => "nightTakeoffsLandings",
            Self::ActualImc => "actualImc",
            Self::Hood => "hood",
            Self::Simulator => "simulator",
            Self::IfrApproaches => "ifrApproaches",
            Self::Holding => "holding",
            Self::AsFlightInstructor => "asFlightInstructor",
            Self::DualReceived => "dualReceived",
        }
    }

    /// Resolve a boundary name back to a key. Unknown names yield `None`,
    /// which is how override merging filters unrecognized keys.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// The full bucket grid for one flight.
///
/// Serialized with camelCase keys matching `BucketKey::as_str`; absent
/// buckets are omitted entirely so the absent-vs-zero distinction
/// survives the JSON boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBuckets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_day_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_day_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_day_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_night_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_night_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_night_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_day_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_day_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_day_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_night_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_night_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me_night_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_day_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_day_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_day_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_night_dual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_night_pic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_night_copilot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_takeoffs_landings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night_takeoffs_landings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_imc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulator: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifr_approaches: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_flight_instructor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_received: Option<f64>,
}

impl TimeBuckets {
    /// Read one slot by key.
    pub const fn get(&self, key: BucketKey) -> Option<f64> {
        match key {
            BucketKey::SeDayDual => self.se_day_dual,
            BucketKey::SeDayPic => self.se_day_pic,
            BucketKey::SeDayCopilot => self.se_day_copilot,
            BucketKey::SeNightDual => self.se_night_dual,
            BucketKey::SeNightPic => self.se_night_pic,
            BucketKey::SeNightCopilot => self.se_night_copilot,
            BucketKey::MeDayDual => self.me_day_dual,
            BucketKey::MeDayPic => self.me_day_pic,
            BucketKey::MeDayCopilot => self.me_day_copilot,
            BucketKey::MeNightDual => self.me_night_dual,
            BucketKey::MeNightPic => self.me_night_pic,
            BucketKey::MeNightCopilot => self.me_night_copilot,
            BucketKey::XcDayDual => self.xc_day_dual,
            BucketKey::XcDayPic => self.xc_day_pic,
            BucketKey::XcDayCopilot => self.xc_day_copilot,
            BucketKey::XcNightDual => self.xc_night_dual,
            BucketKey::XcNightPic => self.xc_night_pic,
            BucketKey::XcNightCopilot => self.xc_night_copilot,
            BucketKey::DayTakeoffsLandings => self.day_takeoffs_landings,
            BucketKey::NightTakeoffsLandings => self.night_takeoffs_landings,
            BucketKey::ActualImc => self.actual_imc,
            BucketKey::Hood => self.hood,
            BucketKey::Simulator => self.simulator,
            BucketKey::IfrApproaches => self.ifr_approaches,
            BucketKey::Holding => self.holding,
            BucketKey::AsFlightInstructor => self.as_flight_instructor,
            BucketKey::DualReceived => self.dual_received,
        }
    }

    /// Write one slot by key. `None` clears the slot back to absent.
    pub fn set(&mut self, key: BucketKey, value: Option<f64>) {
        match key {
            BucketKey::SeDayDual => self.se_day_dual = value,
            BucketKey::SeDayPic => self.se_day_pic = value,
            BucketKey::SeDayCopilot => self.se_day_copilot = value,
            BucketKey::SeNightDual => self.se_night_dual = value,
            BucketKey::SeNightPic => self.se_night_pic = value,
            BucketKey::SeNightCopilot => self.se_night_copilot = value,
            BucketKey::MeDayDual => self.me_day_dual = value,
            BucketKey::MeDayPic => self.me_day_pic = value,
            BucketKey::MeDayCopilot => self.me_day_copilot = value,
            BucketKey::MeNightDual => self.me_night_dual = value,
            BucketKey::MeNightPic => self.me_night_pic = value,
            BucketKey::MeNightCopilot => self.me_night_copilot = value,
            BucketKey::XcDayDual => self.xc_day_dual = value,
            BucketKey::XcDayPic => self.xc_day_pic = value,
            BucketKey::XcDayCopilot => self.xc_day_copilot = value,
            BucketKey::XcNightDual => self.xc_night_dual = value,
            BucketKey::XcNightPic => self.xc_night_pic = value,
            BucketKey::XcNightCopilot => self.xc_night_copilot = value,
            BucketKey::DayTakeoffsLandings => self.day_takeoffs_landings = value,
            BucketKey::NightTakeoffsLandings => self.night_takeoffs_landings = value,
            BucketKey::ActualImc => self.actual_imc = value,
            BucketKey::Hood => self.hood = value,
            BucketKey::Simulator => self.simulator = value,
            BucketKey::IfrApproaches => self.ifr_approaches = value,
            BucketKey::Holding => self.holding = value,
            BucketKey::AsFlightInstructor => self.as_flight_instructor = value,
            BucketKey::DualReceived => self.dual_received = value,
        }
    }

    /// True when no bucket has been set.
    pub fn is_empty(&self) -> bool {
        BucketKey::ALL.into_iter().all(|key| self.get(key).is_none())
    }

    /// Keys of every bucket currently present, in grid order.
    pub fn set_keys(&self) -> Vec<BucketKey> {
        BucketKey::ALL.into_iter().filter(|key| self.get(*key).is_some()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name_roundtrip() {
        for key in BucketKey::ALL {
            assert_eq!(BucketKey::from_name(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(BucketKey::from_name("warpDrive"), None);
        assert_eq!(BucketKey::from_name("se_day_dual"), None);
        assert_eq!(BucketKey::from_name(""), None);
    }

    #[test]
    fn test_get_set_every_slot() {
        let mut buckets = TimeBuckets::default();

        for (idx, key) in BucketKey::ALL.into_iter().enumerate() {
            buckets.set(key, Some(idx as f64));
        }
        for (idx, key) in BucketKey::ALL.into_iter().enumerate() {
            assert_eq!(buckets.get(key), Some(idx as f64));
        }

        buckets.set(BucketKey::Hood, None);
        assert_eq!(buckets.get(BucketKey::Hood), None);
    }

    #[test]
    fn test_is_empty_and_set_keys() {
        let mut buckets = TimeBuckets::default();
        assert!(buckets.is_empty());
        assert!(buckets.set_keys().is_empty());

        buckets.set(BucketKey::MeNightPic, Some(2.5));
        buckets.set(BucketKey::Simulator, Some(0.0));

        assert!(!buckets.is_empty());
        assert_eq!(buckets.set_keys(), vec![BucketKey::MeNightPic, BucketKey::Simulator]);
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(BucketKey::ALL.len(), 27);
        assert_eq!(BucketKey::PRIMARY.len(), 12);
        assert_eq!(BucketKey::CROSS_COUNTRY.len(), 6);
        assert_eq!(BucketKey::PIC_PRIMARY.len(), 4);
        assert_eq!(BucketKey::DUAL_PRIMARY.len(), 4);
    }

    #[test]
    fn test_absent_buckets_are_omitted_from_json() {
        let mut buckets = TimeBuckets::default();
        buckets.se_day_pic = Some(1.5);
        buckets.day_takeoffs_landings = Some(0.0);

        let json = serde_json::to_value(&buckets).unwrap();
        let object = json.as_object().unwrap();

        // Present slots keep their camelCase names, including explicit zero
        assert_eq!(object.len(), 2);
        assert_eq!(object["seDayPic"], 1.5);
        assert_eq!(object["dayTakeoffsLandings"], 0.0);
    }
}
