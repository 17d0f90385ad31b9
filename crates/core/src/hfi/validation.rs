//! Station daily completeness and prep window normalisation

use crate::config::AdvisoryConfig;
use crate::core_types::station::StationDaily;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A station daily tagged with whether all required fields are present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedStationDaily {
    pub daily: StationDaily,
    pub valid: bool,
}

/// Whether a daily carries every value the HFI calculator needs
///
/// Temperature, RH, wind speed, precipitation, ISI, BUI and FWI must be
/// finite numbers, and the day must have a prediction with a finite ROS and
/// HFI and a defined intensity group.
pub fn is_complete(daily: &StationDaily) -> bool {
    let indices = &daily.indices;
    let indices_ok = indices.isi.is_finite() && indices.bui.is_finite() && indices.fwi.is_finite();
    let prediction_ok = daily.prediction.as_ref().is_some_and(|p| {
        p.ros.is_finite() && p.hfi.is_finite() && p.intensity_group.is_some()
    });
    daily.observation.is_finite() && indices_ok && prediction_ok
}

/// Tag a daily with its completeness
pub fn validate_station_daily(daily: StationDaily) -> ValidatedStationDaily {
    let valid = is_complete(&daily);
    ValidatedStationDaily { daily, valid }
}

/// Inclusive range of prep days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Number of prep days, both ends included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date in the range, in order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.num_days().max(0) as u64).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
    }
}

/// Normalise a requested prep window
///
/// A missing start is `today`; a missing end gives the configured default
/// window length. Windows longer than the configured maximum are cut short
/// and an end before the start collapses to a single day.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    config: &AdvisoryConfig,
) -> DateRange {
    let start = start.unwrap_or(today);
    let span = |days: u32| start.checked_add_days(Days::new(u64::from(days.saturating_sub(1))));

    let end = end
        .or_else(|| span(config.default_prep_days))
        .unwrap_or(start);
    let end = match span(config.max_prep_days) {
        Some(latest) if end > latest => latest,
        _ => end,
    };
    let end = end.max(start);
    DateRange { start, end }
}
