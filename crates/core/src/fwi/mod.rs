//! Canadian Forest Fire Weather Index (FWI) System
//!
//! Three moisture codes are carried from day to day; three indices are
//! derived from them each day:
//!
//! ```text
//! weather ─┬─> FFMC ──┬─> ISI ──┐
//!          ├─> DMC ─┐ │         ├─> FWI ─> DSR
//!          └─> DC ──┴─┴─> BUI ──┘
//! ```
//!
//! Every function here is pure. A station's days must be evaluated in order
//! because each day's codes feed the next; [`FwiCalculator`] carries that
//! state for callers that process a station's record sequentially.

pub(crate) mod drought_code;
pub(crate) mod duff_moisture;
pub(crate) mod fine_fuel_moisture;
pub(crate) mod indices;

pub use drought_code::update_dc;
pub use duff_moisture::update_dmc;
pub use fine_fuel_moisture::{update_ffmc, FFMC_MAX};
pub use indices::{
    buildup_index, daily_severity_rating, fire_weather_index, initial_spread_index, IsiMode,
};

use crate::core_types::weather::{FireWeatherIndices, MoistureCodes, WeatherObservation};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Advance all three moisture codes by one day
///
/// # Arguments
/// * `previous` - Yesterday's codes
/// * `observation` - Today's noon weather
/// * `latitude` - Station latitude, for the day length adjustments
/// * `month` - Month of the observation (1-12)
pub fn update_moisture_codes(
    previous: &MoistureCodes,
    observation: &WeatherObservation,
    latitude: f64,
    month: u32,
) -> MoistureCodes {
    let t = *observation.temperature;
    let rh = *observation.relative_humidity;
    let ws = *observation.wind_speed;
    let p = *observation.precipitation;

    MoistureCodes {
        ffmc: update_ffmc(previous.ffmc, t, rh, ws, p),
        dmc: update_dmc(previous.dmc, t, rh, p, latitude, month),
        dc: update_dc(previous.dc, t, p, latitude, month),
    }
}

/// Compose the daily indices from today's codes
///
/// `mode` selects the ISI wind function; FWI reporting always uses
/// [`IsiMode::Standard`].
pub fn calculate_indices(codes: &MoistureCodes, wind_speed: f64, mode: IsiMode) -> FireWeatherIndices {
    let isi = initial_spread_index(codes.ffmc, wind_speed, mode);
    let bui = buildup_index(codes.dmc, codes.dc);
    FireWeatherIndices {
        isi,
        bui,
        fwi: fire_weather_index(isi, bui),
    }
}

/// One day of FWI System output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FwiDay {
    pub codes: MoistureCodes,
    pub indices: FireWeatherIndices,
}

/// Sequential FWI calculator for a single station
///
/// Holds yesterday's codes and advances them one observation at a time.
///
/// # Example
/// ```
/// use fire_danger_core::core_types::WeatherObservation;
/// use fire_danger_core::fwi::FwiCalculator;
///
/// let mut calc = FwiCalculator::new(46.0);
/// let day = calc.advance(&WeatherObservation::new(17.0, 42.0, 25.0, 0.0), 4);
/// assert!((day.indices.fwi - 10.1).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FwiCalculator {
    latitude: f64,
    codes: MoistureCodes,
}

impl FwiCalculator {
    /// Start a new season from the standard start-up codes
    pub fn new(latitude: f64) -> Self {
        Self::with_codes(latitude, MoistureCodes::STARTUP)
    }

    /// Continue from known codes (e.g. yesterday's observed values)
    pub fn with_codes(latitude: f64, codes: MoistureCodes) -> Self {
        Self { latitude, codes }
    }

    /// Yesterday's codes as of the last call to [`advance`](Self::advance)
    pub fn codes(&self) -> MoistureCodes {
        self.codes
    }

    /// Apply one day's observation and return the day's codes and indices
    pub fn advance(&mut self, observation: &WeatherObservation, month: u32) -> FwiDay {
        let codes = update_moisture_codes(&self.codes, observation, self.latitude, month);
        let indices = calculate_indices(&codes, *observation.wind_speed, IsiMode::Standard);
        trace!(
            ffmc = codes.ffmc,
            dmc = codes.dmc,
            dc = codes.dc,
            isi = indices.isi,
            bui = indices.bui,
            fwi = indices.fwi,
            "advanced FWI day"
        );
        self.codes = codes;
        FwiDay { codes, indices }
    }
}
