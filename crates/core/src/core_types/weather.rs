//! Daily fire weather inputs and FWI System outputs
//!
//! A [`WeatherObservation`] is the noon (LST) observation the FWI System is
//! defined on. [`MoistureCodes`] are the three fuel moisture codes carried
//! from one day to the next, and [`FireWeatherIndices`] are the derived
//! fire behaviour indices.

use crate::core_types::units::{Celsius, KilometersPerHour, Millimeters, Percent};
use serde::{Deserialize, Serialize};

/// One station's noon weather observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°C)
    pub temperature: Celsius,
    /// Relative humidity (%)
    pub relative_humidity: Percent,
    /// 10 m open wind speed (km/h)
    pub wind_speed: KilometersPerHour,
    /// 24-hour accumulated precipitation (mm)
    pub precipitation: Millimeters,
}

impl WeatherObservation {
    /// Build an observation from raw values
    pub fn new(temperature: f64, relative_humidity: f64, wind_speed: f64, precipitation: f64) -> Self {
        Self {
            temperature: Celsius::new(temperature),
            relative_humidity: Percent::new(relative_humidity),
            wind_speed: KilometersPerHour::new(wind_speed),
            precipitation: Millimeters::new(precipitation),
        }
    }

    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.temperature.is_finite()
            && self.relative_humidity.is_finite()
            && self.wind_speed.is_finite()
            && self.precipitation.is_finite()
    }
}

/// The three FWI fuel moisture codes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureCodes {
    /// Fine Fuel Moisture Code, bounded to [0, 101]
    pub ffmc: f64,
    /// Duff Moisture Code
    pub dmc: f64,
    /// Drought Code
    pub dc: f64,
}

impl MoistureCodes {
    /// Standard spring start-up values (FFMC 85, DMC 6, DC 15)
    pub const STARTUP: MoistureCodes = MoistureCodes {
        ffmc: 85.0,
        dmc: 6.0,
        dc: 15.0,
    };

    pub fn new(ffmc: f64, dmc: f64, dc: f64) -> Self {
        Self { ffmc, dmc, dc }
    }
}

impl Default for MoistureCodes {
    fn default() -> Self {
        Self::STARTUP
    }
}

/// FWI System fire behaviour indices for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireWeatherIndices {
    /// Initial Spread Index
    pub isi: f64,
    /// Buildup Index
    pub bui: f64,
    /// Fire Weather Index
    pub fwi: f64,
}

impl FireWeatherIndices {
    /// Daily Severity Rating derived from the FWI
    pub fn dsr(&self) -> f64 {
        crate::fwi::daily_severity_rating(self.fwi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_codes_are_the_default() {
        let codes = MoistureCodes::default();
        assert_eq!(codes.ffmc, 85.0);
        assert_eq!(codes.dmc, 6.0);
        assert_eq!(codes.dc, 15.0);
    }

    #[test]
    fn test_observation_finiteness() {
        assert!(WeatherObservation::new(20.0, 40.0, 15.0, 0.0).is_finite());
        assert!(!WeatherObservation::new(20.0, f64::NAN, 15.0, 0.0).is_finite());
    }

    #[test]
    fn test_observation_deserializes_from_plain_numbers() {
        let json = r#"{"temperature":17.0,"relative_humidity":42.0,"wind_speed":25.0,"precipitation":0.0}"#;
        let obs: WeatherObservation = serde_json::from_str(json).unwrap();
        assert_eq!(*obs.wind_speed, 25.0);
        assert_eq!(*obs.relative_humidity, 42.0);
    }
}
