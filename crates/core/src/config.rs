//! Deployment configuration for the advisory layer and per-station FBP inputs
//!
//! Library callers build these in code; the demo binary loads them from
//! JSON. Every field has a default, so a partial JSON document is valid.

use crate::core_types::fuel::FuelType;
use crate::error::{FireDangerError, Result};
use crate::fbp::{FuelConditions, MAX_VALID_WIND_SPEED};
use serde::{Deserialize, Serialize};

/// How a prep day's mean intensity group treats stations without a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanIntensityPolicy {
    /// Average whatever selected stations have a defined intensity group,
    /// rounded to one decimal
    #[default]
    DefinedStations,
    /// Undefined unless every selected station reports a defined intensity
    /// group; the mean rounds down below a .8 fraction and up from it
    AllStationsRequired,
}

/// Thresholds and bounds for HFI aggregation and fire zone advisories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// HFI at which an area counts towards an advisory (kW/m)
    pub advisory_hfi: f64,

    /// HFI at which an area counts towards a warning (kW/m)
    pub warning_hfi: f64,

    /// Percentage of a zone's combustible area that must exceed a threshold
    /// before the zone is flagged (0-100)
    pub zone_threshold_percent: f64,

    /// Wind speeds above this flag a prediction invalid (km/h)
    pub max_wind_speed: f64,

    /// HFI above which an hour is a critical hour (kW/m)
    pub critical_hours_hfi: f64,

    /// Fill in missing grass curing for grass fuels from the seasonal
    /// default by date. Off for HFI planning, where a grass station without
    /// observed curing is reported invalid.
    pub seasonal_grass_cure: bool,

    /// Prep window length when the request gives no end date (days)
    pub default_prep_days: u32,

    /// Longest prep window accepted (days)
    pub max_prep_days: u32,

    pub mean_intensity_policy: MeanIntensityPolicy,
}

impl Default for AdvisoryConfig {
    /// Thresholds used by the BC fire behaviour advisory
    fn default() -> Self {
        Self {
            advisory_hfi: 4000.0,
            warning_hfi: 10_000.0,
            zone_threshold_percent: 20.0,
            max_wind_speed: MAX_VALID_WIND_SPEED,
            critical_hours_hfi: 4000.0,
            seasonal_grass_cure: false,
            default_prep_days: 5,
            max_prep_days: 7,
            mean_intensity_policy: MeanIntensityPolicy::default(),
        }
    }
}

impl AdvisoryConfig {
    /// Whether `days` is an acceptable prep window length
    pub fn accepts_prep_days(&self, days: i64) -> bool {
        (1..=i64::from(self.max_prep_days)).contains(&days)
    }
}

/// Fuel type and stand overrides for one weather station
///
/// Unset overrides fall back to the fuel type's standard values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub fuel_type: FuelType,
    #[serde(default)]
    pub percent_conifer: Option<f64>,
    #[serde(default)]
    pub percent_dead_fir: Option<f64>,
    #[serde(default)]
    pub crown_base_height: Option<f64>,
    #[serde(default)]
    pub crown_fuel_load: Option<f64>,
    /// Fixed grass curing (%), used when the observation has none
    #[serde(default)]
    pub grass_cure: Option<f64>,
}

impl StationConfig {
    /// Standard stand conditions for `fuel_type`
    pub fn new(fuel_type: FuelType) -> Self {
        Self {
            fuel_type,
            percent_conifer: None,
            percent_dead_fir: None,
            crown_base_height: None,
            crown_fuel_load: None,
            grass_cure: None,
        }
    }

    /// Resolve the overrides into [`FuelConditions`]
    ///
    /// # Errors
    /// [`FireDangerError::InvalidCrownFuelLoad`] when a crowning fuel type is
    /// given a crown fuel load that is negative or not a number
    pub fn fuel_conditions(&self, foliar_moisture: f64) -> Result<FuelConditions> {
        let mut conditions = FuelConditions::defaults_for(self.fuel_type, foliar_moisture);

        if let Some(cfl) = self.crown_fuel_load {
            if self.fuel_type.has_crown() && !(cfl.is_finite() && cfl >= 0.0) {
                return Err(FireDangerError::InvalidCrownFuelLoad {
                    fuel: self.fuel_type,
                    value: cfl,
                });
            }
            conditions.crown_fuel_load = cfl;
        }
        if let Some(pc) = self.percent_conifer {
            conditions.percent_conifer = pc;
        }
        if let Some(pdf) = self.percent_dead_fir {
            conditions.percent_dead_fir = pdf;
        }
        if let Some(cbh) = self.crown_base_height {
            conditions.crown_base_height = cbh;
        }
        conditions.grass_cure = self.grass_cure;
        Ok(conditions)
    }
}
