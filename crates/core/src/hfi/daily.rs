//! Station dailies: FWI chain plus FBP prediction for each day
//!
//! A station's days must be run in order because each day's moisture codes
//! seed the next. Independent stations are evaluated in parallel.

use crate::advisory::seasonal_grass_cure;
use crate::config::AdvisoryConfig;
use crate::core_types::station::{StationDaily, WeatherStation};
use crate::core_types::weather::{MoistureCodes, WeatherObservation};
use crate::error::Result;
use crate::fbp::{foliar_moisture_for_date, predict_with_wind_limit, FbpInputs};
use crate::fwi::FwiCalculator;
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// One day's observation for a station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedObservation {
    pub date: NaiveDate,
    pub observation: WeatherObservation,
    /// Observed grass curing (%), overriding configured and seasonal values
    #[serde(default)]
    pub grass_cure: Option<f64>,
    /// Danger class reported by the weather source
    #[serde(default)]
    pub danger_class: Option<u8>,
}

/// A station with the moisture codes it starts from and its observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSeries {
    pub station: WeatherStation,
    #[serde(default)]
    pub start_codes: MoistureCodes,
    pub observations: Vec<DatedObservation>,
}

/// Run one station's days in date order
///
/// Grass curing comes from the observation when present, then the
/// station's configuration. The seasonal default by date is used only when
/// [`AdvisoryConfig::seasonal_grass_cure`] is set; otherwise a grass station
/// with no curing gets an invalid prediction and no intensity group.
///
/// # Errors
/// Propagates [`crate::error::FireDangerError::InvalidCrownFuelLoad`] from
/// the station configuration
pub fn evaluate_station(
    series: &StationSeries,
    config: &AdvisoryConfig,
) -> Result<Vec<StationDaily>> {
    let station = &series.station;
    let fuel = station.fuel_type();
    let mut observations = series.observations.clone();
    observations.sort_by_key(|o| o.date);

    let mut calculator = FwiCalculator::with_codes(station.latitude, series.start_codes);
    let mut dailies = Vec::with_capacity(observations.len());

    for dated in &observations {
        let day = calculator.advance(&dated.observation, dated.date.month());

        let fmc = foliar_moisture_for_date(
            station.latitude,
            station.longitude,
            station.elevation,
            dated.date,
        );
        let mut conditions = station.fbp.fuel_conditions(fmc)?;
        let seasonal = config.seasonal_grass_cure && fuel.is_grass();
        let grass_cure = dated
            .grass_cure
            .or(conditions.grass_cure)
            .or_else(|| seasonal.then(|| seasonal_grass_cure(dated.date)));
        conditions.grass_cure = grass_cure;

        let inputs = FbpInputs::new(
            fuel,
            day.codes.ffmc,
            day.indices.bui,
            *dated.observation.wind_speed,
            conditions,
        );
        let prediction = predict_with_wind_limit(&inputs, config.max_wind_speed);

        dailies.push(StationDaily {
            code: station.code,
            date: dated.date,
            observation: dated.observation,
            codes: day.codes,
            indices: day.indices,
            danger_class: dated.danger_class,
            grass_cure,
            prediction: Some(prediction),
        });
    }

    Ok(dailies)
}

/// Evaluate many stations in parallel
///
/// # Errors
/// The first station configuration error encountered
pub fn evaluate_stations(
    series: &[StationSeries],
    config: &AdvisoryConfig,
) -> Result<Vec<StationDaily>> {
    let per_station: Vec<Vec<StationDaily>> = series
        .par_iter()
        .map(|s| {
            evaluate_station(s, config).inspect_err(|e| {
                error!(station = s.station.code, error = %e, "Station evaluation failed");
            })
        })
        .collect::<Result<_>>()?;

    let dailies: Vec<StationDaily> = per_station.into_iter().flatten().collect();
    info!(stations = series.len(), dailies = dailies.len(), "Stations evaluated");
    Ok(dailies)
}
