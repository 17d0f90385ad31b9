//! Weather stations, their daily results, and the planning hierarchy
//!
//! Every station belongs to exactly one planning area and every planning
//! area to exactly one fire centre.

use crate::config::StationConfig;
use crate::core_types::fuel::FuelType;
use crate::core_types::weather::{FireWeatherIndices, MoistureCodes, WeatherObservation};
use crate::error::{FireDangerError, Result};
use crate::fbp::FireBehaviourPrediction;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A fire weather station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStation {
    pub code: u32,
    pub name: String,
    /// Degrees north (negative south)
    pub latitude: f64,
    /// Degrees east (negative west)
    pub longitude: f64,
    /// Metres above sea level
    pub elevation: f64,
    /// Fuel type and stand overrides used for fire behaviour
    pub fbp: StationConfig,
}

impl WeatherStation {
    pub fn fuel_type(&self) -> FuelType {
        self.fbp.fuel_type
    }
}

/// Everything computed for one station on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDaily {
    pub code: u32,
    pub date: NaiveDate,
    pub observation: WeatherObservation,
    pub codes: MoistureCodes,
    pub indices: FireWeatherIndices,
    /// Danger class 1-5 as reported by the weather source
    pub danger_class: Option<u8>,
    /// Grass curing (%) used for the prediction, if any
    pub grass_cure: Option<f64>,
    pub prediction: Option<FireBehaviourPrediction>,
}

impl StationDaily {
    /// Intensity group of the day's prediction
    pub fn intensity_group(&self) -> Option<u8> {
        self.prediction.as_ref().and_then(|p| p.intensity_group)
    }
}

/// A group of stations whose results are aggregated together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningArea {
    pub id: u32,
    pub name: String,
    pub station_codes: Vec<u32>,
}

/// A fire centre and its planning areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireCentre {
    pub id: u32,
    pub name: String,
    pub planning_areas: Vec<PlanningArea>,
}

impl FireCentre {
    /// Station code to owning planning area id
    ///
    /// # Errors
    /// [`FireDangerError::StationInMultipleAreas`] when a station is listed
    /// under two planning areas
    pub fn station_areas(&self) -> Result<FxHashMap<u32, u32>> {
        let mut owners = FxHashMap::default();
        for area in &self.planning_areas {
            for &code in &area.station_codes {
                if let Some(previous) = owners.insert(code, area.id) {
                    if previous != area.id {
                        return Err(FireDangerError::StationInMultipleAreas(code));
                    }
                }
            }
        }
        Ok(owners)
    }

    /// Check that no station belongs to more than one planning area
    ///
    /// # Errors
    /// [`FireDangerError::StationInMultipleAreas`] for the first shared station
    pub fn validate(&self) -> Result<()> {
        self.station_areas().map(|_| ())
    }

    /// Planning area owning `station_code`
    ///
    /// # Errors
    /// [`FireDangerError::UnassignedStation`] when no area lists the station
    pub fn planning_area_of(&self, station_code: u32) -> Result<&PlanningArea> {
        self.planning_areas
            .iter()
            .find(|area| area.station_codes.contains(&station_code))
            .ok_or(FireDangerError::UnassignedStation(station_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre() -> FireCentre {
        FireCentre {
            id: 1,
            name: "Kamloops".to_string(),
            planning_areas: vec![
                PlanningArea {
                    id: 10,
                    name: "Kamloops (K2)".to_string(),
                    station_codes: vec![322, 346],
                },
                PlanningArea {
                    id: 11,
                    name: "Vernon (K4)".to_string(),
                    station_codes: vec![388],
                },
            ],
        }
    }

    #[test]
    fn test_planning_area_lookup() {
        let centre = centre();
        assert_eq!(centre.planning_area_of(388).unwrap().id, 11);
        assert_eq!(
            centre.planning_area_of(999),
            Err(FireDangerError::UnassignedStation(999))
        );
        assert!(centre.validate().is_ok());
    }

    #[test]
    fn test_station_in_two_areas_is_rejected() {
        let mut centre = centre();
        centre.planning_areas[1].station_codes.push(322);
        assert_eq!(centre.validate(), Err(FireDangerError::StationInMultipleAreas(322)));
    }
}
