//! Fire zone advisories
//!
//! A fire zone is flagged when enough of its combustible area is forecast
//! to burn above the advisory or warning HFI thresholds. Critical hours are
//! summarised per fuel type so the advisory can say when burning conditions
//! peak.

use crate::config::AdvisoryConfig;
use crate::core_types::fuel::FuelType;
use crate::error::Result;
use crate::fbp::{critical_hours, representative_critical_hours, CriticalHours, HourlyHfi};
use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Advisory level of a fire zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    #[default]
    None,
    Advisory,
    Warning,
}

/// Area of one fuel type in a zone, split by HFI class (ha)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelHfiStats {
    pub fuel_type: FuelType,
    /// Total combustible area of this fuel type
    pub combustible_area: f64,
    /// Area with HFI in `[advisory_hfi, warning_hfi)`
    pub advisory_area: f64,
    /// Area with HFI at or above `warning_hfi`
    pub warning_area: f64,
}

impl FuelHfiStats {
    /// Classify a grid of HFI cells of one fuel type
    ///
    /// Non-finite HFI values count as combustible area that is not elevated.
    pub fn from_cells(fuel_type: FuelType, hfi_cells: &[f64], cell_area: f64, config: &AdvisoryConfig) -> Self {
        let (advisory, warning) = hfi_cells.iter().fold((0usize, 0usize), |(a, w), &hfi| {
            if hfi >= config.warning_hfi {
                (a, w + 1)
            } else if hfi >= config.advisory_hfi {
                (a + 1, w)
            } else {
                (a, w)
            }
        });
        Self {
            fuel_type,
            combustible_area: hfi_cells.len() as f64 * cell_area,
            advisory_area: advisory as f64 * cell_area,
            warning_area: warning as f64 * cell_area,
        }
    }
}

/// Percentages of combustible area in the advisory and warning classes
///
/// Both are 0 for a zone with no combustible area.
pub fn elevated_percentages(fuel_stats: &[FuelHfiStats]) -> (f64, f64) {
    let combustible: f64 = fuel_stats.iter().map(|s| s.combustible_area).sum();
    if combustible <= 0.0 {
        return (0.0, 0.0);
    }
    let advisory: f64 = fuel_stats.iter().map(|s| s.advisory_area).sum();
    let warning: f64 = fuel_stats.iter().map(|s| s.warning_area).sum();
    (advisory / combustible * 100.0, warning / combustible * 100.0)
}

/// Classify a zone from its per-fuel HFI area stats
///
/// Warning when the warning percentage exceeds `advisory_threshold`;
/// otherwise advisory when the advisory and warning percentages together
/// exceed it.
pub fn zone_status(fuel_stats: &[FuelHfiStats], advisory_threshold: f64) -> ZoneStatus {
    let (advisory, warning) = elevated_percentages(fuel_stats);
    if warning > advisory_threshold {
        ZoneStatus::Warning
    } else if advisory + warning > advisory_threshold {
        ZoneStatus::Advisory
    } else {
        ZoneStatus::None
    }
}

/// Status and timing of one fire zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAssessment {
    pub status: ZoneStatus,
    pub advisory_percent: f64,
    pub warning_percent: f64,
    /// Representative critical hours per fuel type with any critical hours
    pub critical_hours: FxHashMap<FuelType, CriticalHours>,
}

/// Critical hours of every hourly HFI series, grouped by fuel type
///
/// Each series (one per station or grid cell) is thresholded at
/// `config.critical_hours_hfi`; series that never exceed it contribute
/// nothing, so a fuel type can map to an empty list.
///
/// # Errors
/// [`crate::error::FireDangerError::InvalidHour`] for an hour outside 0..24
pub fn critical_hours_by_fuel(
    hourly_by_fuel: &FxHashMap<FuelType, Vec<Vec<HourlyHfi>>>,
    config: &AdvisoryConfig,
) -> Result<FxHashMap<FuelType, Vec<CriticalHours>>> {
    hourly_by_fuel
        .iter()
        .map(|(&fuel, series)| {
            let mut windows = Vec::with_capacity(series.len());
            for hourly in series {
                if let Some(window) = critical_hours(hourly, config.critical_hours_hfi)? {
                    windows.push(window);
                }
            }
            Ok((fuel, windows))
        })
        .collect()
}

/// Assess a zone: status from area stats, critical hours summarised per fuel
pub fn assess_zone(
    fuel_stats: &[FuelHfiStats],
    critical_hours_by_fuel: &FxHashMap<FuelType, Vec<CriticalHours>>,
    config: &AdvisoryConfig,
) -> ZoneAssessment {
    let (advisory_percent, warning_percent) = elevated_percentages(fuel_stats);
    let status = zone_status(fuel_stats, config.zone_threshold_percent);
    let critical_hours: FxHashMap<FuelType, CriticalHours> = critical_hours_by_fuel
        .iter()
        .filter_map(|(&fuel, hours)| representative_critical_hours(hours).map(|h| (fuel, h)))
        .collect();

    debug!(?status, advisory_percent, warning_percent, fuels = critical_hours.len(), "Zone assessed");

    ZoneAssessment {
        status,
        advisory_percent,
        warning_percent,
        critical_hours,
    }
}

/// Grass curing (%) assumed for a date when no observation is available
///
/// 60 % from 1 November to 15 July, then 70 % to 30 July, 80 % to
/// 15 August and 90 % to 31 October.
pub fn seasonal_grass_cure(date: NaiveDate) -> f64 {
    match (date.month(), date.day()) {
        (7, 16..=30) => 70.0,
        (7, 31) | (8, 1..=15) => 80.0,
        (8, _) | (9 | 10, _) => 90.0,
        _ => 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(advisory: f64, warning: f64) -> FuelHfiStats {
        FuelHfiStats {
            fuel_type: FuelType::C3,
            combustible_area: 100.0,
            advisory_area: advisory,
            warning_area: warning,
        }
    }

    #[test]
    fn test_zone_status_thresholds() {
        assert_eq!(zone_status(&[stats(10.0, 5.0)], 20.0), ZoneStatus::None);
        assert_eq!(zone_status(&[stats(25.0, 0.0)], 20.0), ZoneStatus::Advisory);
        // Neither alone exceeds 20 %, together they do
        assert_eq!(zone_status(&[stats(15.0, 10.0)], 20.0), ZoneStatus::Advisory);
        assert_eq!(zone_status(&[stats(0.0, 21.0)], 20.0), ZoneStatus::Warning);
    }

    #[test]
    fn test_exactly_at_threshold_is_not_flagged() {
        assert_eq!(zone_status(&[stats(20.0, 0.0)], 20.0), ZoneStatus::None);
        assert_eq!(zone_status(&[stats(0.0, 20.0)], 20.0), ZoneStatus::None);
        assert_eq!(zone_status(&[stats(0.5, 20.0)], 20.0), ZoneStatus::Advisory);
    }

    #[test]
    fn test_empty_zone_has_no_status() {
        assert_eq!(zone_status(&[], 20.0), ZoneStatus::None);
        assert_eq!(elevated_percentages(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_cells_are_classified_by_config() {
        let config = AdvisoryConfig::default();
        let cells = [100.0, 3999.9, 4000.0, 9999.0, 10_000.0, 25_000.0, f64::NAN, 0.0];
        let s = FuelHfiStats::from_cells(FuelType::C2, &cells, 0.25, &config);
        assert_eq!(s.combustible_area, 2.0);
        assert_eq!(s.advisory_area, 0.5);
        assert_eq!(s.warning_area, 0.5);
    }

    #[test]
    fn test_assess_zone_summarises_critical_hours() {
        let mut hours = FxHashMap::default();
        hours.insert(
            FuelType::C3,
            vec![CriticalHours { start: 13, end: 18 }, CriticalHours { start: 12, end: 17 }],
        );
        hours.insert(FuelType::O1B, Vec::new());
        let assessment = assess_zone(&[stats(30.0, 0.0)], &hours, &AdvisoryConfig::default());
        assert_eq!(assessment.status, ZoneStatus::Advisory);
        assert_eq!(assessment.critical_hours.len(), 1);
        assert_eq!(assessment.critical_hours[&FuelType::C3], CriticalHours { start: 12, end: 18 });
    }

    fn hourly(peak_start: u32, peak_end: u32, peak: f64) -> Vec<HourlyHfi> {
        (0..24)
            .map(|hour| HourlyHfi {
                hour,
                hfi: if (peak_start..=peak_end).contains(&hour) { peak } else { 500.0 },
            })
            .collect()
    }

    #[test]
    fn test_critical_hours_use_configured_threshold() {
        let mut by_fuel = FxHashMap::default();
        by_fuel.insert(FuelType::C3, vec![hourly(12, 17, 6000.0), hourly(14, 19, 3000.0)]);

        let config = AdvisoryConfig::default();
        let hours = critical_hours_by_fuel(&by_fuel, &config).unwrap();
        assert_eq!(hours[&FuelType::C3], vec![CriticalHours { start: 12, end: 17 }]);

        let lower = AdvisoryConfig {
            critical_hours_hfi: 2000.0,
            ..AdvisoryConfig::default()
        };
        let hours = critical_hours_by_fuel(&by_fuel, &lower).unwrap();
        assert_eq!(
            hours[&FuelType::C3],
            vec![CriticalHours { start: 12, end: 17 }, CriticalHours { start: 14, end: 19 }]
        );
    }

    #[test]
    fn test_critical_hours_reject_bad_hour() {
        let mut by_fuel = FxHashMap::default();
        by_fuel.insert(FuelType::C2, vec![vec![HourlyHfi { hour: 30, hfi: 9000.0 }]]);
        assert_eq!(
            critical_hours_by_fuel(&by_fuel, &AdvisoryConfig::default()),
            Err(crate::error::FireDangerError::InvalidHour(30))
        );
    }

    #[test]
    fn test_seasonal_grass_cure() {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        assert_eq!(seasonal_grass_cure(date(3, 1)), 60.0);
        assert_eq!(seasonal_grass_cure(date(7, 15)), 60.0);
        assert_eq!(seasonal_grass_cure(date(7, 16)), 70.0);
        assert_eq!(seasonal_grass_cure(date(7, 31)), 80.0);
        assert_eq!(seasonal_grass_cure(date(8, 15)), 80.0);
        assert_eq!(seasonal_grass_cure(date(8, 16)), 90.0);
        assert_eq!(seasonal_grass_cure(date(10, 31)), 90.0);
        assert_eq!(seasonal_grass_cure(date(11, 1)), 60.0);
    }
}
