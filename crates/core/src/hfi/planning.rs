//! Multi-day results per planning area
//!
//! For each planning area and each day of the prep window the selected
//! stations' dailies are validated and reduced to a mean intensity group,
//! which together with the day's fire start range gives a prep level. The
//! window is then summarised by its highest MIG and mean prep level.

use crate::config::{AdvisoryConfig, MeanIntensityPolicy};
use crate::core_types::station::{FireCentre, PlanningArea, StationDaily};
use crate::error::{FireDangerError, Result};
use crate::hfi::aggregation::{
    highest_daily_intensity_group, mean_intensity_group, mean_prep_level,
    prep_day_mean_intensity_group, prep_level,
};
use crate::hfi::fire_starts::{pad_fire_starts, FireStartRange};
use crate::hfi::validation::{validate_station_daily, DateRange, ValidatedStationDaily};
use chrono::NaiveDate;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// One prep day of one planning area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    /// Dailies of the selected stations on this date
    pub dailies: Vec<ValidatedStationDaily>,
    pub fire_starts: FireStartRange,
    pub mean_intensity_group: Option<f64>,
    pub prep_level: Option<u8>,
}

/// Prep window summary of one planning area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningAreaResult {
    pub planning_area_id: u32,
    /// True when every selected daily across the whole window is complete
    pub all_dailies_valid: bool,
    pub highest_daily_intensity_group: Option<f64>,
    pub mean_prep_level: Option<u8>,
    pub daily_results: Vec<DailyResult>,
}

/// Build the prep window results of every planning area in a fire centre
///
/// * `dailies` - Station dailies; dates outside `date_range` are ignored
/// * `selected_codes` - Stations that take part in the aggregates
/// * `fire_starts` - Fire start ranges per planning area id, one per prep
///   day; missing days use the lowest range
///
/// # Errors
/// - [`FireDangerError::InvalidPrepWindow`] when `date_range` is empty or
///   longer than `config.max_prep_days`
/// - [`FireDangerError::StationInMultipleAreas`] from the fire centre
/// - [`FireDangerError::UnassignedStation`] for a daily whose station has no
///   planning area
pub fn calculate_planning_area_results(
    fire_centre: &FireCentre,
    dailies: &[StationDaily],
    selected_codes: &FxHashSet<u32>,
    fire_starts: &FxHashMap<u32, Vec<FireStartRange>>,
    date_range: &DateRange,
    config: &AdvisoryConfig,
) -> Result<Vec<PlanningAreaResult>> {
    let num_days = date_range.num_days();
    if !config.accepts_prep_days(num_days) {
        return Err(FireDangerError::InvalidPrepWindow(num_days));
    }

    let station_areas = fire_centre.station_areas()?;
    let mut by_area: FxHashMap<u32, Vec<&StationDaily>> = FxHashMap::default();
    for daily in dailies {
        let Some(&area_id) = station_areas.get(&daily.code) else {
            error!(
                station = daily.code,
                centre = fire_centre.id,
                "Daily from station outside the fire centre"
            );
            return Err(FireDangerError::UnassignedStation(daily.code));
        };
        by_area.entry(area_id).or_default().push(daily);
    }

    let results: Vec<PlanningAreaResult> = fire_centre
        .planning_areas
        .par_iter()
        .map(|area| {
            let area_dailies = by_area.get(&area.id).map_or(&[][..], Vec::as_slice);
            let starts = fire_starts.get(&area.id).map_or(&[][..], Vec::as_slice);
            area_result(area, area_dailies, selected_codes, starts, date_range, config)
        })
        .collect();

    let valid_areas = results.iter().filter(|r| r.all_dailies_valid).count();
    info!(
        centre = fire_centre.id,
        areas = results.len(),
        valid_areas,
        days = num_days,
        "Planning area results calculated"
    );
    Ok(results)
}

fn area_result(
    area: &PlanningArea,
    dailies: &[&StationDaily],
    selected_codes: &FxHashSet<u32>,
    fire_starts: &[FireStartRange],
    date_range: &DateRange,
    config: &AdvisoryConfig,
) -> PlanningAreaResult {
    let selected: FxHashSet<u32> = area
        .station_codes
        .iter()
        .copied()
        .filter(|code| selected_codes.contains(code))
        .collect();

    let dates: Vec<NaiveDate> = date_range.dates().collect();
    let fire_starts = pad_fire_starts(fire_starts, dates.len());

    let daily_results: Vec<DailyResult> = dates
        .iter()
        .zip(fire_starts)
        .map(|(&date, fire_starts)| {
            let day: Vec<&StationDaily> = dailies
                .iter()
                .copied()
                .filter(|d| d.date == date && selected.contains(&d.code))
                .collect();

            let mean_intensity_group = match config.mean_intensity_policy {
                MeanIntensityPolicy::DefinedStations => {
                    mean_intensity_group(day.iter().copied(), &selected)
                }
                MeanIntensityPolicy::AllStationsRequired => {
                    prep_day_mean_intensity_group(day.iter().copied(), &selected)
                }
            };
            let prep_level = prep_level(mean_intensity_group, fire_starts);

            DailyResult {
                date,
                dailies: day.into_iter().cloned().map(validate_station_daily).collect(),
                fire_starts,
                mean_intensity_group,
                prep_level,
            }
        })
        .collect();

    let all_dailies_valid = daily_results
        .iter()
        .flat_map(|day| &day.dailies)
        .all(|d| d.valid);
    let migs: Vec<Option<f64>> = daily_results.iter().map(|d| d.mean_intensity_group).collect();
    let levels: Vec<Option<u8>> = daily_results.iter().map(|d| d.prep_level).collect();
    let highest = highest_daily_intensity_group(&migs);
    let mean_level = mean_prep_level(&levels, daily_results.len());

    debug!(
        area = area.id,
        all_dailies_valid,
        highest_mig = ?highest,
        mean_prep_level = ?mean_level,
        "Planning area summarised"
    );

    PlanningAreaResult {
        planning_area_id: area.id,
        all_dailies_valid,
        highest_daily_intensity_group: highest,
        mean_prep_level: mean_level,
        daily_results,
    }
}
