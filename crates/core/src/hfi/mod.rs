//! HFI calculator: station dailies rolled up into planning area readiness
//!
//! Stations are run through the FWI and FBP chains ([`evaluate_stations`]),
//! their intensity groups averaged per planning area and prep day, and the
//! mean intensity group combined with the forecast fire starts into a
//! preparedness level ([`calculate_planning_area_results`]).

pub(crate) mod aggregation;
pub(crate) mod daily;
pub(crate) mod fire_starts;
pub(crate) mod planning;
pub(crate) mod validation;

pub use aggregation::{
    highest_daily_intensity_group, mean_intensity_group, mean_prep_level,
    prep_day_mean_intensity_group, prep_level,
};
pub use daily::{evaluate_station, evaluate_stations, DatedObservation, StationSeries};
pub use fire_starts::{pad_fire_starts, FireStartRange};
pub use planning::{calculate_planning_area_results, DailyResult, PlanningAreaResult};
pub use validation::{
    is_complete, validate_date_range, validate_station_daily, DateRange, ValidatedStationDaily,
};
