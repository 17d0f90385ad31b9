//! Planning area aggregates: mean intensity group and preparedness level
//!
//! Undefined inputs are skipped, never counted as zero, and an aggregate
//! with nothing to aggregate is `None`. Intensity group 0 does not exist,
//! so `None` and a low mean stay distinguishable.

use crate::core_types::station::StationDaily;
use crate::hfi::fire_starts::FireStartRange;
use rustc_hash::FxHashSet;

/// Fraction of a mean intensity group at which the strict rule rounds up
const ROUND_UP_FRACTION: f64 = 0.8;

/// Mean intensity group of the selected stations
///
/// Averages the defined intensity groups of the dailies whose station is in
/// `selected_codes`, rounded half-up to one decimal. Stations without a
/// defined intensity group are left out of the average.
///
/// # Returns
/// `None` when no selected station has a defined intensity group
pub fn mean_intensity_group<'a>(
    dailies: impl IntoIterator<Item = &'a StationDaily>,
    selected_codes: &FxHashSet<u32>,
) -> Option<f64> {
    let (sum, count) = dailies
        .into_iter()
        .filter(|daily| selected_codes.contains(&daily.code))
        .filter_map(StationDaily::intensity_group)
        .fold((0u32, 0u32), |(sum, count), group| (sum + u32::from(group), count + 1));

    if count == 0 {
        return None;
    }
    let mean = f64::from(sum) / f64::from(count);
    Some((mean * 10.0).round() / 10.0)
}

/// Mean intensity group requiring every selected station to report
///
/// Undefined when any selected station is missing a daily or has no
/// defined intensity group. The mean rounds down unless its fraction
/// (to one decimal) is .8 or more.
pub fn prep_day_mean_intensity_group<'a>(
    dailies: impl IntoIterator<Item = &'a StationDaily>,
    selected_codes: &FxHashSet<u32>,
) -> Option<f64> {
    let mut reported = FxHashSet::default();
    let mut sum = 0u32;
    for daily in dailies.into_iter().filter(|d| selected_codes.contains(&d.code)) {
        sum += u32::from(daily.intensity_group()?);
        reported.insert(daily.code);
    }
    if reported.is_empty() || reported.len() != selected_codes.len() {
        return None;
    }

    let mean = f64::from(sum) / reported.len() as f64;
    let fraction = (mean.fract() * 10.0).round() / 10.0;
    if fraction < ROUND_UP_FRACTION {
        Some(mean.floor())
    } else {
        Some(mean.ceil())
    }
}

/// Preparedness level for a mean intensity group and fire start range
///
/// The MIG is rounded to a whole group, ties to even, before the lookup.
///
/// # Returns
/// `None` for an undefined MIG or one that rounds to 0
pub fn prep_level(mean_intensity_group: Option<f64>, fire_starts: FireStartRange) -> Option<u8> {
    let rounded = mean_intensity_group?.round_ties_even();
    if !(1.0..=5.0).contains(&rounded) {
        return None;
    }
    fire_starts.prep_level_for(rounded as u8)
}

/// Highest defined mean intensity group across prep days
pub fn highest_daily_intensity_group(mean_intensity_groups: &[Option<f64>]) -> Option<f64> {
    mean_intensity_groups
        .iter()
        .flatten()
        .copied()
        .filter(|mig| mig.is_finite())
        .max_by(f64::total_cmp)
}

/// Mean preparedness level over the prep window
///
/// Defined only when every one of the `num_prep_days` days has a prep level.
/// A mean exactly halfway between two levels rounds to the even one.
pub fn mean_prep_level(prep_levels: &[Option<u8>], num_prep_days: usize) -> Option<u8> {
    if prep_levels.is_empty() || prep_levels.len() != num_prep_days {
        return None;
    }
    let levels: Option<Vec<u8>> = prep_levels.iter().copied().collect();
    let levels = levels?;
    let sum: u32 = levels.iter().map(|&l| u32::from(l)).sum();
    let mean = f64::from(sum) / levels.len() as f64;
    Some(mean.round_ties_even() as u8)
}
