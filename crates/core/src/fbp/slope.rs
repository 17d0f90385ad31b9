//! Slope effect and net effective wind speed
//!
//! Slope is converted into an equivalent wind speed (WSE) blowing upslope,
//! then added to the actual wind as vectors. The resultant's magnitude (WSV)
//! drives ISI and the fire shape; its direction (RAZ) is the head fire
//! spread azimuth.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 39-50
//! - Wotton, B.M., Alexander, M.E., Taylor, S.W. (2009). Information Report
//!   GLC-X-10, Equations 39a-39c (capped slope factor), 41a/41b (high WSE branch)

use crate::core_types::fuel::{FuelType, SpreadConstants};
use crate::fbp::spread::{curing_factor, rsi_curve};
use crate::fbp::FuelConditions;
use crate::fwi::indices::fine_fuel_function;
use crate::fwi::{initial_spread_index, IsiMode};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Slopes steeper than this use the capped spread factor (%)
const MAX_EFFECTIVE_SLOPE: f64 = 70.0;

/// Spread factor at and beyond [`MAX_EFFECTIVE_SLOPE`]
const MAX_SLOPE_FACTOR: f64 = 10.0;

/// Upper limit of the slope equivalent wind speed (km/h)
const MAX_EQUIVALENT_WIND: f64 = 112.45;

/// Terrain at the fire's location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeConditions {
    /// Ground slope (%)
    pub slope_percent: f64,
    /// Direction the slope faces, degrees clockwise from north
    pub aspect: f64,
}

/// Combined wind and slope effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetEffectiveWind {
    /// Spread factor from slope alone
    pub slope_factor: f64,
    /// Slope equivalent wind speed (km/h)
    pub equivalent_wind_speed: f64,
    /// Net effective wind speed (km/h)
    pub speed: f64,
    /// Head fire spread azimuth, degrees clockwise from north
    pub spread_azimuth: f64,
}

/// Spread factor due to slope
///
/// SF = e^(3.533 × (GS/100)^1.2), capped at 10 from 70 % slope
///
/// # References
/// FCFDG (1992), Equation 39; Wotton et al. (2009), Equation 39b
pub fn slope_factor(slope_percent: f64) -> f64 {
    if slope_percent >= MAX_EFFECTIVE_SLOPE {
        MAX_SLOPE_FACTOR
    } else if slope_percent <= 0.0 {
        1.0
    } else {
        (3.533 * (slope_percent / 100.0).powf(1.2)).exp()
    }
}

/// ISI that would produce `rsf` on the curve `constants`
///
/// Inverts `a × (1 − e^(−b × ISI))^c0`, holding the argument of the
/// logarithm at 0.01 or above.
fn inverse_rsi(constants: &SpreadConstants, rsf: f64) -> f64 {
    let remainder = 1.0 - (rsf / constants.a).powf(1.0 / constants.c0);
    if remainder >= 0.01 {
        remainder.ln() / -constants.b
    } else {
        0.01f64.ln() / -constants.b
    }
}

/// Slope-adjusted ISI for one pure component fuel
fn component_isf(fuel: FuelType, zero_wind_isi: f64, sf: f64) -> f64 {
    match fuel.parameters().spread {
        Some(constants) => inverse_rsi(&constants, rsi_curve(&constants, zero_wind_isi) * sf),
        None => 0.0,
    }
}

/// ISI equivalent of the slope-enhanced zero-wind spread rate
///
/// # Arguments
/// * `fuel` - Fuel type
/// * `ffmc` - Fine Fuel Moisture Code
/// * `slope_percent` - Ground slope (%)
/// * `conditions` - Stand conditions for blended and grass fuels
///
/// # References
/// FCFDG (1992), Equations 41-42; Wotton et al. (2009), Equations 41a/41b
pub fn slope_equivalent_isi(
    fuel: FuelType,
    ffmc: f64,
    slope_percent: f64,
    conditions: &FuelConditions,
) -> f64 {
    let isz = initial_spread_index(ffmc, 0.0, IsiMode::FbpModified);
    let sf = slope_factor(slope_percent);
    let pc = conditions.percent_conifer / 100.0;
    let pdf = conditions.percent_dead_fir / 100.0;
    let d1 = component_isf(FuelType::D1, isz, sf);

    match fuel {
        FuelType::M1 | FuelType::M2 => pc * component_isf(FuelType::C2, isz, sf) + (1.0 - pc) * d1,
        FuelType::M3 | FuelType::M4 => pdf * component_isf(fuel, isz, sf) + (1.0 - pdf) * d1,
        FuelType::O1A | FuelType::O1B => {
            let cf = curing_factor(conditions.grass_cure.unwrap_or(0.0));
            match fuel.parameters().spread {
                Some(c) if cf > 0.0 => {
                    let scaled = SpreadConstants { a: c.a * cf, ..c };
                    inverse_rsi(&scaled, rsi_curve(&scaled, isz) * sf)
                }
                _ => 0.0,
            }
        }
        _ => component_isf(fuel, isz, sf),
    }
}

/// Wind speed (km/h) that alone would give the slope-equivalent ISI
///
/// # References
/// FCFDG (1992), Equation 44; Wotton et al. (2009), Equations 44a-44e
pub fn slope_equivalent_wind_speed(ffmc: f64, isf: f64) -> f64 {
    if isf <= 0.0 {
        return 0.0;
    }
    let ff = fine_fuel_function(ffmc);
    let wse = (isf / (0.208 * ff)).ln() / 0.05039;
    if wse <= 40.0 {
        return wse.max(0.0);
    }
    if isf < 0.999 * 2.496 * ff {
        28.0 - (1.0 - isf / (2.496 * ff)).ln() / 0.0818
    } else {
        MAX_EQUIVALENT_WIND
    }
}

/// Unit vector pointing towards `azimuth_degrees` (x east, y north)
fn heading(azimuth_degrees: f64) -> Vector2<f64> {
    let radians = azimuth_degrees.to_radians();
    Vector2::new(radians.sin(), radians.cos())
}

/// Net effective wind speed and spread direction
///
/// The wind vector points where the wind blows to (wind direction + 180°);
/// the slope vector points upslope (aspect + 180°).
///
/// # Arguments
/// * `fuel`, `ffmc`, `conditions` - Used to derive the slope equivalent wind
/// * `wind_speed` - 10 m wind speed (km/h)
/// * `wind_direction` - Direction the wind blows from (degrees)
/// * `slope` - Terrain; `None` means level ground
///
/// # References
/// FCFDG (1992), Equations 45-50
pub fn net_effective_wind(
    fuel: FuelType,
    ffmc: f64,
    wind_speed: f64,
    wind_direction: f64,
    slope: Option<&SlopeConditions>,
    conditions: &FuelConditions,
) -> NetEffectiveWind {
    let wind = heading(wind_direction + 180.0) * wind_speed;

    let (sf, wse, upslope) = match slope {
        Some(terrain) if terrain.slope_percent > 0.0 => {
            let isf = slope_equivalent_isi(fuel, ffmc, terrain.slope_percent, conditions);
            let wse = slope_equivalent_wind_speed(ffmc, isf);
            (slope_factor(terrain.slope_percent), wse, heading(terrain.aspect + 180.0) * wse)
        }
        _ => (1.0, 0.0, Vector2::zeros()),
    };

    let downwind = (wind_direction + 180.0).rem_euclid(360.0);
    if wse <= 0.0 {
        return NetEffectiveWind {
            slope_factor: sf,
            equivalent_wind_speed: 0.0,
            speed: wind_speed,
            spread_azimuth: downwind,
        };
    }

    let resultant = wind + upslope;
    let speed = resultant.norm();
    let spread_azimuth = if speed > 0.0 {
        resultant.x.atan2(resultant.y).to_degrees().rem_euclid(360.0)
    } else {
        downwind
    };

    NetEffectiveWind {
        slope_factor: sf,
        equivalent_wind_speed: wse,
        speed,
        spread_azimuth,
    }
}
