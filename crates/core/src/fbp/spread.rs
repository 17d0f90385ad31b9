//! FBP System rate of spread
//!
//! Head fire rate of spread on level terrain:
//!
//! ROS = RSI × BE
//!
//! where RSI is the fuel type's initial spread rate curve over ISI and BE
//! the buildup effect. Mixedwood types blend their conifer and deciduous
//! components, grass is scaled by a curing factor, and C-6 splits into
//! surface and crown spread rates.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 26-31 (RSI), 54 (BE), 57-66 (C-6)
//! - Wotton, B.M., Alexander, M.E., Taylor, S.W. (2009). Information Report
//!   GLC-X-10, Equations 35a/35b (grass curing factor)

use crate::core_types::fuel::{FuelType, SpreadConstants};
use crate::fbp::crown_fire::{crown_fraction_burned, critical_spread_rate, critical_surface_intensity};
use crate::fbp::FuelConditions;

/// Floor applied to rates of spread so downstream ratios stay finite
pub(crate) const MIN_RATE_OF_SPREAD: f64 = 0.000001;

/// Average foliar moisture effect used to normalise C-6 crown spread
const C6_FME_AVERAGE: f64 = 0.778;

/// `a × (1 − e^(−b × ISI))^c0`
#[inline]
pub(crate) fn rsi_curve(constants: &SpreadConstants, isi: f64) -> f64 {
    constants.a * (1.0 - (-constants.b * isi).exp()).powf(constants.c0)
}

/// RSI curve of a fuel type's own constants; 0 for the blended M-1/M-2
#[inline]
fn own_curve(fuel: FuelType, isi: f64) -> f64 {
    fuel.parameters().spread.map_or(0.0, |c| rsi_curve(&c, isi))
}

/// Grass curing factor
///
/// CF = 0.005 × (e^(0.061 × CC) − 1) for CC < 58.8 %, otherwise
/// 0.176 + 0.02 × (CC − 58.8)
///
/// # References
/// Wotton et al. (2009), Equations 35a and 35b
pub fn curing_factor(grass_cure: f64) -> f64 {
    if grass_cure < 58.8 {
        0.005 * ((0.061 * grass_cure).exp() - 1.0)
    } else {
        0.176 + 0.02 * (grass_cure - 58.8)
    }
}

/// Buildup effect on rate of spread
///
/// BE = exp(50 × ln(q) × (1/BUI − 1/BUI0)), and 1 when BUI ≤ 0
///
/// # References
/// FCFDG (1992), Equation 54
pub fn buildup_effect(fuel: FuelType, bui: f64) -> f64 {
    let params = fuel.parameters();
    if bui > 0.0 && params.bui0 > 0.0 {
        (50.0 * params.q.ln() * (1.0 / bui - 1.0 / params.bui0)).exp()
    } else {
        1.0
    }
}

/// Initial rate of spread (m/min) without the buildup effect
///
/// # Arguments
/// * `fuel` - Fuel type
/// * `isi` - Initial Spread Index (FBP-modified)
/// * `conditions` - Stand conditions; percent conifer, percent dead fir and
///   grass curing are read according to the fuel type's capability flags
///
/// # References
/// FCFDG (1992), Equations 26-31; Wotton et al. (2009), Equation 36
pub fn initial_rate_of_spread(fuel: FuelType, isi: f64, conditions: &FuelConditions) -> f64 {
    let d1 = || own_curve(FuelType::D1, isi);
    let pc = conditions.percent_conifer / 100.0;
    let pdf = conditions.percent_dead_fir / 100.0;

    match fuel {
        FuelType::M1 => pc * own_curve(FuelType::C2, isi) + (1.0 - pc) * d1(),
        FuelType::M2 => {
            pc * own_curve(FuelType::C2, isi) + 0.2 * (1.0 - pc) * d1()
        }
        FuelType::M3 => pdf * own_curve(FuelType::M3, isi) + (1.0 - pdf) * d1(),
        FuelType::M4 => {
            pdf * own_curve(FuelType::M4, isi) + 0.2 * (1.0 - pdf) * d1()
        }
        FuelType::O1A | FuelType::O1B => {
            let cure = conditions.grass_cure.unwrap_or(0.0);
            own_curve(fuel, isi) * curing_factor(cure)
        }
        _ => own_curve(fuel, isi),
    }
}

/// C-6 conifer plantation spread components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct C6Spread {
    /// Surface fire rate of spread (m/min)
    pub surface_ros: f64,
    /// Crown fire rate of spread (m/min)
    pub crown_ros: f64,
    /// Crown fraction burned from the surface spread rate
    pub crown_fraction_burned: f64,
    /// Combined head fire rate of spread (m/min)
    pub ros: f64,
}

/// C-6 rate of spread from its surface and crown components
///
/// RSC = 60 × (1 − e^(−0.0497 × ISI)) × FME / 0.778
/// ROS = RSS + CFB × (RSC − RSS)
///
/// # References
/// FCFDG (1992), Equations 59-64
pub fn c6_rate_of_spread(isi: f64, bui: f64, sfc: f64, conditions: &FuelConditions) -> C6Spread {
    let fmc = conditions.foliar_moisture;
    let fme = (1.5 - 0.00275 * fmc).powi(4) / (460.0 + 25.9 * fmc) * 1000.0;
    let crown_ros = 60.0 * (1.0 - (-0.0497 * isi).exp()) * fme / C6_FME_AVERAGE;

    let rsi = own_curve(FuelType::C6, isi);
    let surface_ros = rsi * buildup_effect(FuelType::C6, bui);

    let csi = critical_surface_intensity(fmc, conditions.crown_base_height);
    let rso = critical_spread_rate(csi, sfc);
    let cfb = crown_fraction_burned(surface_ros, rso);

    C6Spread {
        surface_ros,
        crown_ros,
        crown_fraction_burned: cfb,
        ros: surface_ros + cfb * (crown_ros - surface_ros),
    }
}

/// Head fire rate of spread (m/min) on level terrain
///
/// # Arguments
/// * `fuel` - Fuel type
/// * `isi` - Initial Spread Index (FBP-modified)
/// * `bui` - Buildup Index
/// * `sfc` - Surface fuel consumption (kg/m²), only used by C-6
/// * `conditions` - Stand conditions
///
/// # Returns
/// Rate of spread, never below 1e-6 m/min
pub fn rate_of_spread(
    fuel: FuelType,
    isi: f64,
    bui: f64,
    sfc: f64,
    conditions: &FuelConditions,
) -> f64 {
    let ros = if fuel == FuelType::C6 {
        c6_rate_of_spread(isi, bui, sfc, conditions).ros
    } else {
        initial_rate_of_spread(fuel, isi, conditions) * buildup_effect(fuel, bui)
    };

    if ros > 0.0 {
        ros
    } else {
        MIN_RATE_OF_SPREAD
    }
}
