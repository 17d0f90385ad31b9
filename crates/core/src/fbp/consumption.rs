//! Surface and total fuel consumption
//!
//! Surface fuel consumption (SFC) depends on fuel type family: forest floor
//! and woody fuels respond to the BUI, C-1 to the FFMC, and grass burns its
//! whole fuel load. Crown fuel consumption adds CFL × CFB on top.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 9-25
//! - Wotton, B.M., Alexander, M.E., Taylor, S.W. (2009). Information Report
//!   GLC-X-10, Equations 9a/9b (C-1 revision)

use crate::core_types::fuel::FuelType;
use crate::fbp::FuelConditions;

/// Default O-1 grass fuel load (kg/m²)
pub const DEFAULT_GRASS_FUEL_LOAD: f64 = 0.35;

/// Floor applied to SFC so the critical spread rate stays finite
const MIN_SFC: f64 = 0.000001;

/// `k × (1 − e^(−r × BUI))`
#[inline]
fn bui_curve(k: f64, r: f64, bui: f64) -> f64 {
    k * (1.0 - (-r * bui).exp())
}

/// Calculate surface fuel consumption (kg/m²)
///
/// # Arguments
/// * `fuel` - Fuel type
/// * `ffmc` - Fine Fuel Moisture Code (C-1 and C-7)
/// * `bui` - Buildup Index
/// * `conditions` - Percent conifer (M-1/M-2) and grass fuel load (O-1)
///
/// # Returns
/// SFC, never below 1e-6
///
/// # References
/// FCFDG (1992), Equations 9-25; Wotton et al. (2009), Equations 9a/9b
pub fn surface_fuel_consumption(
    fuel: FuelType,
    ffmc: f64,
    bui: f64,
    conditions: &FuelConditions,
) -> f64 {
    let sfc = match fuel {
        FuelType::C1 => {
            if ffmc > 84.0 {
                0.75 + 0.75 * (1.0 - (-0.23 * (ffmc - 84.0)).exp()).sqrt()
            } else {
                0.75 - 0.75 * (1.0 - (-0.23 * (84.0 - ffmc)).exp()).sqrt()
            }
        }
        FuelType::C2 | FuelType::M3 | FuelType::M4 => bui_curve(5.0, 0.0115, bui),
        FuelType::C3 | FuelType::C4 => 5.0 * (1.0 - (-0.0164 * bui).exp()).powf(2.24),
        FuelType::C5 | FuelType::C6 => 5.0 * (1.0 - (-0.0149 * bui).exp()).powf(2.48),
        FuelType::C7 => {
            let forest_floor = if ffmc > 70.0 {
                2.0 * (1.0 - (-0.104 * (ffmc - 70.0)).exp())
            } else {
                0.0
            };
            forest_floor + bui_curve(1.5, 0.0201, bui)
        }
        FuelType::D1 => bui_curve(1.5, 0.0183, bui),
        FuelType::M1 | FuelType::M2 => {
            let pc = conditions.percent_conifer / 100.0;
            pc * bui_curve(5.0, 0.0115, bui) + (1.0 - pc) * bui_curve(1.5, 0.0183, bui)
        }
        FuelType::O1A | FuelType::O1B => conditions.grass_fuel_load,
        FuelType::S1 => bui_curve(4.0, 0.025, bui) + bui_curve(4.0, 0.034, bui),
        FuelType::S2 => bui_curve(10.0, 0.013, bui) + bui_curve(6.0, 0.06, bui),
        FuelType::S3 => bui_curve(12.0, 0.0166, bui) + bui_curve(20.0, 0.021, bui),
    };

    if sfc > 0.0 {
        sfc
    } else {
        MIN_SFC
    }
}

/// Calculate crown fuel consumption (kg/m²)
///
/// CFC = CFL × CFB, weighted by percent conifer for M-1/M-2 and by percent
/// dead fir for M-3/M-4.
///
/// # References
/// FCFDG (1992), Equations 66a-66c
pub fn crown_fuel_consumption(fuel: FuelType, cfb: f64, conditions: &FuelConditions) -> f64 {
    let cfc = conditions.crown_fuel_load * cfb;
    match fuel {
        FuelType::M1 | FuelType::M2 => conditions.percent_conifer / 100.0 * cfc,
        FuelType::M3 | FuelType::M4 => conditions.percent_dead_fir / 100.0 * cfc,
        _ => cfc,
    }
}

/// Total fuel consumption (kg/m²), TFC = SFC + CFC
pub fn total_fuel_consumption(fuel: FuelType, sfc: f64, cfb: f64, conditions: &FuelConditions) -> f64 {
    sfc + crown_fuel_consumption(fuel, cfb, conditions)
}
