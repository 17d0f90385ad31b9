//! Van Wagner Crown Fire Initiation and FBP Crown Fraction Burned
//!
//! Implements the FBP System's crown involvement chain:
//! - Critical surface fire intensity for crown fire initiation (CSI)
//! - Critical surface fire spread rate (RSO)
//! - Crown fraction burned (CFB)
//! - Fire type classification from CFB
//!
//! # Scientific References
//! - Van Wagner, C.E. (1977). "Conditions for the start and spread of crown fire"
//!   Canadian Journal of Forest Research, 7(1), 23-34
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 56-58
//! - Taylor, S.W., Pike, R.G., Alexander, M.E. (1997). Red Book, p.69 (fire types)

use crate::core_types::fuel::FuelType;
use crate::fbp::spread::c6_rate_of_spread;
use crate::fbp::FuelConditions;
use serde::{Deserialize, Serialize};

/// CFB below this is a surface fire
pub const SURFACE_FIRE_MAX_CFB: f64 = 0.1;

/// CFB at or above this is a continuous crown fire
pub const CONTINUOUS_CROWN_MIN_CFB: f64 = 0.9;

/// Fire type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireType {
    /// Surface fire, CFB < 10 %
    #[serde(rename = "SUR")]
    Surface,
    /// Intermittent crown fire (torching), 10 % ≤ CFB < 90 %
    #[serde(rename = "IC")]
    IntermittentCrown,
    /// Continuous crown fire, CFB ≥ 90 %
    #[serde(rename = "CC")]
    ContinuousCrown,
}

impl FireType {
    /// Red Book abbreviation
    pub fn abbreviation(self) -> &'static str {
        match self {
            FireType::Surface => "SUR",
            FireType::IntermittentCrown => "IC",
            FireType::ContinuousCrown => "CC",
        }
    }
}

/// Crown fire behaviour for one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrownFireBehavior {
    /// Critical surface fire intensity for crown fire initiation (kW/m)
    pub critical_surface_intensity: f64,
    /// Critical surface fire rate of spread (m/min)
    pub critical_spread_rate: f64,
    /// Crown fraction burned (0-1)
    pub crown_fraction_burned: f64,
    /// Fire type
    pub fire_type: FireType,
}

/// Calculate critical surface fire intensity for crown fire initiation
///
/// Van Wagner (1977) formula with the FBP heat of ignition:
/// CSI = 0.001 × CBH^1.5 × (460 + 25.9 × FMC)^1.5
///
/// # Arguments
/// * `foliar_moisture` - Foliar moisture content (%), typical 85-120
/// * `crown_base_height` - Height to live crown base (m)
///
/// # Returns
/// Critical surface intensity in kW/m
///
/// # References
/// FCFDG (1992), Equation 56
pub fn critical_surface_intensity(foliar_moisture: f64, crown_base_height: f64) -> f64 {
    0.001 * crown_base_height.powf(1.5) * (460.0 + 25.9 * foliar_moisture).powf(1.5)
}

/// Calculate the surface spread rate at which crowning starts
///
/// RSO = CSI / (300 × SFC)
///
/// # Arguments
/// * `critical_surface_intensity` - CSI (kW/m)
/// * `sfc` - Surface fuel consumption (kg/m²)
///
/// # Returns
/// Critical spread rate in m/min; infinite when nothing is consumed
///
/// # References
/// FCFDG (1992), Equation 57
pub fn critical_spread_rate(critical_surface_intensity: f64, sfc: f64) -> f64 {
    if sfc <= 0.0 {
        return f64::INFINITY;
    }
    critical_surface_intensity / (300.0 * sfc)
}

/// Calculate crown fraction burned (CFB)
///
/// CFB = 1 − e^(−0.23 × (ROS − RSO)) when ROS > RSO, otherwise 0
///
/// # References
/// FCFDG (1992), Equation 58
pub fn crown_fraction_burned(ros: f64, critical_spread_rate: f64) -> f64 {
    if ros > critical_spread_rate {
        1.0 - (-0.23 * (ros - critical_spread_rate)).exp()
    } else {
        0.0
    }
}

/// Classify fire type from CFB
///
/// D-1 never crowns (Red Book: high intensity surface fires only).
pub fn determine_fire_type(fuel: FuelType, cfb: f64) -> FireType {
    if fuel == FuelType::D1 || cfb < SURFACE_FIRE_MAX_CFB {
        FireType::Surface
    } else if cfb < CONTINUOUS_CROWN_MIN_CFB {
        FireType::IntermittentCrown
    } else {
        FireType::ContinuousCrown
    }
}

/// Calculate crown fire behaviour for a fuel type
///
/// Fuel types without a crown layer report CFB 0 (needed downstream for
/// total fuel consumption). C-6 derives CFB from its surface spread
/// component rather than the combined rate.
///
/// # Arguments
/// * `fuel` - Fuel type
/// * `ros` - Head fire rate of spread (m/min)
/// * `isi` - Initial Spread Index, used only by C-6
/// * `bui` - Buildup Index, used only by C-6
/// * `sfc` - Surface fuel consumption (kg/m²)
/// * `conditions` - Stand conditions (crown base height, foliar moisture)
pub fn calculate_crown_fire_behavior(
    fuel: FuelType,
    ros: f64,
    isi: f64,
    bui: f64,
    sfc: f64,
    conditions: &FuelConditions,
) -> CrownFireBehavior {
    let csi = critical_surface_intensity(conditions.foliar_moisture, conditions.crown_base_height);
    let rso = critical_spread_rate(csi, sfc);

    let cfb = if !fuel.has_crown() {
        0.0
    } else if fuel == FuelType::C6 {
        c6_rate_of_spread(isi, bui, sfc, conditions).crown_fraction_burned
    } else {
        crown_fraction_burned(ros, rso)
    };

    CrownFireBehavior {
        critical_surface_intensity: csi,
        critical_spread_rate: rso,
        crown_fraction_burned: cfb,
        fire_type: determine_fire_type(fuel, cfb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_critical_surface_intensity() {
        // CBH 4 m, FMC 100 %: 0.001 × 8 × 3050^1.5
        let csi = critical_surface_intensity(100.0, 4.0);
        let expected = 0.008 * 3050f64.powf(1.5);
        assert_abs_diff_eq!(csi, expected, epsilon = 1e-9);
        assert!(csi > 1000.0 && csi < 1500.0, "CSI was {}", csi);
    }

    #[test]
    fn test_higher_crown_base_resists_crowning() {
        let low = critical_surface_intensity(100.0, 2.0);
        let high = critical_surface_intensity(100.0, 10.0);
        assert!(high > low);
    }

    #[test]
    fn test_crown_fraction_burned() {
        assert_eq!(crown_fraction_burned(5.0, 10.0), 0.0);
        assert_eq!(crown_fraction_burned(10.0, 10.0), 0.0);

        // CFB = 1 - exp(-0.23 × 10) ≈ 0.9
        let cfb = crown_fraction_burned(30.0, 20.0);
        assert!((cfb - 0.9).abs() < 0.01, "CFB was {}", cfb);
    }

    #[test]
    fn test_no_consumption_means_no_crowning() {
        let rso = critical_spread_rate(2000.0, 0.0);
        assert!(rso.is_infinite());
        assert_eq!(crown_fraction_burned(50.0, rso), 0.0);
    }

    #[test]
    fn test_fire_type_classification() {
        assert_eq!(determine_fire_type(FuelType::C2, 0.0), FireType::Surface);
        assert_eq!(determine_fire_type(FuelType::C2, 0.099), FireType::Surface);
        assert_eq!(determine_fire_type(FuelType::C2, 0.1), FireType::IntermittentCrown);
        assert_eq!(determine_fire_type(FuelType::C2, 0.899), FireType::IntermittentCrown);
        assert_eq!(determine_fire_type(FuelType::C2, 0.9), FireType::ContinuousCrown);
        assert_eq!(determine_fire_type(FuelType::D1, 1.0), FireType::Surface);
    }

    #[test]
    fn test_surface_only_fuels_report_zero_cfb() {
        let conditions = FuelConditions::defaults_for(FuelType::S2, 100.0);
        let behavior = calculate_crown_fire_behavior(FuelType::S2, 80.0, 40.0, 120.0, 5.0, &conditions);
        assert_eq!(behavior.crown_fraction_burned, 0.0);
        assert_eq!(behavior.fire_type, FireType::Surface);
    }

    #[test]
    fn test_fast_c2_fire_crowns() {
        let conditions = FuelConditions::defaults_for(FuelType::C2, 100.0);
        let behavior = calculate_crown_fire_behavior(FuelType::C2, 40.0, 20.0, 80.0, 3.0, &conditions);
        assert_eq!(behavior.fire_type, FireType::ContinuousCrown);
    }
}
