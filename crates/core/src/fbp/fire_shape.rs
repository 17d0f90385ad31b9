//! Elliptical fire growth: shape, back and flank spread, and area
//!
//! A point-ignition fire is modelled as an ellipse whose length-to-breadth
//! ratio grows with net effective wind speed. Spread accelerates from the
//! ignition point towards the equilibrium rate.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 70-81
//! - Alexander, M.E. (1985). "Estimating the length-to-breadth ratio of elliptical
//!   forest fire patterns", Proc. 8th Conference on Fire and Forest Meteorology
//! - Wotton, B.M., Alexander, M.E., Taylor, S.W. (2009). Information Report
//!   GLC-X-10, Equations 79-81 (grass length-to-breadth)

use crate::core_types::fuel::FuelType;
use crate::fbp::spread::rate_of_spread;
use crate::fbp::FuelConditions;
use crate::fwi::indices::fine_fuel_function;

/// Acceleration parameter for point-source fires in open or surface fuels
const POINT_SOURCE_ACCELERATION: f64 = 0.115;

/// Length-to-breadth ratio of the fire ellipse
///
/// # Arguments
/// * `fuel` - Fuel type; grass uses its own curve
/// * `wsv` - Net effective wind speed (km/h)
///
/// # References
/// FCFDG (1992), Equation 79; Wotton et al. (2009), Equations 80-81
pub fn length_to_breadth_ratio(fuel: FuelType, wsv: f64) -> f64 {
    if fuel.is_grass() {
        if wsv < 1.0 {
            1.0
        } else {
            1.1 * wsv.powf(0.464)
        }
    } else {
        1.0 + 8.729 * (1.0 - (-0.030 * wsv).exp()).powf(2.155)
    }
}

/// Back fire ISI: the fine fuel function with the wind function reversed
pub fn back_fire_isi(ffmc: f64, wsv: f64) -> f64 {
    0.208 * (-0.05039 * wsv).exp() * fine_fuel_function(ffmc)
}

/// Back fire rate of spread (m/min)
///
/// # References
/// FCFDG (1992), Equations 74-75
pub fn back_rate_of_spread(
    fuel: FuelType,
    ffmc: f64,
    bui: f64,
    wsv: f64,
    sfc: f64,
    conditions: &FuelConditions,
) -> f64 {
    rate_of_spread(fuel, back_fire_isi(ffmc, wsv), bui, sfc, conditions)
}

/// Flank fire rate of spread (m/min)
///
/// FROS = (ROS + BROS) / (2 × LB)
///
/// # References
/// FCFDG (1992), Equation 89
pub fn flank_rate_of_spread(ros: f64, bros: f64, lb: f64) -> f64 {
    (ros + bros) / lb / 2.0
}

/// Acceleration parameter α for a fuel type
///
/// Open and surface-only fuels accelerate at the point-source rate; closed
/// canopy fuels accelerate more slowly as crown involvement increases.
///
/// # References
/// FCFDG (1992), Equations 71-72
pub fn acceleration(fuel: FuelType, cfb: f64) -> f64 {
    match fuel {
        FuelType::C1
        | FuelType::D1
        | FuelType::S1
        | FuelType::S2
        | FuelType::S3
        | FuelType::O1A
        | FuelType::O1B => POINT_SOURCE_ACCELERATION,
        _ => POINT_SOURCE_ACCELERATION - 18.8 * cfb.powf(2.5) * (-8.0 * cfb).exp(),
    }
}

/// Spread distance (m) after `elapsed_minutes`, including acceleration
///
/// D(t) = ROSeq × (t + e^(−αt)/α − 1/α)
///
/// # References
/// FCFDG (1992), Equation 73
pub fn spread_distance(fuel: FuelType, ros_eq: f64, elapsed_minutes: f64, cfb: f64) -> f64 {
    let alpha = acceleration(fuel, cfb);
    ros_eq * (elapsed_minutes + (-alpha * elapsed_minutes).exp() / alpha - 1.0 / alpha)
}

/// Length-to-breadth ratio `elapsed_minutes` after ignition
///
/// # References
/// FCFDG (1992), Equation 81
pub fn length_to_breadth_at_time(fuel: FuelType, lb: f64, elapsed_minutes: f64, cfb: f64) -> f64 {
    let alpha = acceleration(fuel, cfb);
    (lb - 1.0) * (1.0 - (-alpha * elapsed_minutes).exp()) + 1.0
}

/// Fire size (ha) after `elapsed_minutes`
///
/// Area of an ellipse with major axis D(t) for head plus back spread:
/// A = π / (4 × LB(t)) × D(t)² / 10 000
///
/// # References
/// Alexander (1985), Equation 8
pub fn fire_size(
    fuel: FuelType,
    ros: f64,
    bros: f64,
    lb: f64,
    elapsed_minutes: f64,
    cfb: f64,
) -> f64 {
    let distance = spread_distance(fuel, ros + bros, elapsed_minutes, cfb);
    let lb_t = length_to_breadth_at_time(fuel, lb, elapsed_minutes, cfb);
    std::f64::consts::PI / (4.0 * lb_t) * distance.powi(2) / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calm_fire_is_circular() {
        assert_abs_diff_eq!(length_to_breadth_ratio(FuelType::C2, 0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(length_to_breadth_ratio(FuelType::O1A, 0.5), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lb_grows_with_wind() {
        let calm = length_to_breadth_ratio(FuelType::C3, 10.0);
        let windy = length_to_breadth_ratio(FuelType::C3, 40.0);
        assert!(windy > calm);
        assert!(windy < 1.0 + 8.729);
        assert_abs_diff_eq!(length_to_breadth_ratio(FuelType::O1B, 20.0), 1.1 * 20f64.powf(0.464), epsilon = 1e-12);
    }

    #[test]
    fn test_back_fire_is_slower_than_head_fire() {
        let c = FuelConditions::defaults_for(FuelType::C2, 100.0);
        let head_isi = crate::fwi::initial_spread_index(90.0, 20.0, crate::fwi::IsiMode::FbpModified);
        let head = rate_of_spread(FuelType::C2, head_isi, 60.0, 3.0, &c);
        let back = back_rate_of_spread(FuelType::C2, 90.0, 60.0, 20.0, 3.0, &c);
        assert!(back < head, "BROS {back} should be below ROS {head}");
    }

    #[test]
    fn test_flank_spread() {
        assert_abs_diff_eq!(flank_rate_of_spread(10.0, 2.0, 3.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_acceleration_by_fuel() {
        assert_eq!(acceleration(FuelType::O1A, 0.8), POINT_SOURCE_ACCELERATION);
        assert_eq!(acceleration(FuelType::C2, 0.0), POINT_SOURCE_ACCELERATION);
        assert!(acceleration(FuelType::C2, 0.5) < POINT_SOURCE_ACCELERATION);
    }

    #[test]
    fn test_distance_approaches_equilibrium_rate() {
        // After a long time D(t) ≈ ROS × (t − 1/α)
        let d = spread_distance(FuelType::D1, 5.0, 600.0, 0.0);
        assert_abs_diff_eq!(d, 5.0 * (600.0 - 1.0 / 0.115), epsilon = 1e-6);
        assert_abs_diff_eq!(spread_distance(FuelType::D1, 5.0, 0.0, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fire_size_grows_with_time() {
        let one_hour = fire_size(FuelType::C2, 10.0, 1.0, 2.0, 60.0, 0.0);
        let two_hours = fire_size(FuelType::C2, 10.0, 1.0, 2.0, 120.0, 0.0);
        assert!(one_hour > 0.0);
        assert!(two_hours > one_hour);
    }
}
