//! FBP System behaviour across every fuel type
//!
//! Sweeps the standard fuel types over a range of weather and checks the
//! relationships the system guarantees: finite non-negative outputs,
//! monotonic responses to dryness and wind, ellipse consistency, and a
//! usable critical FFMC.
//!
//! # References
//!
//! - **Forestry Canada Fire Danger Group (1992)**: Development and structure
//!   of the Canadian Forest Fire Behavior Prediction System (ST-X-3)
//! - **Wotton, Alexander & Taylor (2009)**: Updates and revisions to the
//!   1992 FBP System (GLC-X-10)
//!
//! Run tests with: cargo test --test `fbp_behaviour`

use approx::assert_abs_diff_eq;
use fire_danger_core::fbp::{
    critical_ffmc, intensity_group, predict, CriticalFfmc, FbpInputs, FireType, FuelConditions,
    SlopeConditions,
};
use fire_danger_core::FuelType;

#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Standard conditions, with grass curing for the grass fuel types
fn inputs(fuel: FuelType, ffmc: f64, bui: f64, wind: f64) -> FbpInputs {
    let mut conditions = FuelConditions::defaults_for(fuel, 100.0);
    if fuel.is_grass() {
        conditions.grass_cure = Some(80.0);
    }
    FbpInputs::new(fuel, ffmc, bui, wind, conditions)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 1: Output domains
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_fuel_type_produces_sane_outputs() {
    for fuel in FuelType::ALL {
        for (ffmc, bui, wind) in [(70.0, 10.0, 0.0), (88.0, 40.0, 15.0), (94.0, 120.0, 45.0)] {
            let p = predict(&inputs(fuel, ffmc, bui, wind));
            let label = format!("{fuel} at FFMC {ffmc}, BUI {bui}, wind {wind}");

            assert!(p.valid, "{label}: {:?}", p.invalid_reasons);
            assert!(p.ros.is_finite() && *p.ros > 0.0, "{label}: ROS {}", p.ros);
            assert!(p.hfi.is_finite() && *p.hfi >= 0.0, "{label}: HFI {}", p.hfi);
            assert!((0.0..=1.0).contains(&p.crown_fraction_burned), "{label}: CFB {}", p.crown_fraction_burned);
            assert!(*p.total_fuel_consumption >= *p.surface_fuel_consumption, "{label}");
            assert!(*p.bros <= *p.ros, "{label}: BROS {} > ROS {}", p.bros, p.ros);
            assert!(*p.fros <= *p.ros, "{label}: FROS {} > ROS {}", p.fros, p.ros);
            assert!(p.length_to_breadth >= 1.0, "{label}: LB {}", p.length_to_breadth);
            assert_eq!(p.intensity_group, intensity_group(*p.hfi), "{label}");
        }
    }
}

#[test]
fn test_surface_only_fuels_never_crown() {
    for fuel in FuelType::ALL.into_iter().filter(|f| !f.has_crown()) {
        let p = predict(&inputs(fuel, 95.0, 150.0, 50.0));
        assert_eq!(p.fire_type, FireType::Surface, "{fuel}");
        assert_eq!(p.crown_fraction_burned, 0.0, "{fuel}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 2: Monotonic responses
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_drier_fine_fuels_spread_faster() {
    for fuel in FuelType::ALL {
        let ros: Vec<f64> = [80.0, 85.0, 90.0, 95.0]
            .iter()
            .map(|&ffmc| *predict(&inputs(fuel, ffmc, 60.0, 15.0)).ros)
            .collect();
        assert!(ros.windows(2).all(|w| w[0] <= w[1]), "{fuel}: {ros:?}");
    }

    let c2: Vec<f64> = [80.0, 85.0, 90.0, 95.0]
        .iter()
        .map(|&ffmc| *predict(&inputs(FuelType::C2, ffmc, 60.0, 15.0)).ros)
        .collect();
    assert!(c2.windows(2).all(|w| w[0] < w[1]), "C-2: {c2:?}");
}

#[test]
fn test_wind_and_buildup_raise_intensity() {
    let calm = *predict(&inputs(FuelType::C3, 90.0, 60.0, 5.0)).hfi;
    let breezy = *predict(&inputs(FuelType::C3, 90.0, 60.0, 20.0)).hfi;
    let gale = *predict(&inputs(FuelType::C3, 90.0, 60.0, 50.0)).hfi;
    assert!(calm < breezy && breezy < gale, "{calm} {breezy} {gale}");

    let early = *predict(&inputs(FuelType::C3, 90.0, 20.0, 15.0)).hfi;
    let late = *predict(&inputs(FuelType::C3, 90.0, 100.0, 15.0)).hfi;
    assert!(early < late, "BUI 20: {early}, BUI 100: {late}");
}

#[test]
fn test_fire_grows_with_time() {
    let base = inputs(FuelType::C2, 90.0, 60.0, 20.0);
    let half_hour = predict(&base.with_elapsed_minutes(30.0));
    let two_hours = predict(&base.with_elapsed_minutes(120.0));
    assert!(*half_hour.fire_size > 0.0);
    assert!(*two_hours.fire_size > *half_hour.fire_size);
    // Elapsed time only changes the size estimate
    assert_eq!(half_hour.hfi, two_hours.hfi);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 3: Terrain
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_slope_steers_and_speeds_the_head_fire() {
    let flat = inputs(FuelType::C4, 90.0, 60.0, 0.0);
    // North-facing slope: upslope is due south
    let slope = SlopeConditions { slope_percent: 30.0, aspect: 0.0 };
    let sloped = flat.on_slope(slope, 0.0);

    let flat_p = predict(&flat);
    let sloped_p = predict(&sloped);
    assert!(*sloped_p.ros > *flat_p.ros);
    assert!(sloped_p.net_wind_speed > 0.0);
    assert_abs_diff_eq!(sloped_p.spread_azimuth, 180.0, epsilon = 1e-6);

    // Steeper than 70 % is treated as 70 %
    let cliff = predict(&flat.on_slope(SlopeConditions { slope_percent: 90.0, aspect: 0.0 }, 0.0));
    let max = predict(&flat.on_slope(SlopeConditions { slope_percent: 70.0, aspect: 0.0 }, 0.0));
    assert_abs_diff_eq!(*cliff.ros, *max.ros, epsilon = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 4: Critical FFMC
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_critical_ffmc_tracks_target_intensity() {
    let base = inputs(FuelType::C3, 90.0, 80.0, 20.0);
    let low = critical_ffmc(&base, 2000.0);
    let high = critical_ffmc(&base, 4000.0);
    match (low, high) {
        (CriticalFfmc::At(low), CriticalFfmc::At(high)) => {
            assert!(low < high, "2000 kW/m at {low}, 4000 kW/m at {high}");
            let at = predict(&FbpInputs { ffmc: high, ..base });
            assert!(*at.hfi >= 4000.0);
        }
        other => panic!("expected both targets reachable, got {other:?}"),
    }
}
