//! FWI System fire behaviour indices
//!
//! - Initial Spread Index (ISI): FFMC and wind speed
//! - Buildup Index (BUI): DMC and DC
//! - Fire Weather Index (FWI): ISI and BUI
//! - Daily Severity Rating (DSR): FWI
//!
//! # Scientific References
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest
//!   Fire Weather Index System", Forestry Technical Report 35, Equations 24-31
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equation 53a (high wind ISI modification used by the FBP System)

use crate::fwi::fine_fuel_moisture::ffmc_to_moisture;
use serde::{Deserialize, Serialize};

/// Which wind function the ISI uses
///
/// FWI reporting uses the standard exponential wind function. The FBP
/// System caps the wind effect above 40 km/h; feeding the standard ISI into
/// rate of spread overstates spread in strong winds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IsiMode {
    /// Van Wagner (1987) wind function, for fire weather reporting
    #[default]
    Standard,
    /// FCFDG (1992) Eq. 53a wind function, for fire behaviour prediction
    FbpModified,
}

/// Wind speed at which the FBP wind function takes over (km/h)
const FBP_HIGH_WIND_THRESHOLD: f64 = 40.0;

/// Wind function f(W) of the ISI
pub(crate) fn wind_function(wind_speed: f64, mode: IsiMode) -> f64 {
    match mode {
        IsiMode::FbpModified if wind_speed >= FBP_HIGH_WIND_THRESHOLD => {
            12.0 * (1.0 - (-0.0818 * (wind_speed - 28.0)).exp())
        }
        _ => (0.05039 * wind_speed).exp(),
    }
}

/// Fine fuel moisture function f(F) of the ISI
pub(crate) fn fine_fuel_function(ffmc: f64) -> f64 {
    let fm = ffmc_to_moisture(ffmc);
    91.9 * (-0.1386 * fm).exp() * (1.0 + fm.powf(5.31) / 4.93e7)
}

/// Calculate the Initial Spread Index
///
/// ISI = 0.208 × f(W) × f(F)
///
/// # Arguments
/// * `ffmc` - Fine Fuel Moisture Code
/// * `wind_speed` - 10 m wind speed (km/h)
/// * `mode` - [`IsiMode::Standard`] for FWI reporting, [`IsiMode::FbpModified`]
///   when the ISI feeds rate of spread
///
/// # References
/// Van Wagner (1987), Equations 24-26; FCFDG (1992), Equation 53a
pub fn initial_spread_index(ffmc: f64, wind_speed: f64, mode: IsiMode) -> f64 {
    0.208 * wind_function(wind_speed, mode) * fine_fuel_function(ffmc)
}

/// Calculate the Buildup Index
///
/// BUI = 0.8 × DC × DMC / (DMC + 0.4 × DC), with a correction when that
/// falls below the DMC so the BUI never understates duff dryness.
///
/// # Returns
/// BUI (non-negative). Exactly 0 when both codes are 0.
///
/// # References
/// Van Wagner (1987), Equations 27a-27b
pub fn buildup_index(dmc: f64, dc: f64) -> f64 {
    if dmc == 0.0 && dc == 0.0 {
        return 0.0;
    }

    let bui1 = 0.8 * dc * dmc / (dmc + 0.4 * dc);
    if bui1 < dmc {
        let p = (dmc - bui1) / dmc;
        let cc = 0.92 + (0.0114 * dmc).powf(1.7);
        let bui0 = dmc - cc * p;
        if bui0 < 0.0 {
            0.0
        } else {
            bui0
        }
    } else {
        bui1
    }
}

/// Calculate the Fire Weather Index
///
/// B = 0.1 × ISI × f(D), FWI = e^(2.72 × (0.434 × ln B)^0.647) when B > 1,
/// otherwise FWI = B.
///
/// Non-positive ISI or BUI inputs are treated as 0, so the logarithm is only
/// ever taken of a value above 1.
///
/// # References
/// Van Wagner (1987), Equations 28-30
pub fn fire_weather_index(isi: f64, bui: f64) -> f64 {
    let isi = if isi <= 0.0 { 0.0 } else { isi };
    let bui = if bui <= 0.0 { 0.0 } else { bui };

    // Duff moisture function
    let fd = if bui <= 80.0 {
        0.626 * bui.powf(0.809) + 2.0
    } else {
        1000.0 / (25.0 + 108.64 / (0.023 * bui).exp())
    };

    let bb = 0.1 * isi * fd;
    if bb > 1.0 {
        (2.72 * (0.434 * bb.ln()).powf(0.647)).exp()
    } else {
        bb
    }
}

/// Daily Severity Rating, an FWI transform suited to seasonal averaging
///
/// DSR = 0.0272 × FWI^1.77
///
/// # References
/// Van Wagner (1987), Equation 31
pub fn daily_severity_rating(fwi: f64) -> f64 {
    if fwi <= 0.0 {
        return 0.0;
    }
    0.0272 * fwi.powf(1.77)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_isi_reference_value() {
        let isi = initial_spread_index(85.0, 10.0, IsiMode::Standard);
        assert_abs_diff_eq!(isi, 3.488, epsilon = 0.01);
    }

    #[test]
    fn test_isi_modes_agree_below_forty_kmh() {
        for ws in [0.0, 10.0, 25.0, 39.9] {
            let standard = initial_spread_index(90.0, ws, IsiMode::Standard);
            let fbp = initial_spread_index(90.0, ws, IsiMode::FbpModified);
            assert_eq!(standard, fbp, "modes diverged at {ws} km/h");
        }
    }

    #[test]
    fn test_isi_fbp_mode_damps_high_wind() {
        let standard = initial_spread_index(90.0, 50.0, IsiMode::Standard);
        let fbp = initial_spread_index(90.0, 50.0, IsiMode::FbpModified);
        assert_abs_diff_eq!(standard, 53.26, epsilon = 0.01);
        assert_abs_diff_eq!(fbp, 42.94, epsilon = 0.01);
    }

    #[test]
    fn test_bui_zero_short_circuit() {
        assert_eq!(buildup_index(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_bui_branches() {
        // bui1 >= dmc: standard form
        assert_abs_diff_eq!(buildup_index(25.0, 150.0), 35.294, epsilon = 0.001);
        assert_abs_diff_eq!(buildup_index(5.0, 300.0), 9.6, epsilon = 1e-9);
        // bui1 < dmc: correction form
        assert_abs_diff_eq!(buildup_index(100.0, 20.0), 98.152, epsilon = 0.001);
    }

    #[test]
    fn test_fwi_reference_value() {
        let isi = initial_spread_index(85.0, 10.0, IsiMode::Standard);
        let bui = buildup_index(25.0, 150.0);
        assert_abs_diff_eq!(fire_weather_index(isi, bui), 8.031, epsilon = 0.01);
    }

    #[test]
    fn test_fwi_guards_degenerate_inputs() {
        assert_eq!(fire_weather_index(0.0, 50.0), 0.0);
        assert_eq!(fire_weather_index(-3.0, 50.0), 0.0);
        let no_buildup = fire_weather_index(5.0, -1.0);
        assert!(no_buildup.is_finite());
        assert_abs_diff_eq!(no_buildup, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dsr() {
        assert_eq!(daily_severity_rating(0.0), 0.0);
        assert_abs_diff_eq!(daily_severity_rating(10.0), 0.0272 * 10f64.powf(1.77), epsilon = 1e-12);
    }
}
