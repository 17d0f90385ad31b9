//! Fine Fuel Moisture Code (FFMC)
//!
//! Daily moisture content of litter and other cured fine fuels. The code is
//! a transform of moisture content `m` (%) onto a 0-101 scale where higher
//! values mean drier fuel:
//!
//! m = 147.2 × (101 − F) / (59.5 + F)
//!
//! Rain is applied to yesterday's moisture first, then the day drifts
//! towards the drying or wetting equilibrium moisture content.
//!
//! # Scientific References
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest
//!   Fire Weather Index System", Forestry Technical Report 35, Equations 1-10
//! - Van Wagner, C.E., Pickett, T.L. (1985). "Equations and FORTRAN program for
//!   the Canadian Forest Fire Weather Index System", Forestry Technical Report 33

/// Upper bound of the FFMC scale
pub const FFMC_MAX: f64 = 101.0;

/// Rain at or below this amount (mm) is intercepted by the canopy
pub(crate) const FFMC_RAIN_THRESHOLD: f64 = 0.5;

/// FFMC scale factor linking moisture content and code
const FFMC_COEFFICIENT: f64 = 147.2;

/// Convert an FFMC value to fine fuel moisture content (%)
#[inline]
pub(crate) fn ffmc_to_moisture(ffmc: f64) -> f64 {
    FFMC_COEFFICIENT * (FFMC_MAX - ffmc) / (59.5 + ffmc)
}

/// Convert fine fuel moisture content (%) back to an FFMC value
#[inline]
fn moisture_to_ffmc(moisture: f64) -> f64 {
    59.5 * (250.0 - moisture) / (FFMC_COEFFICIENT + moisture)
}

/// Apply the rainfall phase to yesterday's fine fuel moisture content
///
/// Van Wagner (1987) Equations 3a/3b. The extra term for very wet fuel
/// (mo > 150) prevents the rain effect from saturating.
fn apply_rain(mo: f64, precipitation: f64) -> f64 {
    let rf = precipitation - FFMC_RAIN_THRESHOLD;
    let mut wetted =
        mo + 42.5 * rf * (-100.0 / (251.0 - mo)).exp() * (1.0 - (-6.93 / rf).exp());
    if mo > 150.0 {
        wetted += 0.0015 * (mo - 150.0).powi(2) * rf.sqrt();
    }
    wetted.min(250.0)
}

/// Update yesterday's FFMC with today's noon weather
///
/// # Arguments
/// * `previous_ffmc` - Yesterday's FFMC (seed with 85 at start-up)
/// * `temperature` - Noon temperature (°C)
/// * `relative_humidity` - Noon relative humidity (%), clamped to 0-100
/// * `wind_speed` - Noon 10 m wind speed (km/h)
/// * `precipitation` - 24-hour rainfall (mm)
///
/// # Returns
/// Today's FFMC, bounded to [0, 101]. NaN inputs propagate.
///
/// # References
/// Van Wagner (1987), Equations 1-10
pub fn update_ffmc(
    previous_ffmc: f64,
    temperature: f64,
    relative_humidity: f64,
    wind_speed: f64,
    precipitation: f64,
) -> f64 {
    let h = relative_humidity.clamp(0.0, 100.0);
    let t = temperature;
    let w = if wind_speed < 0.0 { 0.0 } else { wind_speed };

    let mut mo = ffmc_to_moisture(previous_ffmc);
    if precipitation > FFMC_RAIN_THRESHOLD {
        mo = apply_rain(mo, precipitation);
    }

    // Equilibrium moisture contents for drying (ed) and wetting (ew)
    let humidity_term = 0.18 * (21.1 - t) * (1.0 - (-0.115 * h).exp());
    let ed = 0.942 * h.powf(0.679) + 11.0 * ((h - 100.0) / 10.0).exp() + humidity_term;
    let ew = 0.618 * h.powf(0.753) + 10.0 * ((h - 100.0) / 10.0).exp() + humidity_term;
    if ed.is_nan() || ew.is_nan() {
        return f64::NAN;
    }

    let m = if mo > ed {
        let ko = 0.424 * (1.0 - (h / 100.0).powf(1.7))
            + 0.0694 * w.sqrt() * (1.0 - (h / 100.0).powi(8));
        let kd = ko * 0.581 * (0.0365 * t).exp();
        ed + (mo - ed) / 10f64.powf(kd)
    } else if mo < ew {
        let dryness = (100.0 - h) / 100.0;
        let k1 = 0.424 * (1.0 - dryness.powf(1.7)) + 0.0694 * w.sqrt() * (1.0 - dryness.powi(8));
        let kw = k1 * 0.581 * (0.0365 * t).exp();
        ew - (ew - mo) / 10f64.powf(kw)
    } else {
        mo
    };

    moisture_to_ffmc(m).clamp(0.0, FFMC_MAX)
}
