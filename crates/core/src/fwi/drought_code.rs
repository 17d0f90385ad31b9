//! Drought Code (DC)
//!
//! Moisture content of deep, compact organic layers (about 52 day timelag).
//! Tracks seasonal drought; only temperature and rain enter the update, with
//! a monthly day-length adjustment to potential evapotranspiration.
//!
//! # Scientific References
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest
//!   Fire Weather Index System", Forestry Technical Report 35, Equations 18-23
//! - Turner, J.A. (1972). "The drought code component of the Canadian forest fire
//!   behaviour system", Publication 1316

/// Rain at or below this amount (mm) does not reach the deep organic layer
pub(crate) const DC_RAIN_THRESHOLD: f64 = 2.8;

/// Day length adjustment by month, northern hemisphere and latitude > 20°N
const DAY_LENGTH_FACTOR_NORTH: [f64; 12] =
    [-1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6];
/// latitude ≤ 20°S
const DAY_LENGTH_FACTOR_SOUTH: [f64; 12] =
    [6.4, 5.0, 2.4, 0.4, -1.6, -1.6, -1.6, -1.6, -1.6, 0.9, 3.8, 5.8];
/// Between 20°S and 20°N
const DAY_LENGTH_FACTOR_EQUATORIAL: f64 = 1.4;

/// Day length adjustment for the DC potential evapotranspiration
pub(crate) fn dc_day_length_factor(latitude: f64, month: u32) -> f64 {
    let idx = (month.clamp(1, 12) - 1) as usize;
    if latitude > 20.0 {
        DAY_LENGTH_FACTOR_NORTH[idx]
    } else if latitude > -20.0 {
        DAY_LENGTH_FACTOR_EQUATORIAL
    } else {
        DAY_LENGTH_FACTOR_SOUTH[idx]
    }
}

/// Update yesterday's DC with today's noon weather
///
/// # Arguments
/// * `previous_dc` - Yesterday's DC (seed with 15 at start-up)
/// * `temperature` - Noon temperature (°C), floored at −2.8
/// * `precipitation` - 24-hour rainfall (mm)
/// * `latitude` - Station latitude (degrees)
/// * `month` - Month of year (1-12)
///
/// # Returns
/// Today's DC (non-negative, unbounded above). NaN inputs propagate.
///
/// # References
/// Van Wagner (1987), Equations 18-23
pub fn update_dc(
    previous_dc: f64,
    temperature: f64,
    precipitation: f64,
    latitude: f64,
    month: u32,
) -> f64 {
    let t = if temperature < -2.8 { -2.8 } else { temperature };

    // Potential evapotranspiration
    let pe = (0.36 * (t + 2.8) + dc_day_length_factor(latitude, month)) / 2.0;
    let pe = if pe < 0.0 { 0.0 } else { pe };

    let dr = if precipitation > DC_RAIN_THRESHOLD {
        let rw = 0.83 * precipitation - 1.27;
        let smi = 800.0 * (-previous_dc / 400.0).exp();
        let after_rain = previous_dc - 400.0 * (1.0 + 3.937 * rw / smi).ln();
        if after_rain < 0.0 {
            0.0
        } else {
            after_rain
        }
    } else {
        previous_dc
    };

    let dc = dr + pe;
    if dc < 0.0 {
        0.0
    } else {
        dc
    }
}
