//! Duff Moisture Code (DMC)
//!
//! Moisture content of loosely compacted organic layers of moderate depth
//! (about 15 day timelag). Drying is driven by temperature, humidity and an
//! effective day length that depends on month and latitude.
//!
//! # Scientific References
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest
//!   Fire Weather Index System", Forestry Technical Report 35, Equations 11-17
//! - Lawson, B.D., Armitage, O.B. (2008). "Weather guide for the Canadian Forest
//!   Fire Danger Rating System" (latitude adjusted day lengths)

/// Rain at or below this amount (mm) does not reach the duff layer
pub(crate) const DMC_RAIN_THRESHOLD: f64 = 1.5;

/// Effective day length (hours) by month, latitude > 30°N
const DAY_LENGTH_NORTH: [f64; 12] = [6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0];
/// 10°N < latitude ≤ 30°N
const DAY_LENGTH_NORTH_TROPIC: [f64; 12] = [7.9, 8.4, 8.9, 9.5, 9.9, 10.2, 10.1, 9.7, 9.1, 8.6, 8.1, 7.8];
/// 30°S < latitude ≤ 10°S
const DAY_LENGTH_SOUTH_TROPIC: [f64; 12] = [10.1, 9.6, 9.1, 8.5, 8.1, 7.8, 7.9, 8.3, 8.9, 9.4, 9.9, 10.2];
/// latitude ≤ 30°S
const DAY_LENGTH_SOUTH: [f64; 12] = [11.5, 10.5, 9.2, 7.9, 6.8, 6.2, 6.5, 7.4, 8.7, 10.0, 11.2, 11.8];
/// Near the equator day length is constant
const DAY_LENGTH_EQUATORIAL: f64 = 9.0;

/// Effective day length for the DMC drying rate
///
/// # Arguments
/// * `latitude` - Station latitude (degrees, negative south)
/// * `month` - Month of year, 1-12 (out-of-range values are clamped)
pub(crate) fn dmc_day_length(latitude: f64, month: u32) -> f64 {
    let idx = (month.clamp(1, 12) - 1) as usize;
    if latitude > 30.0 {
        DAY_LENGTH_NORTH[idx]
    } else if latitude > 10.0 {
        DAY_LENGTH_NORTH_TROPIC[idx]
    } else if latitude > -10.0 {
        DAY_LENGTH_EQUATORIAL
    } else if latitude > -30.0 {
        DAY_LENGTH_SOUTH_TROPIC[idx]
    } else {
        DAY_LENGTH_SOUTH[idx]
    }
}

/// Update yesterday's DMC with today's noon weather
///
/// # Arguments
/// * `previous_dmc` - Yesterday's DMC (seed with 6 at start-up)
/// * `temperature` - Noon temperature (°C), floored at −1.1
/// * `relative_humidity` - Noon relative humidity (%), clamped to 0-100
/// * `precipitation` - 24-hour rainfall (mm)
/// * `latitude` - Station latitude (degrees)
/// * `month` - Month of year (1-12)
///
/// # Returns
/// Today's DMC (non-negative, unbounded above). NaN inputs propagate.
///
/// # References
/// Van Wagner (1987), Equations 11-17
pub fn update_dmc(
    previous_dmc: f64,
    temperature: f64,
    relative_humidity: f64,
    precipitation: f64,
    latitude: f64,
    month: u32,
) -> f64 {
    let t = if temperature < -1.1 { -1.1 } else { temperature };
    let h = relative_humidity.clamp(0.0, 100.0);

    // Log drying rate
    let rk = 1.894 * (t + 1.1) * (100.0 - h) * dmc_day_length(latitude, month) * 1e-4;

    let pr = if precipitation > DMC_RAIN_THRESHOLD {
        let rw = 0.92 * precipitation - 1.27;
        let wmi = 20.0 + 280.0 / (0.023 * previous_dmc).exp();
        let b = if previous_dmc <= 33.0 {
            100.0 / (0.5 + 0.3 * previous_dmc)
        } else if previous_dmc <= 65.0 {
            14.0 - 1.3 * previous_dmc.ln()
        } else {
            6.2 * previous_dmc.ln() - 17.2
        };
        let wmr = wmi + 1000.0 * rw / (48.77 + b * rw);
        let after_rain = 43.43 * (5.6348 - (wmr - 20.0).ln());
        if after_rain < 0.0 {
            0.0
        } else {
            after_rain
        }
    } else {
        previous_dmc
    };

    let dmc = pr + rk;
    if dmc < 0.0 {
        0.0
    } else {
        dmc
    }
}
