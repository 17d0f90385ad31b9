//! Foliar moisture content (FMC)
//!
//! Conifer foliage moisture follows a seasonal curve with a spring dip
//! around new growth. The date of minimum FMC is derived from latitude,
//! longitude and elevation unless the caller supplies it.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3,
//!   Equations 1-8

use chrono::{Datelike, NaiveDate};

/// Foliar moisture content assumed outside the seasonal dip (%)
pub const PEAK_FOLIAR_MOISTURE: f64 = 120.0;

/// Julian day of minimum foliar moisture content
///
/// # Arguments
/// * `latitude` - Degrees (hemisphere sign is ignored)
/// * `longitude` - Degrees; negative west and positive west are both accepted
/// * `elevation` - Metres above sea level; ≤ 0 selects the sea-level equations
///
/// # References
/// FCFDG (1992), Equations 1-4
pub fn minimum_fmc_day(latitude: f64, longitude: f64, elevation: f64) -> f64 {
    let lat = latitude.abs();
    let long = longitude.abs();
    let d0 = if elevation <= 0.0 {
        let normalised_lat = 46.0 + 23.4 * (-0.0360 * (150.0 - long)).exp();
        151.0 * (lat / normalised_lat)
    } else {
        let normalised_lat = 43.0 + 33.7 * (-0.0351 * (150.0 - long)).exp();
        142.1 * (lat / normalised_lat) + 0.0172 * elevation
    };
    d0.round()
}

/// Foliar moisture content (%) for a day of year
///
/// # Arguments
/// * `latitude`, `longitude`, `elevation` - Station location
/// * `day_of_year` - Julian day (1-366)
/// * `minimum_day` - Date of minimum FMC, derived when `None`
///
/// # References
/// FCFDG (1992), Equations 5-8
pub fn foliar_moisture_content(
    latitude: f64,
    longitude: f64,
    elevation: f64,
    day_of_year: u32,
    minimum_day: Option<f64>,
) -> f64 {
    let d0 = match minimum_day {
        Some(d) if d > 0.0 => d,
        _ => minimum_fmc_day(latitude, longitude, elevation),
    };
    let nd = (f64::from(day_of_year) - d0).abs();
    if nd < 30.0 {
        85.0 + 0.0189 * nd.powi(2)
    } else if nd < 50.0 {
        32.9 + 3.17 * nd - 0.0288 * nd.powi(2)
    } else {
        PEAK_FOLIAR_MOISTURE
    }
}

/// Foliar moisture content (%) for a calendar date
pub fn foliar_moisture_for_date(latitude: f64, longitude: f64, elevation: f64, date: NaiveDate) -> f64 {
    foliar_moisture_content(latitude, longitude, elevation, date.ordinal(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fmc_minimum_on_d0() {
        let fmc = foliar_moisture_content(50.0, -120.0, 500.0, 150, Some(150.0));
        assert_abs_diff_eq!(fmc, 85.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fmc_curve_is_continuous() {
        // ND = 30: 85 + 0.0189×900 = 102.01 vs 32.9 + 95.1 − 25.92 = 102.08
        let just_before = foliar_moisture_content(50.0, 120.0, 0.0, 129, Some(100.0));
        let at = foliar_moisture_content(50.0, 120.0, 0.0, 130, Some(100.0));
        assert!((just_before - at).abs() < 2.0);
        // ND = 50 is the peak
        assert_abs_diff_eq!(
            foliar_moisture_content(50.0, 120.0, 0.0, 150, Some(100.0)),
            PEAK_FOLIAR_MOISTURE,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_derived_minimum_day_is_late_spring_in_bc() {
        // Kamloops-ish: 50.7N 120.4W, 345 m
        let d0 = minimum_fmc_day(50.7, -120.4, 345.0);
        assert!((120.0..=180.0).contains(&d0), "D0 was {d0}");
        assert_eq!(d0, minimum_fmc_day(50.7, 120.4, 345.0));
    }

    #[test]
    fn test_fmc_from_date() {
        let winter = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(foliar_moisture_for_date(50.7, -120.4, 345.0, winter), PEAK_FOLIAR_MOISTURE);
    }
}
