//! FWI System validation
//!
//! Checks the daily moisture code chain against published values and runs
//! long synthetic seasons to confirm the codes stay inside their domains.
//!
//! # References
//!
//! - **Van Wagner & Pickett (1985)**: Equations and FORTRAN program for the
//!   Canadian Forest Fire Weather Index System, worked example
//! - **Van Wagner (1987)**: Development and structure of the Canadian Forest
//!   Fire Weather Index System
//!
//! Run tests with: cargo test --test `fwi_system`

use approx::assert_abs_diff_eq;
use fire_danger_core::fwi::{
    buildup_index, initial_spread_index, update_dc, update_dmc, update_ffmc, FwiCalculator,
    IsiMode, FFMC_MAX,
};
use fire_danger_core::{MoistureCodes, WeatherObservation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 1: Published worked example (Van Wagner & Pickett 1985)
// ═══════════════════════════════════════════════════════════════════════════════

/// Two April days at 46°N from the start-up codes
///
/// | Day | T  | RH | WS | P   | FFMC | DMC  | DC   | ISI  | BUI  | FWI  |
/// |-----|----|----|----|-----|------|------|------|------|------|------|
/// | 1   | 17 | 42 | 25 | 0.0 | 87.7 | 8.5  | 19.0 | 10.9 | 8.5  | 10.1 |
/// | 2   | 20 | 21 | 25 | 2.4 | 86.2 | 10.4 | 23.6 | 8.8  | 10.4 | 9.3  |
#[test]
fn test_published_two_day_example() {
    let mut calc = FwiCalculator::new(46.0);
    let expected = [
        (WeatherObservation::new(17.0, 42.0, 25.0, 0.0), [87.7, 8.5, 19.0, 10.9, 8.5, 10.1]),
        (WeatherObservation::new(20.0, 21.0, 25.0, 2.4), [86.2, 10.4, 23.6, 8.8, 10.4, 9.3]),
    ];

    for (day, (obs, values)) in expected.iter().enumerate() {
        let out = calc.advance(obs, 4);
        let actual = [
            out.codes.ffmc,
            out.codes.dmc,
            out.codes.dc,
            out.indices.isi,
            out.indices.bui,
            out.indices.fwi,
        ];
        for (name, (a, e)) in ["FFMC", "DMC", "DC", "ISI", "BUI", "FWI"].iter().zip(actual.iter().zip(values)) {
            assert!(
                (a - e).abs() <= 0.06,
                "day {}: {name} expected {e}, got {a:.3}",
                day + 1
            );
        }
    }
}

#[test]
fn test_isi_and_bui_reference_points() {
    assert_abs_diff_eq!(initial_spread_index(85.0, 10.0, IsiMode::Standard), 3.488, epsilon = 0.01);
    assert_eq!(buildup_index(0.0, 0.0), 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 2: Domain bounds over a synthetic season
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_ffmc_ceiling_without_rain_or_wind() {
    let mut ffmc = 85.0;
    for _ in 0..60 {
        ffmc = update_ffmc(ffmc, 40.0, 5.0, 0.0, 0.0);
        assert!(ffmc <= FFMC_MAX, "FFMC exceeded ceiling: {ffmc}");
    }
    assert!(ffmc > 95.0, "hot dry weeks should cure fine fuels, got {ffmc}");
}

#[test]
fn test_random_season_stays_in_domain() {
    let mut rng = StdRng::seed_from_u64(0x5eed_f1e0);
    for latitude in [-40.0, 5.0, 20.0, 55.0] {
        let mut calc = FwiCalculator::new(latitude);
        for day in 0..180u32 {
            let month = 4 + day / 30;
            let obs = WeatherObservation::new(
                rng.random_range(-5.0..38.0),
                rng.random_range(5.0..100.0),
                rng.random_range(0.0..80.0),
                if rng.random_bool(0.3) { rng.random_range(0.0..40.0) } else { 0.0 },
            );
            let out = calc.advance(&obs, month);
            let c = out.codes;
            assert!((0.0..=FFMC_MAX).contains(&c.ffmc), "lat {latitude} day {day}: FFMC {}", c.ffmc);
            assert!(c.dmc >= 0.0 && c.dmc.is_finite(), "lat {latitude} day {day}: DMC {}", c.dmc);
            assert!(c.dc >= 0.0 && c.dc.is_finite(), "lat {latitude} day {day}: DC {}", c.dc);
            let i = out.indices;
            assert!(i.isi >= 0.0 && i.bui >= 0.0 && i.fwi >= 0.0, "lat {latitude} day {day}: {i:?}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 3: Physical responses
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_rain_wets_every_code() {
    let yesterday = MoistureCodes::new(92.0, 60.0, 400.0);
    let dry = (
        update_ffmc(yesterday.ffmc, 22.0, 40.0, 10.0, 0.0),
        update_dmc(yesterday.dmc, 22.0, 40.0, 0.0, 50.0, 7),
        update_dc(yesterday.dc, 22.0, 0.0, 50.0, 7),
    );
    let wet = (
        update_ffmc(yesterday.ffmc, 22.0, 40.0, 10.0, 25.0),
        update_dmc(yesterday.dmc, 22.0, 40.0, 25.0, 50.0, 7),
        update_dc(yesterday.dc, 22.0, 25.0, 50.0, 7),
    );
    assert!(wet.0 < dry.0, "FFMC: wet {} vs dry {}", wet.0, dry.0);
    assert!(wet.1 < dry.1, "DMC: wet {} vs dry {}", wet.1, dry.1);
    assert!(wet.2 < dry.2, "DC: wet {} vs dry {}", wet.2, dry.2);
}

#[test]
fn test_hemispheres_use_different_day_lengths() {
    let obs = WeatherObservation::new(20.0, 35.0, 10.0, 0.0);
    let north = FwiCalculator::new(50.0).advance(&obs, 6);
    let south = FwiCalculator::new(-50.0).advance(&obs, 6);
    // June days are long in the north and short in the south
    assert!(north.codes.dmc > south.codes.dmc);
    assert!(north.codes.dc > south.codes.dc);
}

#[test]
fn test_wind_raises_isi() {
    let calm = initial_spread_index(90.0, 0.0, IsiMode::Standard);
    let windy = initial_spread_index(90.0, 30.0, IsiMode::Standard);
    assert!(windy > calm * 3.0, "calm {calm}, windy {windy}");
}
