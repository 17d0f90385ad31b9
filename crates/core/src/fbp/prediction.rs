//! Full FBP prediction for one fuel type
//!
//! Chains slope and wind, ISI, surface consumption, spread, crown
//! involvement, intensity and fire shape into a single
//! [`FireBehaviourPrediction`]. Inputs that make the result meaningless
//! (grass without curing, implausible wind) never abort the chain: the
//! prediction is still computed and carries `valid = false` with reasons,
//! so callers can show partial results for other stations.

use crate::core_types::fuel::FuelType;
use crate::core_types::units::{
    Hectares, KilogramsPerSquareMeter, KilowattsPerMeter, Meters, MetersPerMinute,
};
use crate::fbp::consumption::{surface_fuel_consumption, total_fuel_consumption};
use crate::fbp::crown_fire::{calculate_crown_fire_behavior, FireType};
use crate::fbp::fire_shape::{
    back_rate_of_spread, fire_size, flank_rate_of_spread, length_to_breadth_ratio,
};
use crate::fbp::intensity::{flame_length, head_fire_intensity, intensity_group};
use crate::fbp::slope::{net_effective_wind, SlopeConditions};
use crate::fbp::spread::rate_of_spread;
use crate::fbp::FuelConditions;
use crate::fwi::{initial_spread_index, IsiMode, FFMC_MAX};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Wind speeds above this are treated as bad data (km/h)
pub const MAX_VALID_WIND_SPEED: f64 = 120.0;

/// Default elapsed time for fire size (minutes)
const DEFAULT_ELAPSED_MINUTES: f64 = 60.0;

/// Bisection stops once the FFMC bracket is narrower than this
const CRITICAL_FFMC_TOLERANCE: f64 = 0.01;

/// Everything needed to predict fire behaviour for one fuel type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FbpInputs {
    pub fuel: FuelType,
    /// Fine Fuel Moisture Code
    pub ffmc: f64,
    /// Buildup Index
    pub bui: f64,
    /// 10 m open wind speed (km/h)
    pub wind_speed: f64,
    /// Direction the wind blows from (degrees); only matters on a slope
    pub wind_direction: f64,
    /// Terrain; `None` for level ground
    pub slope: Option<SlopeConditions>,
    pub conditions: FuelConditions,
    /// Time since ignition for the fire size estimate (minutes)
    pub elapsed_minutes: f64,
}

impl FbpInputs {
    /// Level-ground inputs with a one-hour fire size horizon
    pub fn new(fuel: FuelType, ffmc: f64, bui: f64, wind_speed: f64, conditions: FuelConditions) -> Self {
        Self {
            fuel,
            ffmc,
            bui,
            wind_speed,
            wind_direction: 0.0,
            slope: None,
            conditions,
            elapsed_minutes: DEFAULT_ELAPSED_MINUTES,
        }
    }

    /// Same inputs on a slope, with the wind from `wind_direction`
    pub fn on_slope(mut self, slope: SlopeConditions, wind_direction: f64) -> Self {
        self.slope = Some(slope);
        self.wind_direction = wind_direction;
        self
    }

    /// Same inputs with a different fire size horizon
    pub fn with_elapsed_minutes(mut self, minutes: f64) -> Self {
        self.elapsed_minutes = minutes;
        self
    }
}

/// Why a prediction should not be trusted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InvalidReason {
    /// Grass fuel type evaluated without a curing percentage
    GrassCureMissing,
    /// Wind speed above the plausibility limit (km/h)
    WindSpeedExceedsLimit { wind_speed: f64, limit: f64 },
    /// FFMC, BUI or wind speed is NaN or infinite
    NonFiniteInput,
}

/// FBP System outputs for one fuel type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireBehaviourPrediction {
    pub fuel: FuelType,
    /// ISI computed from the net effective wind speed (FBP-modified)
    pub isi: f64,
    /// Net effective wind speed (km/h)
    pub net_wind_speed: f64,
    /// Head fire spread direction, degrees clockwise from north
    pub spread_azimuth: f64,
    /// Head fire rate of spread
    pub ros: MetersPerMinute,
    /// Back fire rate of spread
    pub bros: MetersPerMinute,
    /// Flank fire rate of spread
    pub fros: MetersPerMinute,
    pub surface_fuel_consumption: KilogramsPerSquareMeter,
    pub total_fuel_consumption: KilogramsPerSquareMeter,
    /// Crown fraction burned (0-1)
    pub crown_fraction_burned: f64,
    pub critical_surface_intensity: KilowattsPerMeter,
    pub fire_type: FireType,
    pub hfi: KilowattsPerMeter,
    /// Intensity group 1-5, `None` when HFI is not a finite number or a
    /// grass fuel has no curing
    pub intensity_group: Option<u8>,
    pub flame_length: Meters,
    /// Length-to-breadth ratio of the fire ellipse
    pub length_to_breadth: f64,
    /// Fire size after the requested elapsed time
    pub fire_size: Hectares,
    pub valid: bool,
    pub invalid_reasons: Vec<InvalidReason>,
}

/// Input checks that flag, but never stop, a prediction
fn validate_inputs(inputs: &FbpInputs, max_wind_speed: f64) -> Vec<InvalidReason> {
    let mut reasons = Vec::new();
    if inputs.fuel.parameters().needs_grass_cure && inputs.conditions.grass_cure.is_none() {
        reasons.push(InvalidReason::GrassCureMissing);
    }
    if inputs.wind_speed > max_wind_speed {
        reasons.push(InvalidReason::WindSpeedExceedsLimit {
            wind_speed: inputs.wind_speed,
            limit: max_wind_speed,
        });
    }
    if !(inputs.ffmc.is_finite() && inputs.bui.is_finite() && inputs.wind_speed.is_finite()) {
        reasons.push(InvalidReason::NonFiniteInput);
    }
    reasons
}

/// Head fire intensity only, for searches that run the chain many times
fn head_fire_intensity_for(inputs: &FbpInputs) -> f64 {
    let c = &inputs.conditions;
    let wind = net_effective_wind(
        inputs.fuel,
        inputs.ffmc,
        inputs.wind_speed,
        inputs.wind_direction,
        inputs.slope.as_ref(),
        c,
    );
    let isi = initial_spread_index(inputs.ffmc, wind.speed, IsiMode::FbpModified);
    let sfc = surface_fuel_consumption(inputs.fuel, inputs.ffmc, inputs.bui, c);
    let ros = rate_of_spread(inputs.fuel, isi, inputs.bui, sfc, c);
    let crown = calculate_crown_fire_behavior(inputs.fuel, ros, isi, inputs.bui, sfc, c);
    let tfc = total_fuel_consumption(inputs.fuel, sfc, crown.crown_fraction_burned, c);
    head_fire_intensity(tfc, ros)
}

/// Predict fire behaviour with the standard wind plausibility limit
pub fn predict(inputs: &FbpInputs) -> FireBehaviourPrediction {
    predict_with_wind_limit(inputs, MAX_VALID_WIND_SPEED)
}

/// Predict fire behaviour, flagging wind speeds above `max_wind_speed`
///
/// # Arguments
/// * `inputs` - Fuel type, indices, wind, terrain and stand conditions
/// * `max_wind_speed` - Plausibility limit (km/h)
///
/// # Returns
/// The full prediction. When inputs are questionable the values are still
/// computed, `valid` is false and `invalid_reasons` says why.
pub fn predict_with_wind_limit(inputs: &FbpInputs, max_wind_speed: f64) -> FireBehaviourPrediction {
    let fuel = inputs.fuel;
    let c = &inputs.conditions;

    let wind = net_effective_wind(
        fuel,
        inputs.ffmc,
        inputs.wind_speed,
        inputs.wind_direction,
        inputs.slope.as_ref(),
        c,
    );
    let wsv = wind.speed;
    let isi = initial_spread_index(inputs.ffmc, wsv, IsiMode::FbpModified);

    let sfc = surface_fuel_consumption(fuel, inputs.ffmc, inputs.bui, c);
    let ros = rate_of_spread(fuel, isi, inputs.bui, sfc, c);
    let crown = calculate_crown_fire_behavior(fuel, ros, isi, inputs.bui, sfc, c);
    let cfb = crown.crown_fraction_burned;
    let tfc = total_fuel_consumption(fuel, sfc, cfb, c);
    let hfi = head_fire_intensity(tfc, ros);

    let lb = length_to_breadth_ratio(fuel, wsv);
    let bros = back_rate_of_spread(fuel, inputs.ffmc, inputs.bui, wsv, sfc, c);
    let fros = flank_rate_of_spread(ros, bros, lb);
    let size = fire_size(fuel, ros, bros, lb, inputs.elapsed_minutes, cfb);

    let invalid_reasons = validate_inputs(inputs, max_wind_speed);
    let valid = invalid_reasons.is_empty();
    let group = if invalid_reasons.contains(&InvalidReason::GrassCureMissing) {
        None
    } else {
        intensity_group(hfi)
    };

    debug!(
        fuel = %fuel,
        isi,
        ros,
        hfi,
        cfb,
        fire_type = crown.fire_type.abbreviation(),
        "FBP prediction"
    );
    if !valid {
        warn!(fuel = %fuel, reasons = ?invalid_reasons, "FBP prediction flagged invalid");
    }

    FireBehaviourPrediction {
        fuel,
        isi,
        net_wind_speed: wsv,
        spread_azimuth: wind.spread_azimuth,
        ros: MetersPerMinute::new(ros),
        bros: MetersPerMinute::new(bros),
        fros: MetersPerMinute::new(fros),
        surface_fuel_consumption: KilogramsPerSquareMeter::new(sfc),
        total_fuel_consumption: KilogramsPerSquareMeter::new(tfc),
        crown_fraction_burned: cfb,
        critical_surface_intensity: KilowattsPerMeter::new(crown.critical_surface_intensity),
        fire_type: crown.fire_type,
        hfi: KilowattsPerMeter::new(hfi),
        intensity_group: group,
        flame_length: Meters::new(flame_length(hfi)),
        length_to_breadth: lb,
        fire_size: Hectares::new(size),
        valid,
        invalid_reasons,
    }
}

/// Outcome of a critical FFMC search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CriticalFfmc {
    /// Even FFMC 101 stays below the target intensity
    Unreachable,
    /// FFMC 0 already reaches the target intensity
    AlwaysExceeded,
    /// Lowest FFMC whose head fire intensity reaches the target
    At(f64),
}

/// Find the lowest FFMC at which HFI reaches `target_hfi`
///
/// Everything except the FFMC is held fixed. HFI rises monotonically with
/// FFMC, so the search bisects `[0, 101]` until the bracket is narrower
/// than 0.01.
///
/// # Arguments
/// * `inputs` - Conditions to hold fixed; `inputs.ffmc` is ignored
/// * `target_hfi` - Intensity to reach (kW/m)
pub fn critical_ffmc(inputs: &FbpInputs, target_hfi: f64) -> CriticalFfmc {
    let hfi_at = |ffmc: f64| head_fire_intensity_for(&FbpInputs { ffmc, ..*inputs });

    if hfi_at(0.0) >= target_hfi {
        return CriticalFfmc::AlwaysExceeded;
    }
    if hfi_at(FFMC_MAX) < target_hfi {
        return CriticalFfmc::Unreachable;
    }

    let (mut low, mut high) = (0.0, FFMC_MAX);
    while high - low > CRITICAL_FFMC_TOLERANCE {
        let mid = (low + high) / 2.0;
        if hfi_at(mid) >= target_hfi {
            high = mid;
        } else {
            low = mid;
        }
    }
    debug!(fuel = %inputs.fuel, target_hfi, critical_ffmc = high, "Critical FFMC found");
    CriticalFfmc::At(high)
}
