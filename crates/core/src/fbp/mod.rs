//! Canadian Forest Fire Behavior Prediction (FBP) System
//!
//! Turns the fire weather indices plus fuel type and stand conditions into
//! physical fire behaviour: rate of spread, fuel consumption, head fire
//! intensity, crown involvement, fire shape and the operational intensity
//! group. [`predict`] runs the whole chain for one fuel type.
//!
//! Fuel type differences are resolved through the parameter table's
//! capability flags; every function is pure.

pub(crate) mod consumption;
pub(crate) mod critical_hours;
pub(crate) mod crown_fire;
pub(crate) mod fire_shape;
pub(crate) mod foliar_moisture;
pub(crate) mod intensity;
pub(crate) mod prediction;
pub(crate) mod slope;
pub(crate) mod spread;

use crate::core_types::fuel::FuelType;
use serde::{Deserialize, Serialize};

pub use consumption::{surface_fuel_consumption, total_fuel_consumption, DEFAULT_GRASS_FUEL_LOAD};
pub use critical_hours::{critical_hours, representative_critical_hours, CriticalHours, HourlyHfi};
pub use crown_fire::{calculate_crown_fire_behavior, CrownFireBehavior, FireType};
pub use foliar_moisture::{foliar_moisture_content, foliar_moisture_for_date, PEAK_FOLIAR_MOISTURE};
pub use intensity::{flame_length, head_fire_intensity, intensity_group, intensity_group_bounds};
pub use prediction::{
    critical_ffmc, predict, predict_with_wind_limit, CriticalFfmc, FbpInputs,
    FireBehaviourPrediction, InvalidReason, MAX_VALID_WIND_SPEED,
};
pub use slope::{net_effective_wind, NetEffectiveWind, SlopeConditions};
pub use spread::{buildup_effect, curing_factor, rate_of_spread};

/// Stand conditions that modify fire behaviour for a fuel type
///
/// Not every field applies to every fuel type: percent conifer only matters
/// for M-1/M-2, percent dead fir for M-3/M-4, grass cure and grass fuel load
/// for O-1, crown base height and crown fuel load for fuels with a crown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelConditions {
    /// Percent conifer in the stand (M-1/M-2)
    pub percent_conifer: f64,
    /// Percent dead balsam fir (M-3/M-4)
    pub percent_dead_fir: f64,
    /// Degree of grass curing (%); required for O-1
    pub grass_cure: Option<f64>,
    /// Crown base height (m)
    pub crown_base_height: f64,
    /// Crown fuel load (kg/m²)
    pub crown_fuel_load: f64,
    /// Grass fuel load (kg/m²)
    pub grass_fuel_load: f64,
    /// Foliar moisture content (%)
    pub foliar_moisture: f64,
}

impl FuelConditions {
    /// Standard stand conditions of `fuel` with the given foliar moisture
    ///
    /// Grass curing is left unset; grass fuel types need the caller to
    /// supply it.
    pub fn defaults_for(fuel: FuelType, foliar_moisture: f64) -> Self {
        let params = fuel.parameters();
        Self {
            percent_conifer: params.default_percent_conifer,
            percent_dead_fir: params.default_percent_dead_fir,
            grass_cure: None,
            crown_base_height: params.crown_base_height,
            crown_fuel_load: params.crown_fuel_load,
            grass_fuel_load: DEFAULT_GRASS_FUEL_LOAD,
            foliar_moisture,
        }
    }

    /// Same conditions with a grass curing percentage
    pub fn with_grass_cure(mut self, grass_cure: f64) -> Self {
        self.grass_cure = Some(grass_cure);
        self
    }
}

// ============================================================================
// PUBLIC RE-EXPORTS FOR VALIDATION TESTING
// ============================================================================
// Intermediate equations exposed so integration tests can check them against
// published FBP values.

/// Crown fire thresholds
pub mod crown_fire_validation {
    pub use super::crown_fire::{
        critical_spread_rate, critical_surface_intensity, crown_fraction_burned,
        determine_fire_type,
    };
}

/// Rate of spread components
pub mod spread_validation {
    pub use super::spread::{c6_rate_of_spread, initial_rate_of_spread, C6Spread};
}

/// Fire ellipse geometry
pub mod fire_shape_validation {
    pub use super::fire_shape::{
        acceleration, back_fire_isi, back_rate_of_spread, fire_size, flank_rate_of_spread,
        length_to_breadth_at_time, length_to_breadth_ratio, spread_distance,
    };
}

/// Slope effect components
pub mod slope_validation {
    pub use super::slope::{slope_equivalent_isi, slope_equivalent_wind_speed, slope_factor};
}

/// Fuel consumption and foliar moisture
pub mod consumption_validation {
    pub use super::consumption::crown_fuel_consumption;
    pub use super::foliar_moisture::minimum_fmc_day;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_parameter_table() {
        let c = FuelConditions::defaults_for(FuelType::M1, 97.0);
        assert_eq!(c.percent_conifer, 50.0);
        assert_eq!(c.crown_fuel_load, 0.8);
        assert_eq!(c.foliar_moisture, 97.0);
        assert_eq!(c.grass_cure, None);

        let grass = FuelConditions::defaults_for(FuelType::O1A, 120.0).with_grass_cure(80.0);
        assert_eq!(grass.grass_cure, Some(80.0));
        assert_eq!(grass.grass_fuel_load, DEFAULT_GRASS_FUEL_LOAD);
    }
}
