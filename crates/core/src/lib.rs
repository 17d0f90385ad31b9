//! Fire Danger Core Library
//!
//! Numeric core of the Canadian Forest Fire Danger Rating System (CFFDRS)
//! plus the operational layer built on it:
//!
//! - [`fwi`]: the Fire Weather Index System. Daily moisture codes (FFMC,
//!   DMC, DC) and fire behaviour indices (ISI, BUI, FWI, DSR) from noon
//!   weather observations.
//! - [`fbp`]: the Fire Behavior Prediction System. Rate of spread, fuel
//!   consumption, head fire intensity, crown fire involvement, fire shape
//!   and slope effects for the standard fuel types.
//! - [`hfi`]: per-station dailies rolled up into mean intensity groups and
//!   preparedness levels per planning area over a prep window.
//! - [`advisory`]: fire zone advisory status and critical hours.
//!
//! Bad weather data never raises an error: predictions carry a validity
//! flag and reasons, and aggregates with nothing to aggregate are `None`.
//! [`FireDangerError`] is reserved for faults in reference data such as
//! planning area membership.
//!
//! ## Example
//!
//! ```
//! use fire_danger_core::fbp::{predict, FbpInputs, FuelConditions};
//! use fire_danger_core::FuelType;
//!
//! let conditions = FuelConditions::defaults_for(FuelType::C2, 100.0);
//! let prediction = predict(&FbpInputs::new(FuelType::C2, 90.0, 60.0, 20.0, conditions));
//! assert!(prediction.valid);
//! assert_eq!(prediction.intensity_group, Some(5));
//! ```

// Core types and utilities
pub mod core_types;

// CFFDRS subsystems
pub mod fbp;
pub mod fwi;

// Operational layer
pub mod advisory;
pub mod config;
pub mod error;
pub mod hfi;

// Re-export core types
pub use core_types::{FireCentre, FuelType, PlanningArea, StationDaily, WeatherStation};
pub use core_types::{FireWeatherIndices, MoistureCodes, WeatherObservation};

// Re-export the main entry points
pub use advisory::{
    assess_zone, critical_hours_by_fuel, zone_status, FuelHfiStats, ZoneAssessment, ZoneStatus,
};
pub use config::{AdvisoryConfig, MeanIntensityPolicy, StationConfig};
pub use error::{FireDangerError, Result};
pub use fbp::{predict, FbpInputs, FireBehaviourPrediction, FuelConditions};
pub use fwi::FwiCalculator;
pub use hfi::{
    calculate_planning_area_results, evaluate_stations, FireStartRange, PlanningAreaResult,
};
