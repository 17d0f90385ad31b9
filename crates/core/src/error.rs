//! Error types for reference-data faults
//!
//! Weather data quality problems are never errors: they surface as validity
//! flags on predictions and as `None` aggregates. The variants here cover
//! lookups that can only fail when the reference data itself is wrong.

use crate::core_types::fuel::FuelType;
use thiserror::Error;

/// Errors raised by the fire danger core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireDangerError {
    /// A fuel type code that is not part of the FBP System
    #[error("unknown FBP fuel type code '{0}'")]
    UnknownFuelType(String),

    /// A station referenced by a daily that no planning area owns
    #[error("station {0} is not assigned to any planning area")]
    UnassignedStation(u32),

    /// A station listed under more than one planning area
    #[error("station {0} is assigned to more than one planning area")]
    StationInMultipleAreas(u32),

    /// A crown fuel load that cannot be used for a fuel type with a crown
    #[error("crown fuel load {value} is not usable for fuel type {fuel}")]
    InvalidCrownFuelLoad { fuel: FuelType, value: f64 },

    /// Prep window outside the configured span of days
    #[error("prep window of {0} days is outside the configured range")]
    InvalidPrepWindow(i64),

    /// An hour-of-day outside 0..24 in an hourly series
    #[error("hour {0} is outside 0..24")]
    InvalidHour(u32),
}

/// Convenience alias for results carrying a [`FireDangerError`]
pub type Result<T> = std::result::Result<T, FireDangerError>;
