//! Semantic unit types for fire-weather and fire-behaviour quantities
//!
//! Newtype wrappers keep station observations and FBP outputs from being
//! mixed up (a wind speed passed where a rate of spread is expected, a
//! percentage passed as a fraction).
//!
//! # Design Philosophy
//! - All quantities are `f64`; the FWI chain is sensitive to accumulated rounding
//! - Constructors never assert, so NaN observations propagate instead of panicking
//! - Total ordering via `Ord` (NaN sorts greater than all values)
//! - `Deref` to the raw value for use inside formulas
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use fire_danger_core::core_types::units::{KilometersPerHour, KilowattsPerMeter};
//!
//! let wind = KilometersPerHour::new(25.0);
//! assert_eq!(*wind, 25.0);
//! assert_eq!(wind.to_string(), "25.0 km/h");
//!
//! let hfi = KilowattsPerMeter::new(4000.0);
//! assert!(hfi > KilowattsPerMeter::new(3999.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Shared trait impls for every `f64` unit newtype: total ordering,
/// `Deref` and a constructor.
macro_rules! unit_impls {
    ($name:ident) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            /// Wrap a raw value
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }
        }
    };
}

// ============================================================================
// WEATHER OBSERVATION TYPES
// ============================================================================

/// Air temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

unit_impls!(Celsius);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// A percentage (0-100), used for relative humidity, grass curing,
/// percent conifer and percent dead fir
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

unit_impls!(Percent);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Wind speed in kilometres per hour (the FWI System's native wind unit)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

unit_impls!(KilometersPerHour);

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

/// 24-hour precipitation in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Millimeters(f64);

unit_impls!(Millimeters);

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}

// ============================================================================
// FIRE BEHAVIOUR TYPES
// ============================================================================

/// Length or height in metres (crown base height, flame length, elevation)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

unit_impls!(Meters);

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

/// Rate of spread in metres per minute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MetersPerMinute(f64);

unit_impls!(MetersPerMinute);

impl fmt::Display for MetersPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/min", self.0)
    }
}

/// Fireline intensity in kilowatts per metre of fire front
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilowattsPerMeter(f64);

unit_impls!(KilowattsPerMeter);

impl fmt::Display for KilowattsPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kW/m", self.0)
    }
}

/// Fuel load or consumption in kg/m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilogramsPerSquareMeter(f64);

unit_impls!(KilogramsPerSquareMeter);

impl fmt::Display for KilogramsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg/m²", self.0)
    }
}

/// Burned area in hectares
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Hectares(f64);

unit_impls!(Hectares);

impl fmt::Display for Hectares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ha", self.0)
    }
}
