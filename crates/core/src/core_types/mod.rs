//! Core types: units, fuel types, weather and stations

pub mod fuel;
pub mod station;
pub mod units;
pub mod weather;

pub use fuel::{FuelType, FuelTypeParameters, SpreadConstants};
pub use station::{FireCentre, PlanningArea, StationDaily, WeatherStation};
pub use units::*;
pub use weather::{FireWeatherIndices, MoistureCodes, WeatherObservation};
