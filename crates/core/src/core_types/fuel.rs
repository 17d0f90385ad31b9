//! FBP System fuel types and their reference constants
//!
//! The benchmark fuel types of the Canadian Fire Behaviour Prediction System
//! (D-2 excluded), with O-1 split into its matted (a) and standing (b) grass
//! variants. Each fuel type maps to an immutable [`FuelTypeParameters`]
//! record. Behaviour differences between fuel families are driven by the
//! capability flags on that record rather than by separate types.
//!
//! # Scientific References
//! - Forestry Canada Fire Danger Group (1992). "Development and Structure of the
//!   Canadian Forest Fire Behavior Prediction System", Information Report ST-X-3
//! - Wotton, B.M., Alexander, M.E., Taylor, S.W. (2009). "Updates and revisions to
//!   the 1992 Canadian Forest Fire Behavior Prediction System", Information Report GLC-X-10
//! - Taylor, S.W., Pike, R.G., Alexander, M.E. (1997). "Field guide to the Canadian
//!   Forest Fire Behavior Prediction (FBP) System" (Red Book)

use crate::error::{FireDangerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FBP System fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FuelType {
    /// Spruce-lichen woodland
    #[serde(rename = "C-1", alias = "C1")]
    C1,
    /// Boreal spruce
    #[serde(rename = "C-2", alias = "C2")]
    C2,
    /// Mature jack or lodgepole pine
    #[serde(rename = "C-3", alias = "C3")]
    C3,
    /// Immature jack or lodgepole pine
    #[serde(rename = "C-4", alias = "C4")]
    C4,
    /// Red and white pine
    #[serde(rename = "C-5", alias = "C5")]
    C5,
    /// Conifer plantation
    #[serde(rename = "C-6", alias = "C6")]
    C6,
    /// Ponderosa pine - Douglas-fir
    #[serde(rename = "C-7", alias = "C7")]
    C7,
    /// Leafless aspen
    #[serde(rename = "D-1", alias = "D1")]
    D1,
    /// Boreal mixedwood, leafless
    #[serde(rename = "M-1", alias = "M1")]
    M1,
    /// Boreal mixedwood, green
    #[serde(rename = "M-2", alias = "M2")]
    M2,
    /// Dead balsam fir mixedwood, leafless
    #[serde(rename = "M-3", alias = "M3")]
    M3,
    /// Dead balsam fir mixedwood, green
    #[serde(rename = "M-4", alias = "M4")]
    M4,
    /// Jack or lodgepole pine slash
    #[serde(rename = "S-1", alias = "S1")]
    S1,
    /// White spruce - balsam slash
    #[serde(rename = "S-2", alias = "S2")]
    S2,
    /// Coastal cedar - hemlock - Douglas-fir slash
    #[serde(rename = "S-3", alias = "S3")]
    S3,
    /// Matted grass
    #[serde(rename = "O-1a", alias = "O1A")]
    O1A,
    /// Standing grass
    #[serde(rename = "O-1b", alias = "O1B")]
    O1B,
}

/// Rate of spread equation constants, `RSI = a·(1 − e^(−b·ISI))^c0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadConstants {
    pub a: f64,
    pub b: f64,
    pub c0: f64,
}

/// Reference constants for one fuel type
///
/// Loaded once as a static table; never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelTypeParameters {
    /// Basic RSI constants. `None` for M-1/M-2, which blend C-2 and D-1.
    pub spread: Option<SpreadConstants>,
    /// Buildup effect proportion constant
    pub q: f64,
    /// Average BUI used to derive the buildup effect
    pub bui0: f64,
    /// Default crown base height (m), Red Book fire intensity class table
    pub crown_base_height: f64,
    /// Crown fuel load (kg/m²)
    pub crown_fuel_load: f64,
    /// Default percent conifer for blended fuel types
    pub default_percent_conifer: f64,
    /// Default percent dead balsam fir for blended fuel types
    pub default_percent_dead_fir: f64,
    /// Grass fuel types cannot be evaluated without a curing percentage
    pub needs_grass_cure: bool,
    /// Fuel types with a crown layer that can contribute to TFC and CFB
    pub needs_crown_fuel_load: bool,
    /// Conifer/deciduous blend weighted by percent conifer (M-1, M-2)
    pub needs_percent_conifer: bool,
    /// Mixedwood blend weighted by percent dead fir (M-3, M-4)
    pub needs_percent_dead_fir: bool,
}

impl FuelTypeParameters {
    const fn conifer(a: f64, b: f64, c0: f64, q: f64, bui0: f64, cbh: f64, cfl: f64) -> Self {
        Self {
            spread: Some(SpreadConstants { a, b, c0 }),
            q,
            bui0,
            crown_base_height: cbh,
            crown_fuel_load: cfl,
            default_percent_conifer: 100.0,
            default_percent_dead_fir: 0.0,
            needs_grass_cure: false,
            needs_crown_fuel_load: true,
            needs_percent_conifer: false,
            needs_percent_dead_fir: false,
        }
    }

    const fn surface_only(a: f64, b: f64, c0: f64, q: f64, bui0: f64, cbh: f64) -> Self {
        Self {
            spread: Some(SpreadConstants { a, b, c0 }),
            q,
            bui0,
            crown_base_height: cbh,
            crown_fuel_load: 0.0,
            default_percent_conifer: 0.0,
            default_percent_dead_fir: 0.0,
            needs_grass_cure: false,
            needs_crown_fuel_load: false,
            needs_percent_conifer: false,
            needs_percent_dead_fir: false,
        }
    }
}

const C1_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(90.0, 0.0649, 4.5, 0.9, 72.0, 2.0, 0.75);
const C2_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(110.0, 0.0282, 1.5, 0.7, 64.0, 3.0, 0.8);
const C3_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(110.0, 0.0444, 3.0, 0.75, 62.0, 8.0, 1.15);
const C4_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(110.0, 0.0293, 1.5, 0.8, 66.0, 4.0, 1.2);
const C5_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(30.0, 0.0697, 4.0, 0.8, 56.0, 18.0, 1.2);
const C6_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(30.0, 0.08, 3.0, 0.8, 62.0, 7.0, 1.8);
const C7_PARAMS: FuelTypeParameters =
    FuelTypeParameters::conifer(45.0, 0.0305, 2.0, 0.85, 106.0, 10.0, 0.5);
const D1_PARAMS: FuelTypeParameters =
    FuelTypeParameters::surface_only(30.0, 0.0232, 1.6, 0.9, 32.0, 3.0);

const M1_PARAMS: FuelTypeParameters = FuelTypeParameters {
    spread: None,
    q: 0.8,
    bui0: 50.0,
    crown_base_height: 6.0,
    crown_fuel_load: 0.8,
    default_percent_conifer: 50.0,
    default_percent_dead_fir: 0.0,
    needs_grass_cure: false,
    needs_crown_fuel_load: true,
    needs_percent_conifer: true,
    needs_percent_dead_fir: false,
};

const M3_PARAMS: FuelTypeParameters = FuelTypeParameters {
    spread: Some(SpreadConstants { a: 120.0, b: 0.0572, c0: 1.4 }),
    q: 0.8,
    bui0: 50.0,
    crown_base_height: 6.0,
    crown_fuel_load: 0.8,
    default_percent_conifer: 0.0,
    default_percent_dead_fir: 60.0,
    needs_grass_cure: false,
    needs_crown_fuel_load: true,
    needs_percent_conifer: false,
    needs_percent_dead_fir: true,
};

const M4_PARAMS: FuelTypeParameters = FuelTypeParameters {
    spread: Some(SpreadConstants { a: 100.0, b: 0.0404, c0: 1.48 }),
    ..M3_PARAMS
};

const S1_PARAMS: FuelTypeParameters =
    FuelTypeParameters::surface_only(75.0, 0.0297, 1.3, 0.75, 38.0, 1.0);
const S2_PARAMS: FuelTypeParameters =
    FuelTypeParameters::surface_only(40.0, 0.0438, 1.7, 0.75, 63.0, 1.0);
const S3_PARAMS: FuelTypeParameters =
    FuelTypeParameters::surface_only(55.0, 0.0829, 3.2, 0.75, 31.0, 1.0);

const O1A_PARAMS: FuelTypeParameters = FuelTypeParameters {
    needs_grass_cure: true,
    ..FuelTypeParameters::surface_only(190.0, 0.031, 1.4, 1.0, 1.0, 1.0)
};
const O1B_PARAMS: FuelTypeParameters = FuelTypeParameters {
    needs_grass_cure: true,
    ..FuelTypeParameters::surface_only(250.0, 0.035, 1.7, 1.0, 1.0, 1.0)
};

impl FuelType {
    /// Every fuel type, in FBP publication order
    pub const ALL: [FuelType; 17] = [
        FuelType::C1,
        FuelType::C2,
        FuelType::C3,
        FuelType::C4,
        FuelType::C5,
        FuelType::C6,
        FuelType::C7,
        FuelType::D1,
        FuelType::M1,
        FuelType::M2,
        FuelType::M3,
        FuelType::M4,
        FuelType::S1,
        FuelType::S2,
        FuelType::S3,
        FuelType::O1A,
        FuelType::O1B,
    ];

    /// Red Book abbreviation, e.g. `"C-2"` or `"O-1a"`
    pub fn code(self) -> &'static str {
        match self {
            FuelType::C1 => "C-1",
            FuelType::C2 => "C-2",
            FuelType::C3 => "C-3",
            FuelType::C4 => "C-4",
            FuelType::C5 => "C-5",
            FuelType::C6 => "C-6",
            FuelType::C7 => "C-7",
            FuelType::D1 => "D-1",
            FuelType::M1 => "M-1",
            FuelType::M2 => "M-2",
            FuelType::M3 => "M-3",
            FuelType::M4 => "M-4",
            FuelType::S1 => "S-1",
            FuelType::S2 => "S-2",
            FuelType::S3 => "S-3",
            FuelType::O1A => "O-1a",
            FuelType::O1B => "O-1b",
        }
    }

    /// Reference constants for this fuel type
    pub fn parameters(self) -> &'static FuelTypeParameters {
        match self {
            FuelType::C1 => &C1_PARAMS,
            FuelType::C2 => &C2_PARAMS,
            FuelType::C3 => &C3_PARAMS,
            FuelType::C4 => &C4_PARAMS,
            FuelType::C5 => &C5_PARAMS,
            FuelType::C6 => &C6_PARAMS,
            FuelType::C7 => &C7_PARAMS,
            FuelType::D1 => &D1_PARAMS,
            FuelType::M1 | FuelType::M2 => &M1_PARAMS,
            FuelType::M3 => &M3_PARAMS,
            FuelType::M4 => &M4_PARAMS,
            FuelType::S1 => &S1_PARAMS,
            FuelType::S2 => &S2_PARAMS,
            FuelType::S3 => &S3_PARAMS,
            FuelType::O1A => &O1A_PARAMS,
            FuelType::O1B => &O1B_PARAMS,
        }
    }

    /// Grass fuel types (O-1a, O-1b)
    pub fn is_grass(self) -> bool {
        self.parameters().needs_grass_cure
    }

    /// Fuel types that never support a crown fire (D-1, S-*, O-1*)
    pub fn has_crown(self) -> bool {
        self.parameters().needs_crown_fuel_load
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FuelType {
    type Err = FireDangerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let fuel = match normalised.as_str() {
            "C1" => FuelType::C1,
            "C2" => FuelType::C2,
            "C3" => FuelType::C3,
            "C4" => FuelType::C4,
            "C5" => FuelType::C5,
            "C6" => FuelType::C6,
            "C7" => FuelType::C7,
            "D1" => FuelType::D1,
            "M1" => FuelType::M1,
            "M2" => FuelType::M2,
            "M3" => FuelType::M3,
            "M4" => FuelType::M4,
            "S1" => FuelType::S1,
            "S2" => FuelType::S2,
            "S3" => FuelType::S3,
            "O1A" => FuelType::O1A,
            "O1B" => FuelType::O1B,
            _ => return Err(FireDangerError::UnknownFuelType(s.to_string())),
        };
        Ok(fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("C-2".parse::<FuelType>().unwrap(), FuelType::C2);
        assert_eq!("c2".parse::<FuelType>().unwrap(), FuelType::C2);
        assert_eq!("O-1a".parse::<FuelType>().unwrap(), FuelType::O1A);
        assert_eq!("O1B".parse::<FuelType>().unwrap(), FuelType::O1B);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let err = "Z-9".parse::<FuelType>().unwrap_err();
        assert_eq!(err, FireDangerError::UnknownFuelType("Z-9".to_string()));
        assert!("D-2".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.code().parse::<FuelType>().unwrap(), fuel);
        }
    }

    #[test]
    fn test_capability_flags() {
        assert!(FuelType::O1A.is_grass());
        assert!(FuelType::O1B.is_grass());
        assert!(!FuelType::C2.is_grass());

        assert!(FuelType::C6.has_crown());
        assert!(FuelType::M2.has_crown());
        assert!(!FuelType::D1.has_crown());
        assert!(!FuelType::S1.has_crown());
        assert!(!FuelType::O1B.has_crown());

        assert!(FuelType::M1.parameters().needs_percent_conifer);
        assert!(FuelType::M4.parameters().needs_percent_dead_fir);
        assert!(FuelType::M1.parameters().spread.is_none());
    }

    #[test]
    fn test_serde_uses_red_book_codes() {
        let json = serde_json::to_string(&FuelType::O1A).unwrap();
        assert_eq!(json, "\"O-1a\"");
        let parsed: FuelType = serde_json::from_str("\"C2\"").unwrap();
        assert_eq!(parsed, FuelType::C2);
    }
}
