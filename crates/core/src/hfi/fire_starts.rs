//! Fire start ranges and their prep level lookup tables
//!
//! A forecaster picks the expected number of fire starts for each prep day.
//! Together with the day's mean intensity group that selects the
//! preparedness level (1-6).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected number of fire starts in a planning area for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum FireStartRange {
    #[default]
    #[serde(rename = "0-1")]
    ZeroToOne,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "2-3")]
    TwoToThree,
    #[serde(rename = "3-6")]
    ThreeToSix,
    #[serde(rename = "6+")]
    SixPlus,
}

impl FireStartRange {
    /// Used for prep days the forecaster hasn't filled in
    pub const LOWEST: FireStartRange = FireStartRange::ZeroToOne;

    pub const ALL: [FireStartRange; 5] = [
        FireStartRange::ZeroToOne,
        FireStartRange::OneToTwo,
        FireStartRange::TwoToThree,
        FireStartRange::ThreeToSix,
        FireStartRange::SixPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FireStartRange::ZeroToOne => "0-1",
            FireStartRange::OneToTwo => "1-2",
            FireStartRange::TwoToThree => "2-3",
            FireStartRange::ThreeToSix => "3-6",
            FireStartRange::SixPlus => "6+",
        }
    }

    /// Prep level for mean intensity groups 1 through 5
    fn lookup_table(self) -> [u8; 5] {
        match self {
            FireStartRange::ZeroToOne => [1, 1, 2, 3, 4],
            FireStartRange::OneToTwo => [1, 2, 3, 4, 5],
            FireStartRange::TwoToThree => [2, 3, 4, 5, 6],
            FireStartRange::ThreeToSix => [3, 4, 5, 6, 6],
            FireStartRange::SixPlus => [4, 5, 6, 6, 6],
        }
    }

    /// Prep level for a whole-number mean intensity group
    ///
    /// `None` outside 1..=5.
    pub fn prep_level_for(self, intensity_group: u8) -> Option<u8> {
        match intensity_group {
            1..=5 => Some(self.lookup_table()[usize::from(intensity_group - 1)]),
            _ => None,
        }
    }
}

impl fmt::Display for FireStartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fire start ranges for each prep day, padded with [`FireStartRange::LOWEST`]
/// when fewer than `prep_days` were supplied
pub fn pad_fire_starts(ranges: &[FireStartRange], prep_days: usize) -> Vec<FireStartRange> {
    let mut padded: Vec<FireStartRange> = ranges.iter().copied().take(prep_days).collect();
    padded.resize(prep_days, FireStartRange::LOWEST);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tables() {
        assert_eq!(FireStartRange::ZeroToOne.prep_level_for(1), Some(1));
        assert_eq!(FireStartRange::ZeroToOne.prep_level_for(5), Some(4));
        assert_eq!(FireStartRange::TwoToThree.prep_level_for(3), Some(4));
        assert_eq!(FireStartRange::SixPlus.prep_level_for(2), Some(5));
        assert_eq!(FireStartRange::SixPlus.prep_level_for(5), Some(6));
        assert_eq!(FireStartRange::OneToTwo.prep_level_for(0), None);
        assert_eq!(FireStartRange::OneToTwo.prep_level_for(6), None);
    }

    #[test]
    fn test_more_fire_starts_never_lowers_prep_level() {
        for group in 1..=5 {
            let levels: Vec<u8> = FireStartRange::ALL
                .iter()
                .filter_map(|range| range.prep_level_for(group))
                .collect();
            assert!(levels.windows(2).all(|w| w[0] <= w[1]), "group {group}: {levels:?}");
        }
    }

    #[test]
    fn test_padding() {
        let padded = pad_fire_starts(&[FireStartRange::ThreeToSix], 3);
        assert_eq!(
            padded,
            vec![FireStartRange::ThreeToSix, FireStartRange::LOWEST, FireStartRange::LOWEST]
        );
        assert_eq!(pad_fire_starts(&FireStartRange::ALL, 2).len(), 2);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&FireStartRange::SixPlus).unwrap();
        assert_eq!(json, "\"6+\"");
        let range: FireStartRange = serde_json::from_str("\"2-3\"").unwrap();
        assert_eq!(range, FireStartRange::TwoToThree);
    }
}
