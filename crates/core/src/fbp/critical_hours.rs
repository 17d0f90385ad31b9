//! Critical hours: the part of the day when HFI exceeds a threshold
//!
//! Hours are on a 24 h clock and the window may wrap past midnight, in which
//! case `end < start` (hours 22, 23, 0 and 1 give `22..=1`).

use crate::error::{FireDangerError, Result};
use serde::{Deserialize, Serialize};

const HOURS_PER_DAY: usize = 24;

/// Head fire intensity forecast for one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyHfi {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Head fire intensity (kW/m)
    pub hfi: f64,
}

/// Inclusive window of critical hours, `end` normalised modulo 24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriticalHours {
    pub start: u8,
    pub end: u8,
}

impl CriticalHours {
    /// Number of hours in the window
    pub fn duration_hours(self) -> u8 {
        (self.end + 24 - self.start) % 24 + 1
    }

    /// Whether the window runs past midnight
    pub fn wraps_midnight(self) -> bool {
        self.end < self.start
    }

    /// Whether `hour` falls inside the window
    pub fn contains(self, hour: u8) -> bool {
        if self.wraps_midnight() {
            hour >= self.start || hour <= self.end
        } else {
            (self.start..=self.end).contains(&hour)
        }
    }
}

/// Smallest circular window covering every hour with HFI above `threshold`
///
/// NaN intensities never count as above the threshold. Gaps inside the
/// window are absorbed: the window is the complement of the longest run of
/// quiet hours. When two windows are equally short the one that does not
/// cross midnight wins.
///
/// # Returns
/// `Ok(None)` when no hour exceeds the threshold
///
/// # Errors
/// [`FireDangerError::InvalidHour`] for an hour outside 0..24
pub fn critical_hours(series: &[HourlyHfi], threshold: f64) -> Result<Option<CriticalHours>> {
    let mut above = [false; HOURS_PER_DAY];
    for entry in series {
        let hour = entry.hour as usize;
        if hour >= HOURS_PER_DAY {
            return Err(FireDangerError::InvalidHour(entry.hour));
        }
        if entry.hfi > threshold {
            above[hour] = true;
        }
    }

    let critical: Vec<usize> = (0..HOURS_PER_DAY).filter(|&h| above[h]).collect();
    if critical.is_empty() {
        return Ok(None);
    }
    if critical.len() == HOURS_PER_DAY {
        return Ok(Some(CriticalHours { start: 0, end: 23 }));
    }

    // Each critical hour followed by its next critical hour around the clock
    let mut best: Option<(usize, CriticalHours)> = None;
    for (i, &last) in critical.iter().enumerate() {
        let next = critical[(i + 1) % critical.len()];
        let gap = (next + HOURS_PER_DAY - last - 1) % HOURS_PER_DAY;
        let candidate = CriticalHours {
            start: next as u8,
            end: last as u8,
        };
        let better = match best {
            None => true,
            Some((best_gap, _)) => {
                gap > best_gap || (gap == best_gap && !candidate.wraps_midnight())
            }
        };
        if better {
            best = Some((gap, candidate));
        }
    }

    Ok(best.map(|(_, window)| window))
}

/// Linear-interpolated percentile of sorted values
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - rank.floor())
}

/// One representative window for a set of critical hours (e.g. every
/// fuel type in a fire zone)
///
/// With fewer than three windows, the earliest start and latest end are
/// used. Otherwise the start is the floor of the 25th percentile of starts
/// and the end the ceiling of the 75th percentile of ends.
///
/// # Returns
/// `None` for an empty slice
pub fn representative_critical_hours(hours: &[CriticalHours]) -> Option<CriticalHours> {
    if hours.is_empty() {
        return None;
    }
    let mut starts: Vec<f64> = hours.iter().map(|h| f64::from(h.start)).collect();
    let mut ends: Vec<f64> = hours.iter().map(|h| f64::from(h.end)).collect();
    starts.sort_by(f64::total_cmp);
    ends.sort_by(f64::total_cmp);

    let (start, end) = if hours.len() < 3 {
        (starts[0], ends[ends.len() - 1])
    } else {
        (percentile(&starts, 25.0).floor(), percentile(&ends, 75.0).ceil())
    };

    Some(CriticalHours {
        start: start as u8,
        end: end as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(above: &[u32]) -> Vec<HourlyHfi> {
        (0..24)
            .map(|hour| HourlyHfi {
                hour,
                hfi: if above.contains(&hour) { 5000.0 } else { 1000.0 },
            })
            .collect()
    }

    #[test]
    fn test_afternoon_window() {
        let window = critical_hours(&series(&[13, 14, 15, 16, 17]), 4000.0).unwrap();
        assert_eq!(window, Some(CriticalHours { start: 13, end: 17 }));
        assert_eq!(window.unwrap().duration_hours(), 5);
    }

    #[test]
    fn test_window_across_midnight_is_normalised() {
        let window = critical_hours(&series(&[22, 23, 0, 1]), 4000.0).unwrap().unwrap();
        assert_eq!(window, CriticalHours { start: 22, end: 1 });
        assert!(window.wraps_midnight());
        assert_eq!(window.duration_hours(), 4);
        assert!(window.contains(0));
        assert!(!window.contains(12));
    }

    #[test]
    fn test_no_qualifying_hour_is_undefined() {
        assert_eq!(critical_hours(&series(&[]), 4000.0).unwrap(), None);
        assert_eq!(critical_hours(&[], 4000.0).unwrap(), None);
    }

    #[test]
    fn test_threshold_is_exclusive_and_nan_ignored() {
        let hours = [
            HourlyHfi { hour: 10, hfi: 4000.0 },
            HourlyHfi { hour: 11, hfi: f64::NAN },
            HourlyHfi { hour: 12, hfi: 4000.5 },
        ];
        let window = critical_hours(&hours, 4000.0).unwrap();
        assert_eq!(window, Some(CriticalHours { start: 12, end: 12 }));
    }

    #[test]
    fn test_interior_gap_is_absorbed() {
        let window = critical_hours(&series(&[12, 13, 15, 16]), 4000.0).unwrap();
        assert_eq!(window, Some(CriticalHours { start: 12, end: 16 }));
    }

    #[test]
    fn test_whole_day() {
        let all: Vec<u32> = (0..24).collect();
        let window = critical_hours(&series(&all), 4000.0).unwrap();
        assert_eq!(window, Some(CriticalHours { start: 0, end: 23 }));
    }

    #[test]
    fn test_invalid_hour_is_an_error() {
        let hours = [HourlyHfi { hour: 24, hfi: 5000.0 }];
        assert_eq!(critical_hours(&hours, 4000.0), Err(FireDangerError::InvalidHour(24)));
    }

    #[test]
    fn test_representative_hours_few_samples() {
        let hours = [
            CriticalHours { start: 13, end: 17 },
            CriticalHours { start: 11, end: 19 },
        ];
        assert_eq!(
            representative_critical_hours(&hours),
            Some(CriticalHours { start: 11, end: 19 })
        );
        assert_eq!(representative_critical_hours(&[]), None);
    }

    #[test]
    fn test_representative_hours_percentiles() {
        // starts 10, 12, 13, 14: p25 = 11.5 -> 11; ends 16, 17, 18, 20: p75 = 18.5 -> 19
        let hours = [
            CriticalHours { start: 12, end: 18 },
            CriticalHours { start: 10, end: 16 },
            CriticalHours { start: 14, end: 20 },
            CriticalHours { start: 13, end: 17 },
        ];
        assert_eq!(
            representative_critical_hours(&hours),
            Some(CriticalHours { start: 11, end: 19 })
        );
    }
}
