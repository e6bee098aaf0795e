use serde::Serialize;

use crate::core::{angles::TargetAngles, matcher::Matcher};
use crate::models::{Entry, WallTime};

/// Minutes on a 12-hour dial
pub const DIAL_MINUTES: u32 = 12 * 60;

/// Lower channel value of the red/green colour scale
const SCALE_LOW: f64 = 183.0;
/// Upper channel value of the red/green colour scale
const SCALE_HIGH: f64 = 255.0;

/// How well the catalog covers one minute of the dial
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinuteCoverage {
    pub time: WallTime,
    pub match_count: usize,
    pub best_closeness: Option<f64>,
}

impl MinuteCoverage {
    pub fn is_covered(&self) -> bool {
        self.match_count > 0
    }

    /// 1.0 for an exact match, falling to 0.0 at the threshold or with no match
    pub fn quality(&self, max_threshold: f64) -> f64 {
        match self.best_closeness {
            Some(best) if max_threshold > 0.0 => clamp(0.0, 1.0 - best / max_threshold, 1.0),
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}

/// Match statistics for every minute from 12:00 to 11:59
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub catalog_size: usize,
    pub max_threshold: f64,
    pub covered: usize,
    pub coverage_ratio: f64,
    pub minutes: Vec<MinuteCoverage>,
}

impl CoverageReport {
    /// Run the matcher against every minute of the dial
    pub fn build(matcher: &Matcher, entries: &[Entry]) -> Self {
        let minutes: Vec<MinuteCoverage> = (0..DIAL_MINUTES)
            .map(|m| {
                let time = WallTime {
                    hour: m / 60,
                    minute: m % 60,
                };
                let matches = matcher.find_matching_entries(entries, &TargetAngles::from_wall_time(time));
                MinuteCoverage {
                    time,
                    match_count: matches.len(),
                    best_closeness: matches.first().map(|m| m.closeness),
                }
            })
            .collect();

        let covered = minutes.iter().filter(|m| m.is_covered()).count();

        tracing::debug!("Coverage: {}/{} minutes have a match", covered, DIAL_MINUTES);

        Self {
            catalog_size: entries.len(),
            max_threshold: matcher.thresholds().max,
            covered,
            coverage_ratio: covered as f64 / DIAL_MINUTES as f64,
            minutes,
        }
    }

    /// Coverage for each minute of the given hour (0-11)
    ///
    /// Relies on `build` producing exactly `DIAL_MINUTES` entries.
    pub fn hour(&self, hour: u32) -> &[MinuteCoverage] {
        debug_assert_eq!(self.minutes.len(), DIAL_MINUTES as usize);
        let start = (hour % 12) as usize * 60;
        &self.minutes[start..start + 60]
    }
}

/// Clamp `val` between `low` and `hi`
#[inline]
pub fn clamp(low: f64, val: f64, hi: f64) -> f64 {
    val.min(hi).max(low)
}

/// Interpolate a background colour from red (0.0) to green (1.0)
///
/// Blue follows the lower of the red and green channels, capped at the low end
/// of the scale.
pub fn red_scale(value: f64) -> String {
    let diff = value * (SCALE_HIGH - SCALE_LOW);
    let r = clamp(0.0, SCALE_HIGH - diff, 255.0).round() as u8;
    let g = clamp(0.0, SCALE_LOW + diff, 255.0).round() as u8;
    let b = r.min(g).min(SCALE_LOW as u8);

    format!("rgb({}, {}, {})", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_scale_endpoints() {
        assert_eq!(red_scale(0.0), "rgb(255, 183, 183)");
        assert_eq!(red_scale(1.0), "rgb(183, 255, 183)");
        assert_eq!(red_scale(0.5), "rgb(219, 219, 183)");
    }

    #[test]
    fn test_red_scale_clamps() {
        assert_eq!(red_scale(10.0), "rgb(0, 255, 0)");
        assert_eq!(red_scale(-10.0), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_quality() {
        let time = WallTime { hour: 0, minute: 0 };
        let exact = MinuteCoverage { time, match_count: 1, best_closeness: Some(0.0) };
        let half = MinuteCoverage { time, match_count: 1, best_closeness: Some(45.0) };
        let none = MinuteCoverage { time, match_count: 0, best_closeness: None };

        assert_eq!(exact.quality(90.0), 1.0);
        assert_eq!(half.quality(90.0), 0.5);
        assert_eq!(none.quality(90.0), 0.0);
        assert!(!none.is_covered());
    }

    #[test]
    fn test_report_empty_catalog() {
        let report = CoverageReport::build(&Matcher::default(), &[]);
        assert_eq!(report.minutes.len(), DIAL_MINUTES as usize);
        assert_eq!(report.covered, 0);
        assert_eq!(report.coverage_ratio, 0.0);
    }

    #[test]
    fn test_report_covers_around_entry() {
        // 12:00 exactly
        let entries = vec![Entry::new("noon.jpg", 0, 0)];
        let report = CoverageReport::build(&Matcher::default(), &entries);

        let noon = report.hour(0)[0];
        assert_eq!(noon.match_count, 1);
        assert_eq!(noon.best_closeness, Some(0.0));

        // 6:00 is as far from 12:00 as the dial allows
        let six = report.hour(6)[0];
        assert!(!six.is_covered());

        assert!(report.covered > 0 && report.covered < DIAL_MINUTES as usize);
    }

    #[test]
    fn test_hours_partition_the_dial() {
        let entries = vec![Entry::new("noon.jpg", 0, 0)];
        let report = CoverageReport::build(&Matcher::default(), &entries);

        for hour in 0..12 {
            let minutes = report.hour(hour);
            assert_eq!(minutes.len(), 60);
            assert_eq!(minutes[0].time, WallTime { hour, minute: 0 });
            assert_eq!(minutes[59].time, WallTime { hour, minute: 59 });
        }
        // Wraps rather than running off the end
        assert_eq!(report.hour(12)[0].time, WallTime { hour: 0, minute: 0 });
    }
}
