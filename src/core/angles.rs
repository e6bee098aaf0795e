use crate::models::WallTime;
use serde::Serialize;

/// Degrees in a full turn of the dial
pub const FULL_TURN: f64 = 360.0;

/// Circular distance between two clock angles in degrees
///
/// Always in `[0, 180]` and symmetric in its arguments.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % FULL_TURN;
    diff.min(FULL_TURN - diff)
}

/// Wrap any angle into `[0, 360)`
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Positions of the hour and minute hands for a requested time
///
/// 0 degrees is 12 o'clock, increasing clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetAngles {
    pub hour: f64,
    pub minute: f64,
}

impl TargetAngles {
    pub fn new(hour: f64, minute: f64) -> Self {
        Self {
            hour: normalize_angle(hour),
            minute: normalize_angle(minute),
        }
    }

    /// Hand positions on an analog clock
    ///
    /// The hour hand creeps forward half a degree per minute.
    pub fn from_wall_time(time: WallTime) -> Self {
        let minute = time.minute as f64;
        Self::new(
            (time.hour % 12) as f64 * 30.0 + minute * 0.5,
            minute * 6.0,
        )
    }
}

impl From<WallTime> for TargetAngles {
    fn from(time: WallTime) -> Self {
        Self::from_wall_time(time)
    }
}
