use rand::Rng;

use crate::models::{Entry, WallTime};

/// Generate a plausible time that this entry's ears are showing
///
/// Which ear is the hour hand, and whether it is morning or afternoon, are
/// both a coin flip. The result is not an exact inverse of the closeness
/// score, since ears never line up perfectly with a clock face.
pub fn generate_time_for_entry(entry: &Entry, rng: &mut impl Rng) -> WallTime {
    let (hour_angle, minute_angle) = if rng.gen_bool(0.5) {
        (entry.hand_a_angle, entry.hand_b_angle)
    } else {
        (entry.hand_b_angle, entry.hand_a_angle)
    };

    let mut hour = hour_from_angle(hour_angle);
    if rng.gen_bool(0.5) {
        hour = (hour + 12) % 24;
    }

    WallTime {
        hour,
        minute: minute_from_angle(minute_angle),
    }
}

/// Hour (0-11) that an hour hand at `angle` has passed
#[inline]
fn hour_from_angle(angle: u16) -> u32 {
    (angle as u32 % 360) / 30
}

/// Minute (0-59) a minute hand at `angle` is showing
#[inline]
fn minute_from_angle(angle: u16) -> u32 {
    (angle as u32 % 360) / 6
}
