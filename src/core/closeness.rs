use crate::core::angles::{angle_diff, TargetAngles};
use crate::models::Entry;

/// Total angular distance (degrees) between a target time and an entry's ears
///
/// Either ear may stand for either hand, so both assignments are scored and
/// the better one wins:
///
/// ```text
/// assign_a = diff(hour, ear_a) + diff(minute, ear_b)
/// assign_b = diff(hour, ear_b) + diff(minute, ear_a)
/// closeness = min(assign_a, assign_b)
/// ```
///
/// The result lies in `[0, 360]`.
#[inline]
pub fn closeness(target: &TargetAngles, entry: &Entry) -> f64 {
    let (hand_a, hand_b) = entry.hands();
    let assign_a = angle_diff(target.hour, hand_a) + angle_diff(target.minute, hand_b);
    let assign_b = angle_diff(target.hour, hand_b) + angle_diff(target.minute, hand_a);
    assign_a.min(assign_b)
}
