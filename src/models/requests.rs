use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for the diagnostic matches endpoint
///
/// Either `time` (as accepted by the page routes) or both raw angles must be set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    #[validate(length(min = 1))]
    pub time: Option<String>,
    #[validate(range(min = 0.0, max = 359.999))]
    #[serde(alias = "hourAngle")]
    pub hour_angle: Option<f64>,
    #[validate(range(min = 0.0, max = 359.999))]
    #[serde(alias = "minuteAngle")]
    pub minute_angle: Option<f64>,
}
