use serde::{Deserialize, Serialize};
use crate::core::Matcher;
use crate::models::domain::{Entry, ScoredEntry};

/// Match with the weight it carries in the random pick
#[derive(Debug, Clone, Serialize)]
pub struct WeightedMatch<'a> {
    pub closeness: f64,
    pub weight: f64,
    pub entry: &'a Entry,
}

/// Response for the diagnostic matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MatchesResponse<'a> {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub best_closeness: Option<f64>,
    pub matches: Vec<WeightedMatch<'a>>,
}

impl<'a> MatchesResponse<'a> {
    /// Attach to each match the weight the matcher would give it
    pub fn from_matches(
        hour_angle: f64,
        minute_angle: f64,
        matches: &[ScoredEntry<'a>],
        matcher: &Matcher,
    ) -> Self {
        let best_closeness = matches
            .iter()
            .map(|m| m.closeness)
            .min_by(|a, b| a.total_cmp(b));

        let matches = matches
            .iter()
            .map(|m| WeightedMatch {
                closeness: m.closeness,
                weight: matcher.weight(m.closeness, best_closeness.unwrap_or(m.closeness)),
                entry: m.entry,
            })
            .collect();

        Self {
            hour_angle,
            minute_angle,
            best_closeness,
            matches,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
