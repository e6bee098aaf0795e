// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Attribution, DisplayName, Entry, MatchThresholds, ScoredEntry, WallTime, DEFAULT_FOCUS};
pub use requests::MatchQuery;
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse, WeightedMatch};
