//! Bnuuy Time - tells the time with bunny ears
//!
//! Given a clock time, picks the photo of a rabbit whose ears look most like
//! the hands of a clock showing it. Also works backwards, generating a time a
//! given bun's ears could be saying.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{angle_diff, closeness, generate_time_for_entry, Matcher, TargetAngles};
pub use models::{Attribution, DisplayName, Entry, MatchThresholds, ScoredEntry, WallTime};
pub use services::{Catalog, CatalogError};
