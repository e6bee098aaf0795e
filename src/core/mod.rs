// Core algorithm exports
pub mod angles;
pub mod closeness;
pub mod coverage;
pub mod filters;
pub mod generator;
pub mod matcher;

pub use angles::{angle_diff, normalize_angle, TargetAngles};
pub use closeness::closeness;
pub use coverage::{red_scale, CoverageReport, MinuteCoverage};
pub use filters::MatchWindow;
pub use generator::generate_time_for_entry;
pub use matcher::Matcher;
