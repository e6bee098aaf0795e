use chrono::Timelike;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Focus point used when an entry does not specify one
pub const DEFAULT_FOCUS: f64 = 0.5;

/// Name shown when neither the entry nor the configured fallbacks offer one
const LAST_RESORT_NAME: &str = "Bun";

/// A catalog entry: one bun photo and the clock positions of its ears
///
/// Neither ear is tied to the hour or minute hand; that is decided per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Entry {
    /// Image filename, unique within a catalog
    #[validate(length(min = 1))]
    #[serde(rename = "filename")]
    pub id: String,
    #[serde(rename = "name", default)]
    pub display_name: Option<DisplayName>,
    #[serde(rename = "source", default)]
    pub attribution: Option<Attribution>,
    #[validate(range(max = 359))]
    #[serde(rename = "left_ear")]
    pub hand_a_angle: u16,
    #[validate(range(max = 359))]
    #[serde(rename = "right_ear")]
    pub hand_b_angle: u16,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_focus")]
    pub focus_x: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_focus")]
    pub focus_y: f64,
}

fn default_focus() -> f64 { DEFAULT_FOCUS }

impl Entry {
    /// Build an entry with no name, credit or focus metadata
    pub fn new(id: impl Into<String>, hand_a_angle: u16, hand_b_angle: u16) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            attribution: None,
            hand_a_angle: hand_a_angle % 360,
            hand_b_angle: hand_b_angle % 360,
            focus_x: DEFAULT_FOCUS,
            focus_y: DEFAULT_FOCUS,
        }
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.display_name = Some(name);
        self
    }

    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Both ear angles, in catalog order
    #[inline]
    pub fn hands(&self) -> (f64, f64) {
        (self.hand_a_angle as f64, self.hand_b_angle as f64)
    }

    /// Pick the name to show for this bun
    ///
    /// A single known name is returned as-is. A list of candidates yields one at
    /// random, and an unknown name falls back to a random pick from `fallbacks`.
    pub fn display_name<'a>(&'a self, rng: &mut impl Rng, fallbacks: &'a [String]) -> &'a str {
        let picked = match &self.display_name {
            Some(DisplayName::Single(name)) => Some(name),
            Some(DisplayName::Candidates(names)) => names.choose(rng),
            None => None,
        };

        picked
            .or_else(|| fallbacks.choose(rng))
            .map(String::as_str)
            .unwrap_or(LAST_RESORT_NAME)
    }
}

/// Known name(s) of a bun
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    Single(String),
    Candidates(Vec<String>),
}

impl DisplayName {
    pub fn is_empty(&self) -> bool {
        match self {
            DisplayName::Single(name) => name.is_empty(),
            DisplayName::Candidates(names) => names.is_empty() || names.iter().any(String::is_empty),
        }
    }
}

/// Credit for the bun's human
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Platform where the image was shared (eg "Reddit")
    pub platform: String,
    /// Author's username
    pub author: String,
    /// Link to the original post
    pub url: String,
}

impl Attribution {
    /// Human readable credit line, eg "someone on Reddit"
    pub fn credit(&self) -> String {
        format!("{} on {}", self.author, self.platform)
    }
}

/// An entry together with how far its ears are from the requested time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredEntry<'a> {
    /// Total angular distance in degrees, lower is better
    pub closeness: f64,
    pub entry: &'a Entry,
}

/// Thresholds (in degrees) controlling which entries count as matches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchThresholds {
    /// Entries with a closeness above this never match
    pub max: f64,
    /// Width of the window above the best closeness in which entries still qualify
    pub also_valid: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            max: 90.0,
            also_valid: 20.0,
        }
    }
}

/// A wall-clock time reduced to what a clock face can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallTime {
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
}

impl WallTime {
    /// Returns `None` when the hour or minute is out of range
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Hour as shown on a 12-hour dial (1-12)
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}
