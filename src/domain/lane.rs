// SPDX-License-Identifier: MPL-2.0
//! Page structure: platform lanes and the genre header.

use super::game::Platform;
use crate::config::defaults::{
    FAST_LANE_PERIOD_SECS, MEDIUM_LANE_PERIOD_SECS, SLOW_LANE_PERIOD_SECS,
};
use serde::{Deserialize, Serialize};

/// Pace of a lane's bounce animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneSpeed {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl LaneSpeed {
    /// Length of one back-and-forth period, in seconds.
    #[must_use]
    pub fn animation_secs(self) -> u32 {
        match self {
            LaneSpeed::Slow => SLOW_LANE_PERIOD_SECS,
            LaneSpeed::Medium => MEDIUM_LANE_PERIOD_SECS,
            LaneSpeed::Fast => FAST_LANE_PERIOD_SECS,
        }
    }

    /// CSS-style modifier name ("slow", "medium", "fast").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LaneSpeed::Slow => "slow",
            LaneSpeed::Medium => "medium",
            LaneSpeed::Fast => "fast",
        }
    }
}

/// One horizontal lane of game cards, listing a single platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneSpec {
    pub id: String,
    pub platform: Platform,
    #[serde(default)]
    pub speed: LaneSpeed,
}

impl LaneSpec {
    #[must_use]
    pub fn new(id: impl Into<String>, platform: Platform, speed: LaneSpeed) -> Self {
        Self {
            id: id.into(),
            platform,
            speed,
        }
    }

    /// Lane header text; same as the platform label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.platform.label()
    }
}

/// The four platform lanes in page order.
#[must_use]
pub fn default_lanes() -> Vec<LaneSpec> {
    vec![
        LaneSpec::new("pc", Platform::Pc, LaneSpeed::Slow),
        LaneSpec::new("ps", Platform::PlayStation, LaneSpeed::Medium),
        LaneSpec::new("xb", Platform::Xbox, LaneSpeed::Fast),
        LaneSpec::new("mb", Platform::Mobile, LaneSpeed::Slow),
    ]
}

/// An entry of the genre header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: &'static str,
}

const GENRE_NAMES: [&str; 10] = [
    "Action",
    "Adventure",
    "Role-Playing (RPG)",
    "Simulation",
    "Strategy",
    "Sports",
    "Puzzle",
    "Horror",
    "Platformer",
    "Battle Royale",
];

/// Genres listed in the page header, ids starting at 1.
#[must_use]
pub fn default_genres() -> Vec<Genre> {
    GENRE_NAMES
        .iter()
        .copied()
        .zip(1..)
        .map(|(name, id)| Genre { id, name })
        .collect()
}
