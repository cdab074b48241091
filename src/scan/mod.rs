//! Heuristic link and Wi-Fi risk scoring.
//!
//! Both scorers are pure functions over the static tables in [`tables`]:
//! each rule that fires adds a fixed number of points and one human-readable
//! flag, the total is clamped to `0..=100`, and a level plus a canned advice
//! string are derived from fixed thresholds.

pub mod link;
pub mod network;
pub mod tables;

pub use link::score_link;
pub use network::score_network;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;
/// Scores at or above this are HIGH.
pub const HIGH_THRESHOLD: u8 = 60;
/// Scores at or above this (and below HIGH) are MEDIUM.
pub const MEDIUM_THRESHOLD: u8 = 30;

/// Flag appended when no rule fired.
pub const NO_PATTERNS_FLAG: &str = "No suspicious patterns detected";

/// Threshold band shared by both scorers before it is named per scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    None,
    Low,
    Medium,
    High,
}

impl Band {
    pub(crate) fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Band::High
        } else if score >= MEDIUM_THRESHOLD {
            Band::Medium
        } else if score > 0 {
            Band::Low
        } else {
            Band::None
        }
    }
}

/// Risk level of a scanned link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkRisk {
    Clean,
    Low,
    Medium,
    High,
}

impl From<Band> for LinkRisk {
    fn from(band: Band) -> Self {
        match band {
            Band::None => LinkRisk::Clean,
            Band::Low => LinkRisk::Low,
            Band::Medium => LinkRisk::Medium,
            Band::High => LinkRisk::High,
        }
    }
}

impl fmt::Display for LinkRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkRisk::Clean => "CLEAN",
            LinkRisk::Low => "LOW",
            LinkRisk::Medium => "MEDIUM",
            LinkRisk::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Risk level of a scanned wireless network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkRisk {
    Safe,
    Low,
    Medium,
    High,
}

impl From<Band> for NetworkRisk {
    fn from(band: Band) -> Self {
        match band {
            Band::None => NetworkRisk::Safe,
            Band::Low => NetworkRisk::Low,
            Band::Medium => NetworkRisk::Medium,
            Band::High => NetworkRisk::High,
        }
    }
}

impl fmt::Display for NetworkRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetworkRisk::Safe => "SAFE",
            NetworkRisk::Low => "LOW",
            NetworkRisk::Medium => "MEDIUM",
            NetworkRisk::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Result of scoring a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkVerdict {
    pub level: LinkRisk,
    pub score: u8,
    pub flags: Vec<String>,
    pub summary: String,
}

/// Result of scoring a wireless network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkVerdict {
    pub level: NetworkRisk,
    pub score: u8,
    pub flags: Vec<String>,
    pub recommendation: String,
}

/// Append-only accumulator of rule hits.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    points: u32,
    flags: Vec<String>,
}

impl Findings {
    pub(crate) fn add(&mut self, points: u32, flag: impl Into<String>) {
        self.points = self.points.saturating_add(points);
        self.flags.push(flag.into());
    }

    /// Clamp the total and fall back to the default flag when nothing fired.
    pub(crate) fn finish(mut self) -> (u8, Band, Vec<String>) {
        let score = self.points.min(u32::from(MAX_SCORE)) as u8;
        if self.flags.is_empty() {
            self.flags.push(NO_PATTERNS_FLAG.to_string());
        }
        (score, Band::from_score(score), self.flags)
    }
}
