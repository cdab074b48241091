//! The three apps served by the backend and their free-use accounting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An app served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Product {
    /// Learning app.
    Catsup,
    /// Security app.
    Bbqe,
    /// Wellness app.
    Relish,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Catsup, Product::Bbqe, Product::Relish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Catsup => "CATSUP",
            Product::Bbqe => "BBQE",
            Product::Relish => "RELISH",
        }
    }

    /// JSON field the apps read their remaining free uses from.
    pub fn remaining_field(&self) -> &'static str {
        match self {
            Product::Catsup => "questionsRemaining",
            Product::Bbqe => "checksRemaining",
            Product::Relish => "wisdomRemaining",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage action recorded for each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Question,
    ThreatCheck,
    LinkScan,
    WifiScan,
    Wisdom,
}

impl Action {
    pub fn product(&self) -> Product {
        match self {
            Action::Question => Product::Catsup,
            Action::ThreatCheck | Action::LinkScan | Action::WifiScan => Product::Bbqe,
            Action::Wisdom => Product::Relish,
        }
    }
}

/// Free-use standing of one customer for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaStatus {
    pub subscribed: bool,
    pub used: u32,
    pub limit: u32,
}

impl QuotaStatus {
    pub fn new(subscribed: bool, used: u32, limit: u32) -> Self {
        Self {
            subscribed,
            used,
            limit,
        }
    }

    /// Whether one more request may be served.
    pub fn allows_request(&self) -> bool {
        self.subscribed || self.used < self.limit
    }

    /// Free uses left once the current request has been served.
    pub fn remaining_after_use(&self, unlimited: u32) -> u32 {
        if self.subscribed {
            unlimited
        } else {
            self.limit.saturating_sub(self.used.saturating_add(1))
        }
    }
}
