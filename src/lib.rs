//! SAUC-E: shared backend for the CATSUP, BBQE and RELISH apps.

/// HTTP routes and handlers
pub mod api;
/// Service configuration
pub mod config;
/// Error types
pub mod error;
/// Tracing setup
pub mod logging;
/// Heuristic link and Wi-Fi risk scoring
pub mod scan;
/// Quotas, usage and external collaborators
pub mod service;
/// Deadlines for collaborator calls
pub mod timeout;

pub use error::{Result, SauceError};
pub use scan::{score_link, score_network, LinkRisk, LinkVerdict, NetworkRisk, NetworkVerdict};
