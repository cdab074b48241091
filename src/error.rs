//! Error types for the SAUC-E backend.
//!
//! The scorers never fail; these errors come from request validation and
//! the external collaborators (LLM, breach lookup, entitlements).

use crate::service::Product;
use thiserror::Error;

/// Main error type for backend operations.
#[derive(Debug, Error)]
pub enum SauceError {
    /// Request field that must be present was absent or blank
    #[error("{0} required")]
    MissingField(&'static str),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Customer used up the free allowance for a product
    #[error("Free limit reached for {product}")]
    QuotaExceeded { product: Product },

    /// A collaborator answered with an error or an unusable body
    #[error("{service} error: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A collaborator did not answer within its deadline
    #[error("{service} timed out after {after_ms} ms")]
    Timeout { service: &'static str, after_ms: u64 },
}

impl SauceError {
    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        SauceError::Upstream {
            service,
            message: message.into(),
        }
    }
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, SauceError>;
