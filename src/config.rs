//! Configuration for the backend service.
//!
//! Provides centralized configuration for the HTTP server, free quotas and
//! the external collaborators, with sensible defaults and environment
//! overrides. Secrets never have built-in defaults.

use crate::error::{Result, SauceError};
use crate::service::Product;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Master configuration for the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener and log output settings.
    pub server: ServerConfig,
    /// Free allowances per product.
    pub quotas: QuotaConfig,
    /// Anthropic Messages API settings.
    pub anthropic: AnthropicConfig,
    /// Breach lookup (RapidAPI BreachDirectory) settings.
    pub breach: BreachConfig,
    /// Subscription entitlement settings.
    pub entitlements: EntitlementConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port (`PORT`).
    pub port: u16,
    /// Emit JSON logs (`SAUCE_LOG_JSON`).
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_json: false,
        }
    }
}

/// Free allowances before a subscription is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    /// CATSUP questions.
    pub catsup_free: u32,
    /// BBQE checks and scans.
    pub bbqe_free: u32,
    /// RELISH wisdom requests.
    pub relish_free: u32,
    /// Remaining count reported to subscribers.
    pub unlimited_remaining: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            catsup_free: 3,
            bbqe_free: 5,
            relish_free: 10,
            unlimited_remaining: 999,
        }
    }
}

impl QuotaConfig {
    /// Free allowance for a product.
    pub fn free_limit(&self, product: Product) -> u32 {
        match product {
            Product::Catsup => self.catsup_free,
            Product::Bbqe => self.bbqe_free,
            Product::Relish => self.relish_free,
        }
    }
}

/// Anthropic Messages API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    /// API key (`ANTHROPIC_API_KEY`).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model id (`ANTHROPIC_MODEL`).
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    /// Token budget for CATSUP tutor answers.
    pub tutor_max_tokens: u32,
    /// Token budget for RELISH wisdom.
    pub wisdom_max_tokens: u32,
    /// Deadline for one completion.
    pub timeout_ms: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            tutor_max_tokens: 1024,
            wisdom_max_tokens: 256,
            timeout_ms: 30_000,
        }
    }
}

/// Breach lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachConfig {
    /// RapidAPI key (`RAPIDAPI_KEY`).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// RapidAPI host (`RAPIDAPI_HOST`).
    pub host: String,
    /// Deadline for one lookup.
    pub timeout_ms: u64,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: "breachdirectory.p.rapidapi.com".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Subscription entitlement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitlementConfig {
    /// RevenueCat secret key for CATSUP (`REVENUECAT_CATSUP`).
    #[serde(skip_serializing)]
    pub catsup_key: Option<String>,
    /// RevenueCat secret key for BBQE (`REVENUECAT_BBQE`).
    #[serde(skip_serializing)]
    pub bbqe_key: Option<String>,
    /// RevenueCat secret key for RELISH (`REVENUECAT_RELISH`).
    #[serde(skip_serializing)]
    pub relish_key: Option<String>,
    /// Entitlement identifier that unlocks unlimited use.
    pub entitlement_id: String,
    pub base_url: String,
    /// Deadline for one subscriber lookup. Runs on every metered request.
    pub timeout_ms: u64,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            catsup_key: None,
            bbqe_key: None,
            relish_key: None,
            entitlement_id: "premium".to_string(),
            base_url: "https://api.revenuecat.com".to_string(),
            timeout_ms: 5_000,
        }
    }
}

impl AnthropicConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl BreachConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl EntitlementConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Secret key for a product, if configured.
    pub fn key_for(&self, product: Product) -> Option<&str> {
        match product {
            Product::Catsup => self.catsup_key.as_deref(),
            Product::Bbqe => self.bbqe_key.as_deref(),
            Product::Relish => self.relish_key.as_deref(),
        }
    }

    /// Whether any product has a key configured.
    pub fn any_configured(&self) -> bool {
        Product::ALL.iter().any(|p| self.key_for(*p).is_some())
    }
}

impl ServiceConfig {
    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`; blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = ServiceConfig::default();

        if let Some(port) = get("PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .map_err(|_| SauceError::Config(format!("PORT is not a valid port: {port}")))?;
        }
        if let Some(host) = get("SAUCE_HOST") {
            cfg.server.host = host;
        }
        if let Some(json) = get("SAUCE_LOG_JSON") {
            cfg.server.log_json = matches!(json.trim(), "1" | "true" | "TRUE" | "yes");
        }

        cfg.anthropic.api_key = get("ANTHROPIC_API_KEY");
        if let Some(model) = get("ANTHROPIC_MODEL") {
            cfg.anthropic.model = model;
        }

        cfg.breach.api_key = get("RAPIDAPI_KEY");
        if let Some(host) = get("RAPIDAPI_HOST") {
            cfg.breach.host = host;
        }

        cfg.entitlements.catsup_key = get("REVENUECAT_CATSUP");
        cfg.entitlements.bbqe_key = get("REVENUECAT_BBQE");
        cfg.entitlements.relish_key = get("REVENUECAT_RELISH");
        if let Some(id) = get("REVENUECAT_ENTITLEMENT") {
            cfg.entitlements.entitlement_id = id;
        }

        if let Some(ms) = get("SAUCE_UPSTREAM_TIMEOUT_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                SauceError::Config(format!("SAUCE_UPSTREAM_TIMEOUT_MS is not a number: {ms}"))
            })?;
            cfg.anthropic.timeout_ms = ms;
            cfg.breach.timeout_ms = ms;
            cfg.entitlements.timeout_ms = ms;
        }

        Ok(cfg)
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
