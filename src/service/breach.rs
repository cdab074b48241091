//! Breach lookup for BBQE email checks.

use crate::config::BreachConfig;
use crate::error::{Result, SauceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Breaches an email address appears in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachReport {
    pub is_breach: bool,
    pub breach_count: usize,
    pub sources: Vec<String>,
}

impl BreachReport {
    pub fn from_sources(sources: Vec<String>) -> Self {
        Self {
            is_breach: !sources.is_empty(),
            breach_count: sources.len(),
            sources,
        }
    }
}

/// Looks up breach records for an email address.
#[async_trait]
pub trait BreachLookup: Send + Sync {
    async fn lookup(&self, email: &str) -> Result<BreachReport>;
}

#[derive(Deserialize)]
struct BreachRecord {
    #[serde(default)]
    source: Option<String>,
}

#[derive(Deserialize)]
struct BreachResponse {
    #[serde(default)]
    breaches: Option<Vec<BreachRecord>>,
}

/// Build a report from a BreachDirectory response body.
pub fn parse_breach_body(body: &str) -> Result<BreachReport> {
    let parsed: BreachResponse = serde_json::from_str(body)?;
    let sources = parsed
        .breaches
        .unwrap_or_default()
        .into_iter()
        .map(|b| b.source.unwrap_or_else(|| "Unknown".to_string()))
        .collect();
    Ok(BreachReport::from_sources(sources))
}

/// RapidAPI BreachDirectory client.
#[derive(Clone)]
pub struct BreachDirectoryClient {
    api_key: String,
    client: reqwest::Client,
    host: String,
}

impl BreachDirectoryClient {
    /// Create a client; fails when no API key is configured.
    pub fn new(config: &BreachConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SauceError::Config("RAPIDAPI_KEY is not set".to_string()))?;
        Ok(Self {
            api_key,
            client: reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?,
            host: config.host.clone(),
        })
    }
}

#[async_trait]
impl BreachLookup for BreachDirectoryClient {
    async fn lookup(&self, email: &str) -> Result<BreachReport> {
        let response = self
            .client
            .get(format!("https://{}/", self.host))
            .query(&[("func", "auto"), ("term", email)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SauceError::upstream(
                "BreachDirectory",
                format!("lookup returned {status}"),
            ));
        }

        let body = response.text().await?;
        parse_breach_body(&body)
    }
}

/// Lookup used when no API key is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBreachLookup;

#[async_trait]
impl BreachLookup for UnconfiguredBreachLookup {
    async fn lookup(&self, _email: &str) -> Result<BreachReport> {
        Err(SauceError::Config("RAPIDAPI_KEY is not set".to_string()))
    }
}
