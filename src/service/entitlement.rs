//! Subscription entitlement checks.
//!
//! The entitlement provider is a black box answering "is this customer
//! entitled to unlimited use of this product?".

use super::product::Product;
use crate::config::EntitlementConfig;
use crate::error::{Result, SauceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use url::Url;

/// Customer id used when the app could not identify the user.
pub const ANONYMOUS_CUSTOMER: &str = "anonymous";

/// Answers whether a customer holds an active subscription.
#[async_trait]
pub trait EntitlementProvider: Send + Sync {
    async fn is_entitled(&self, customer_id: &str, product: Product) -> Result<bool>;

    fn provider_name(&self) -> &str;
}

/// Provider used when no subscription backend is configured: nobody is
/// entitled, so every customer is on the free tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntitlements;

#[async_trait]
impl EntitlementProvider for NoEntitlements {
    async fn is_entitled(&self, _customer_id: &str, _product: Product) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "none"
    }
}

/// Fixed set of entitled customers, for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEntitlements {
    entitled: HashSet<(String, Product)>,
}

impl StaticEntitlements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, customer_id: impl Into<String>, product: Product) -> Self {
        self.entitled.insert((customer_id.into(), product));
        self
    }
}

#[async_trait]
impl EntitlementProvider for StaticEntitlements {
    async fn is_entitled(&self, customer_id: &str, product: Product) -> Result<bool> {
        Ok(self.entitled.contains(&(customer_id.to_string(), product)))
    }

    fn provider_name(&self) -> &str {
        "static"
    }
}

#[derive(Debug, Deserialize)]
struct SubscriberResponse {
    subscriber: Subscriber,
}

#[derive(Debug, Deserialize)]
struct Subscriber {
    #[serde(default)]
    entitlements: HashMap<String, EntitlementInfo>,
}

#[derive(Debug, Deserialize)]
struct EntitlementInfo {
    expires_date: Option<DateTime<Utc>>,
}

/// Whether `entitlement_id` is active in a RevenueCat subscriber body.
/// A missing expiry means a lifetime entitlement.
pub fn entitlement_active(body: &str, entitlement_id: &str, now: DateTime<Utc>) -> Result<bool> {
    let parsed: SubscriberResponse = serde_json::from_str(body)?;
    Ok(parsed
        .subscriber
        .entitlements
        .get(entitlement_id)
        .is_some_and(|e| e.expires_date.map_or(true, |exp| exp > now)))
}

/// RevenueCat REST client, one secret key per product.
#[derive(Clone)]
pub struct RevenueCatClient {
    client: reqwest::Client,
    config: EntitlementConfig,
}

impl RevenueCatClient {
    pub fn new(config: EntitlementConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    fn subscriber_url(&self, customer_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| SauceError::Config(format!("invalid RevenueCat base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SauceError::Config("RevenueCat base URL cannot be a base".to_string()))?
            .extend(&["v1", "subscribers", customer_id]);
        Ok(url)
    }
}

#[async_trait]
impl EntitlementProvider for RevenueCatClient {
    async fn is_entitled(&self, customer_id: &str, product: Product) -> Result<bool> {
        if customer_id == ANONYMOUS_CUSTOMER {
            return Ok(false);
        }
        let Some(key) = self.config.key_for(product) else {
            return Ok(false);
        };

        let response = self
            .client
            .get(self.subscriber_url(customer_id)?)
            .bearer_auth(key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SauceError::upstream(
                "RevenueCat",
                format!("subscriber lookup returned {status}"),
            ));
        }

        let body = response.text().await?;
        entitlement_active(&body, &self.config.entitlement_id, Utc::now())
    }

    fn provider_name(&self) -> &str {
        "revenuecat"
    }
}
