//! Common test utilities and helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use sauce::config::ServiceConfig;
use sauce::service::{
    BreachLookup, BreachReport, EntitlementProvider, LlmClient, Product, Services,
    StaticEntitlements,
};
use sauce::{Result, SauceError};
use std::sync::Arc;

/// Links covering every rule of the link scorer.
pub const LINK_CORPUS: &[&str] = &[
    "https://google.com/search",
    "https://mail.google.com/mail/u/0",
    "https://a.b.google.com",
    "http://g00gle-secure-login.xyz/verify",
    "http://login.paypal.com.evil.xyz/account",
    "http://192.168.10.4:8080/admin",
    "example.org",
    "  https://example.org/about  ",
    "https://shop.example.co.uk:8443/cart?invoice=1",
    "not a url at all???",
    "http://",
    "",
    "https://xn--pple-43d.com/signin",
    "HTTPS://PAYPAL-billing-update.top/webscr?cmd=_login",
];

/// Network names covering every rule of the network scorer.
pub const NETWORK_CORPUS: &[(&str, Option<&str>)] = &[
    ("Free_Airport_WiFi", Some("OPEN")),
    ("HomeNetworkABC", Some("WPA2")),
    ("Free Starbucks WiFi", None),
    ("xfinitywifi", Some("WPA")),
    ("NETGEAR-5G", Some("WEP")),
    ("(hidden)", Some("WPA3")),
    ("", Some("NONE")),
    ("Conference Room Guest Network For Visitors Only", Some("WPA2-PSK")),
    ("café ☕ free", Some("open")),
];

/// LLM stub returning a fixed reply.
pub struct CannedLlm(pub &'static str);

#[async_trait]
impl LlmClient for CannedLlm {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        Ok(self.0.to_string())
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

/// LLM stub that always fails.
pub struct FailingLlm;

#[async_trait]
impl LlmClient for FailingLlm {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        Err(SauceError::upstream("Anthropic", "503 Service Unavailable"))
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

/// Breach stub reporting the same sources for every address.
pub struct FixedBreaches(pub Vec<&'static str>);

#[async_trait]
impl BreachLookup for FixedBreaches {
    async fn lookup(&self, _email: &str) -> Result<BreachReport> {
        Ok(BreachReport::from_sources(
            self.0.iter().map(|s| s.to_string()).collect(),
        ))
    }
}

/// Entitlement stub that is always unreachable.
pub struct UnreachableEntitlements;

#[async_trait]
impl EntitlementProvider for UnreachableEntitlements {
    async fn is_entitled(&self, _customer_id: &str, _product: Product) -> Result<bool> {
        Err(SauceError::upstream("RevenueCat", "connection refused"))
    }

    fn provider_name(&self) -> &str {
        "unreachable"
    }
}

/// Services with a canned LLM, two breach sources and the given entitlements.
pub fn services_with(entitlements: Arc<dyn EntitlementProvider>) -> Arc<Services> {
    Arc::new(Services::new(
        ServiceConfig::default(),
        entitlements,
        Arc::new(CannedLlm("Think about the right triangle's sides.")),
        Arc::new(FixedBreaches(vec!["Database A", "Database B"])),
    ))
}

/// Services where customer `paid` subscribes to every product.
pub fn default_services() -> Arc<Services> {
    let grants = Product::ALL
        .iter()
        .fold(StaticEntitlements::new(), |acc, p| acc.grant("paid", *p));
    services_with(Arc::new(grants))
}
