//! Request-level operations shared by the HTTP handlers.
//!
//! Each operation validates its input, enforces the product's free quota,
//! calls the scorer or collaborator, and records usage. Collaborators sit
//! behind traits so tests and local runs can swap them out.

pub mod breach;
pub mod entitlement;
pub mod llm;
pub mod product;
pub mod usage;

pub use breach::{BreachDirectoryClient, BreachLookup, BreachReport, UnconfiguredBreachLookup};
pub use entitlement::{
    EntitlementProvider, NoEntitlements, RevenueCatClient, StaticEntitlements, ANONYMOUS_CUSTOMER,
};
pub use llm::{AnthropicClient, LlmClient, UnconfiguredLlm};
pub use product::{Action, Product, QuotaStatus};
pub use usage::{UsageEntry, UsageLedger};

use crate::config::ServiceConfig;
use crate::error::{Result, SauceError};
use crate::scan::{self, LinkVerdict, NetworkVerdict};
use crate::timeout::with_timeout;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A result plus the free uses left afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Metered<T> {
    pub value: T,
    pub remaining: u32,
}

/// Customer id to account usage against; blank ids become anonymous.
pub fn customer_or_anonymous(customer_id: Option<&str>) -> &str {
    customer_id
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ANONYMOUS_CUSTOMER)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SauceError::MissingField(field))
}

/// Shared backend state: configuration, usage counters and collaborators.
pub struct Services {
    pub config: ServiceConfig,
    pub ledger: UsageLedger,
    entitlements: Arc<dyn EntitlementProvider>,
    llm: Arc<dyn LlmClient>,
    breach: Arc<dyn BreachLookup>,
}

impl Services {
    pub fn new(
        config: ServiceConfig,
        entitlements: Arc<dyn EntitlementProvider>,
        llm: Arc<dyn LlmClient>,
        breach: Arc<dyn BreachLookup>,
    ) -> Self {
        Self {
            config,
            ledger: UsageLedger::new(),
            entitlements,
            llm,
            breach,
        }
    }

    /// Build real collaborators where keys are configured, fallbacks elsewhere.
    pub fn from_config(config: ServiceConfig) -> Self {
        let entitlements: Arc<dyn EntitlementProvider> = if config.entitlements.any_configured() {
            match RevenueCatClient::new(config.entitlements.clone()) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    warn!(error = %e, "RevenueCat client unavailable, every customer is on the free tier");
                    Arc::new(NoEntitlements)
                }
            }
        } else {
            warn!("no RevenueCat keys configured, every customer is on the free tier");
            Arc::new(NoEntitlements)
        };

        let llm: Arc<dyn LlmClient> = match AnthropicClient::new(config.anthropic.clone()) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!(error = %e, "LLM endpoints will fail");
                Arc::new(UnconfiguredLlm)
            }
        };

        let breach: Arc<dyn BreachLookup> = match BreachDirectoryClient::new(&config.breach) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                warn!(error = %e, "breach checks will report no breaches");
                Arc::new(UnconfiguredBreachLookup)
            }
        };

        info!(
            entitlements = entitlements.provider_name(),
            model = llm.model_name(),
            "collaborators ready"
        );
        Self::new(config, entitlements, llm, breach)
    }

    /// Unreachable or slow entitlement providers count as not subscribed.
    async fn is_subscribed(&self, customer_id: &str, product: Product) -> bool {
        let check = self.entitlements.is_entitled(customer_id, product);
        match with_timeout("RevenueCat", self.config.entitlements.timeout(), check).await {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    customer = customer_id,
                    product = %product,
                    provider = self.entitlements.provider_name(),
                    error = %e,
                    "entitlement check failed"
                );
                false
            }
        }
    }

    /// Quota standing of a customer for a product.
    pub async fn quota(&self, customer_id: &str, product: Product) -> QuotaStatus {
        let subscribed = self.is_subscribed(customer_id, product).await;
        QuotaStatus::new(
            subscribed,
            self.ledger.count(customer_id, product),
            self.config.quotas.free_limit(product),
        )
    }

    /// Claim one use of `action` before any work is done. The claim is
    /// returned by [`Services::settle`] if the work fails.
    async fn admit(&self, customer_id: &str, action: Action) -> Result<QuotaStatus> {
        let product = action.product();
        let subscribed = self.is_subscribed(customer_id, product).await;
        let limit = self.config.quotas.free_limit(product);
        let cap = if subscribed { u32::MAX } else { limit };
        match self.ledger.try_reserve(customer_id, action, cap) {
            Some(used) => Ok(QuotaStatus::new(subscribed, used, limit)),
            None => {
                info!(customer = customer_id, product = %product, limit, "free limit reached");
                Err(SauceError::QuotaExceeded { product })
            }
        }
    }

    fn settle<T>(
        &self,
        customer_id: &str,
        action: Action,
        status: QuotaStatus,
        outcome: Result<T>,
    ) -> Result<Metered<T>> {
        match outcome {
            Ok(value) => Ok(Metered {
                value,
                remaining: status.remaining_after_use(self.config.quotas.unlimited_remaining),
            }),
            Err(e) => {
                self.ledger.release(customer_id, action.product());
                Err(e)
            }
        }
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        debug!(model = self.llm.model_name(), max_tokens, "requesting completion");
        let call = self.llm.complete(prompt, max_tokens);
        with_timeout("Anthropic", self.config.anthropic.timeout(), call).await
    }

    /// CATSUP: answer a question as a Socratic tutor.
    pub async fn ask_question(
        &self,
        customer_id: &str,
        question: Option<&str>,
        topic: Option<&str>,
    ) -> Result<Metered<String>> {
        let question = required(question, "Question")?;
        let status = self.admit(customer_id, Action::Question).await?;
        let prompt = llm::tutor_prompt(question, topic);
        let answer = self
            .complete(&prompt, self.config.anthropic.tutor_max_tokens)
            .await;
        self.settle(customer_id, Action::Question, status, answer)
    }

    /// BBQE: look an email address up in breach databases.
    ///
    /// Lookup failures and timeouts degrade to an empty report.
    pub async fn check_threat(
        &self,
        customer_id: &str,
        email: Option<&str>,
    ) -> Result<Metered<BreachReport>> {
        let email = required(email, "Email")?;
        let status = self.admit(customer_id, Action::ThreatCheck).await?;
        let lookup = self.breach.lookup(email.trim());
        let report = match with_timeout("BreachDirectory", self.config.breach.timeout(), lookup).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "breach lookup failed, reporting no breaches");
                BreachReport::default()
            }
        };
        self.settle(customer_id, Action::ThreatCheck, status, Ok(report))
    }

    /// BBQE: score a link.
    pub async fn scan_link(
        &self,
        customer_id: &str,
        url: Option<&str>,
    ) -> Result<Metered<LinkVerdict>> {
        let url = required(url, "URL")?;
        let status = self.admit(customer_id, Action::LinkScan).await?;
        let verdict = scan::score_link(url);
        info!(score = verdict.score, level = %verdict.level, "link scanned");
        self.settle(customer_id, Action::LinkScan, status, Ok(verdict))
    }

    /// BBQE: score a Wi-Fi network. An empty SSID is valid input.
    pub async fn scan_wifi(
        &self,
        customer_id: &str,
        ssid: Option<&str>,
        security_type: Option<&str>,
        bssid: Option<&str>,
    ) -> Result<Metered<NetworkVerdict>> {
        let ssid = ssid.ok_or(SauceError::MissingField("SSID"))?;
        let status = self.admit(customer_id, Action::WifiScan).await?;
        let verdict = scan::score_network(ssid, security_type, bssid);
        info!(score = verdict.score, level = %verdict.level, "network scanned");
        self.settle(customer_id, Action::WifiScan, status, Ok(verdict))
    }

    /// RELISH: three sentences of wisdom for a situation.
    pub async fn get_wisdom(
        &self,
        customer_id: &str,
        situation: Option<&str>,
        context: Option<&str>,
    ) -> Result<Metered<String>> {
        let situation = required(situation, "Situation")?;
        let status = self.admit(customer_id, Action::Wisdom).await?;
        let prompt = llm::wisdom_prompt(situation, context);
        let wisdom = self
            .complete(&prompt, self.config.anthropic.wisdom_max_tokens)
            .await;
        self.settle(customer_id, Action::Wisdom, status, wisdom)
    }
}
