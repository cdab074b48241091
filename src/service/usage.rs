//! In-memory usage counters per customer and product.

use super::product::{Action, Product};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;

/// Usage of one product by one customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub count: u32,
    pub last_used: Option<DateTime<Utc>>,
    pub last_action: Option<Action>,
}

/// Counter map keyed by (customer id, product). Lost on restart.
#[derive(Debug, Default)]
pub struct UsageLedger {
    entries: RwLock<HashMap<(String, Product), UsageEntry>>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<(String, Product), UsageEntry>> {
        match self.entries.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Claim one use when fewer than `limit` are recorded.
    ///
    /// Check and increment happen under one write lock. Returns the count
    /// before the claim.
    pub fn try_reserve(&self, customer_id: &str, action: Action, limit: u32) -> Option<u32> {
        let mut guard = self.write();
        let entry = guard
            .entry((customer_id.to_string(), action.product()))
            .or_default();
        if entry.count >= limit {
            return None;
        }
        let before = entry.count;
        entry.count += 1;
        entry.last_used = Some(Utc::now());
        entry.last_action = Some(action);
        Some(before)
    }

    /// Give back a use claimed by [`UsageLedger::try_reserve`].
    pub fn release(&self, customer_id: &str, product: Product) {
        let mut guard = self.write();
        if let Some(entry) = guard.get_mut(&(customer_id.to_string(), product)) {
            entry.count = entry.count.saturating_sub(1);
        }
    }

    /// Current usage, zero when the customer never used the product.
    pub fn usage(&self, customer_id: &str, product: Product) -> UsageEntry {
        let guard = match self.entries.read() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard
            .get(&(customer_id.to_string(), product))
            .copied()
            .unwrap_or_default()
    }

    /// Number of uses, shorthand for `usage(..).count`.
    pub fn count(&self, customer_id: &str, product: Product) -> u32 {
        self.usage(customer_id, product).count
    }
}
