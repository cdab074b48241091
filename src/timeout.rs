//! Deadlines for calls to external collaborators.
//!
//! Every await on the LLM, breach lookup or entitlement provider goes
//! through [`with_timeout`] so a peer that never answers cannot hold a
//! request open.

use crate::error::{Result, SauceError};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Run `future`, failing with [`SauceError::Timeout`] once `limit` elapses.
pub async fn with_timeout<T, F>(service: &'static str, limit: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => {
            let after_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            warn!(service, after_ms, "collaborator call timed out");
            Err(SauceError::Timeout { service, after_ms })
        }
    }
}
