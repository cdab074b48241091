//! Tracing setup for the server and request spans for the handlers.
//!
//! Output is plain text or JSON, filtered by `RUST_LOG` (default `info`).

use crate::service::Action;
use std::sync::Once;
use tracing::{info, Span};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Only the first call has any effect, and
/// an already-installed subscriber (as in tests) is left in place.
pub fn init(format: LogFormat) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(env_filter());
        let installed = match format {
            LogFormat::Plain => registry
                .with(
                    fmt::layer()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true)
                        .with_current_span(true),
                )
                .try_init(),
        };
        if installed.is_ok() {
            info!(format = ?format, "SAUC-E tracing initialized");
        }
    });
}

/// Span wrapping one metered request.
pub fn request_span(action: Action, customer_id: &str) -> Span {
    tracing::info_span!(
        "request",
        product = %action.product(),
        action = ?action,
        customer = customer_id,
    )
}
