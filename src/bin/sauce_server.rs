//! SAUC-E REST API server
//!
//! ## Usage
//!
//! ```bash
//! ANTHROPIC_API_KEY=... RAPIDAPI_KEY=... cargo run --bin sauce-server
//!
//! curl -X POST http://localhost:3000/api/bbqe/scan-link \
//!   -H "Content-Type: application/json" \
//!   -d '{"customerId": "user_123", "url": "http://g00gle-secure-login.xyz/verify"}'
//!
//! curl http://localhost:3000/health
//! ```

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use sauce::api::{build_router, ENDPOINTS};
use sauce::config::ServiceConfig;
use sauce::logging::{self, LogFormat};
use sauce::service::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = ServiceConfig::from_env().context("loading configuration")?;
    logging::init(LogFormat::from_json_flag(config.server.log_json));

    let addr = config.bind_addr();
    let services = Arc::new(Services::from_config(config));
    let app = build_router(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "SAUC-E backend listening");
    for (method, path) in ENDPOINTS {
        info!("  {method:<5} {path}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("SAUC-E backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
