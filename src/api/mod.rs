//! HTTP API shared by the CATSUP, BBQE and RELISH apps.

mod error;
mod extract;
mod handlers;
mod requests;
mod responses;

pub use error::ApiError;
pub use extract::ApiJson;
pub use handlers::AppState;
pub use requests::{
    AskQuestionRequest, CheckThreatRequest, GetWisdomRequest, ScanLinkRequest, ScanWifiRequest,
};
pub use responses::{
    AskQuestionResponse, CheckThreatResponse, GetWisdomResponse, HealthResponse,
    ScanLinkResponse, ScanWifiResponse,
};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Routes served by the backend, listed at startup.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("POST", "/api/catsup/ask-question"),
    ("POST", "/api/bbqe/check-threat"),
    ("POST", "/api/bbqe/scan-link"),
    ("POST", "/api/bbqe/scan-wifi"),
    ("POST", "/api/relish/get-wisdom"),
];

/// Build the router with permissive CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/catsup/ask-question", post(handlers::ask_question))
        .route("/api/bbqe/check-threat", post(handlers::check_threat))
        .route("/api/bbqe/scan-link", post(handlers::scan_link))
        .route("/api/bbqe/scan-wifi", post(handlers::scan_wifi))
        .route("/api/relish/get-wisdom", post(handlers::get_wisdom))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
