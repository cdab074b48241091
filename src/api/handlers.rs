//! Route handlers: decode the body, meter the request, shape the reply.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;

use crate::logging::request_span;
use crate::service::{customer_or_anonymous, Action, Services};
use tracing::Instrument;

use super::error::ApiError;
use super::extract::ApiJson;
use super::requests::{
    AskQuestionRequest, CheckThreatRequest, GetWisdomRequest, ScanLinkRequest, ScanWifiRequest,
};
use super::responses::{
    AskQuestionResponse, CheckThreatResponse, GetWisdomResponse, HealthResponse,
    ScanLinkResponse, ScanWifiResponse,
};

pub type AppState = Arc<Services>;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}

/// POST /api/catsup/ask-question
pub async fn ask_question(
    State(svc): State<AppState>,
    ApiJson(body): ApiJson<AskQuestionRequest>,
) -> Result<Json<AskQuestionResponse>, ApiError> {
    let customer = customer_or_anonymous(body.customer_id.as_deref());
    let metered = svc
        .ask_question(customer, body.question.as_deref(), body.topic.as_deref())
        .instrument(request_span(Action::Question, customer))
        .await
        .map_err(ApiError::with_failure("Failed to process question"))?;

    Ok(Json(AskQuestionResponse {
        answer: metered.value,
        subscription_required: false,
        questions_remaining: metered.remaining,
    }))
}

/// POST /api/bbqe/check-threat
pub async fn check_threat(
    State(svc): State<AppState>,
    ApiJson(body): ApiJson<CheckThreatRequest>,
) -> Result<Json<CheckThreatResponse>, ApiError> {
    let customer = customer_or_anonymous(body.customer_id.as_deref());
    let metered = svc
        .check_threat(customer, body.email.as_deref())
        .instrument(request_span(Action::ThreatCheck, customer))
        .await
        .map_err(ApiError::with_failure("Failed to check threats"))?;

    let report = metered.value;
    Ok(Json(CheckThreatResponse {
        is_breach: report.is_breach,
        breach_count: report.breach_count,
        sources: report.sources,
        subscription_required: false,
        checks_remaining: metered.remaining,
    }))
}

/// POST /api/bbqe/scan-link
pub async fn scan_link(
    State(svc): State<AppState>,
    ApiJson(body): ApiJson<ScanLinkRequest>,
) -> Result<Json<ScanLinkResponse>, ApiError> {
    let customer = customer_or_anonymous(body.customer_id.as_deref());
    let metered = svc
        .scan_link(customer, body.url.as_deref())
        .instrument(request_span(Action::LinkScan, customer))
        .await
        .map_err(ApiError::with_failure("Failed to scan link"))?;

    Ok(Json(ScanLinkResponse {
        verdict: metered.value,
        subscription_required: false,
        checks_remaining: metered.remaining,
    }))
}

/// POST /api/bbqe/scan-wifi
pub async fn scan_wifi(
    State(svc): State<AppState>,
    ApiJson(body): ApiJson<ScanWifiRequest>,
) -> Result<Json<ScanWifiResponse>, ApiError> {
    let customer = customer_or_anonymous(body.customer_id.as_deref());
    let metered = svc
        .scan_wifi(
            customer,
            body.ssid.as_deref(),
            body.security_type.as_deref(),
            body.bssid.as_deref(),
        )
        .instrument(request_span(Action::WifiScan, customer))
        .await
        .map_err(ApiError::with_failure("Failed to scan network"))?;

    Ok(Json(ScanWifiResponse {
        verdict: metered.value,
        subscription_required: false,
        checks_remaining: metered.remaining,
    }))
}

/// POST /api/relish/get-wisdom
pub async fn get_wisdom(
    State(svc): State<AppState>,
    ApiJson(body): ApiJson<GetWisdomRequest>,
) -> Result<Json<GetWisdomResponse>, ApiError> {
    let customer = customer_or_anonymous(body.customer_id.as_deref());
    let metered = svc
        .get_wisdom(customer, body.situation.as_deref(), body.context.as_deref())
        .instrument(request_span(Action::Wisdom, customer))
        .await
        .map_err(ApiError::with_failure("Failed to get wisdom"))?;

    Ok(Json(GetWisdomResponse {
        wisdom: metered.value,
        context: body.context,
        subscription_required: false,
        wisdom_remaining: metered.remaining,
    }))
}
