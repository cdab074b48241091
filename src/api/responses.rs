//! Response bodies, serialized in camelCase.

use crate::scan::{LinkVerdict, NetworkVerdict};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionResponse {
    pub answer: String,
    pub subscription_required: bool,
    pub questions_remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckThreatResponse {
    pub is_breach: bool,
    pub breach_count: usize,
    pub sources: Vec<String>,
    pub subscription_required: bool,
    pub checks_remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLinkResponse {
    pub verdict: LinkVerdict,
    pub subscription_required: bool,
    pub checks_remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWifiResponse {
    pub verdict: NetworkVerdict,
    pub subscription_required: bool,
    pub checks_remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWisdomResponse {
    pub wisdom: String,
    pub context: Option<String>,
    pub subscription_required: bool,
    pub wisdom_remaining: u32,
}
