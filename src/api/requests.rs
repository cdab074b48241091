//! Request bodies. Every field is optional so missing input is reported
//! by the service layer as a 400.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionRequest {
    pub customer_id: Option<String>,
    pub question: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckThreatRequest {
    pub customer_id: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLinkRequest {
    pub customer_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWifiRequest {
    pub customer_id: Option<String>,
    pub ssid: Option<String>,
    pub security_type: Option<String>,
    pub bssid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWisdomRequest {
    pub customer_id: Option<String>,
    pub situation: Option<String>,
    pub context: Option<String>,
}
