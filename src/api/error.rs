//! Mapping of backend errors to HTTP status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::SauceError;

/// A backend error plus the message shown to the app when the cause is
/// an internal failure.
pub struct ApiError {
    pub error: SauceError,
    pub failure: &'static str,
}

impl ApiError {
    pub fn with_failure(failure: &'static str) -> impl Fn(SauceError) -> ApiError {
        move |error| ApiError { error, failure }
    }
}

impl From<SauceError> for ApiError {
    fn from(error: SauceError) -> Self {
        Self {
            error,
            failure: "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.error {
            SauceError::MissingField(_) | SauceError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.error.to_string() }),
            ),
            SauceError::QuotaExceeded { product } => {
                let mut body = serde_json::json!({
                    "error": "Free limit reached",
                    "subscriptionRequired": true,
                });
                body[product.remaining_field()] = serde_json::json!(0);
                (StatusCode::FORBIDDEN, body)
            }
            other => {
                tracing::error!(error = %other, "{}", self.failure);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": self.failure }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
