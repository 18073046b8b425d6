// Core data model for the donation API.
// Every entity here is request-scoped: constructed in a handler,
// serialized, discarded. Nothing is persisted.

mod amount;
mod charts;
mod claim;
mod donation;
mod escrow;
mod spotify;

pub use amount::*;
pub use charts::*;
pub use claim::*;
pub use donation::*;
pub use escrow::*;
pub use spotify::*;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Authenticated session, derived per request from headers. Read-only
/// from the perspective of every handler.
#[derive(Debug, Clone)]
pub struct Session {
    /// OAuth bearer token, forwarded to the Spotify upstream
    pub access_token: String,
    /// Profile email, used as the receipt fallback on the card path
    pub email: Option<String>,
}

/// The single error body shape shared by every endpoint. Optional fields
/// are populated per error class instead of duck-typing a different
/// object per handler.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short error summary
    pub error: String,
    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Stable machine-readable code for client-side branching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    /// Required fields, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
    /// Platform minimum, for below-minimum amounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Decimal>,
    /// Offending amount, for below-minimum amounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Decimal>,
    /// Downstream error body, relayed unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            code: None,
            required: None,
            minimum: None,
            received: None,
            details: None,
            timestamp: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_required(mut self, required: Vec<&'static str>) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_minimum(mut self, minimum: Decimal, received: Decimal) -> Self {
        self.minimum = Some(minimum);
        self.received = Some(received);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(Utc::now());
        self
    }

    /// 401 body returned before any other processing on protected routes.
    pub fn authentication_required() -> Self {
        Self::new("Authentication required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_skips_empty_fields() {
        let body = serde_json::to_value(ErrorResponse::new("Missing required fields")).unwrap();
        assert_eq!(body["error"], "Missing required fields");
        assert!(body.get("required").is_none());
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_error_response_lists_required_fields() {
        let body = serde_json::to_value(
            ErrorResponse::new("Missing required fields").with_required(vec!["amount"]),
        )
        .unwrap();
        assert_eq!(body["required"][0], "amount");
    }
}
