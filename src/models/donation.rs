// Card donation request/response contract.
// Raw requests keep every field optional so validation can enumerate
// exactly what is missing instead of failing at deserialization.

use super::{Amount, ErrorResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card donation request as received on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub amount: Option<Amount>,
    pub artist_name: Option<String>,
    pub artist_id: Option<String>,
    pub email: Option<String>,
}

/// A validated donation intent, ready to forward to the payment backend.
#[derive(Debug, Clone)]
pub struct DonationIntent {
    pub amount: Amount,
    pub artist_name: String,
    pub artist_id: Option<String>,
    pub email: Option<String>,
}

/// Validation failures, reported as 400 before any side effect.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    #[error("Amount must be at least ${minimum}")]
    BelowMinimum { minimum: Decimal, received: Decimal },
    #[error("Invalid donation amount")]
    InvalidAmount,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid wallet address")]
    InvalidWalletAddress,
}

impl ValidationError {
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ValidationError::MissingFields(fields) => {
                ErrorResponse::new(self.to_string()).with_required(fields.clone())
            }
            ValidationError::BelowMinimum { minimum, received } => {
                ErrorResponse::new(self.to_string()).with_minimum(*minimum, *received)
            }
            ValidationError::InvalidAmount
            | ValidationError::InvalidEmail
            | ValidationError::InvalidWalletAddress => ErrorResponse::new(self.to_string()),
        }
    }
}

impl DonationRequest {
    /// Check required fields and the platform minimum. Rejected requests
    /// never reach the payment backend.
    pub fn validate(self, minimum: Decimal) -> Result<DonationIntent, ValidationError> {
        let DonationRequest {
            amount,
            artist_name,
            artist_id,
            email,
        } = self;

        let mut missing = Vec::new();
        if amount.is_none() {
            missing.push("amount");
        }
        let name = artist_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        if name.is_none() {
            missing.push("artistName");
        }

        match (amount, name) {
            (Some(amount), Some(name)) => {
                if !amount.meets_minimum(minimum) {
                    return Err(ValidationError::BelowMinimum {
                        minimum,
                        received: amount.value(),
                    });
                }
                Ok(DonationIntent {
                    amount,
                    artist_name: name.to_string(),
                    artist_id,
                    email,
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl DonationIntent {
    /// Payload forwarded to the payment backend, filling in the session
    /// email when the caller omitted one.
    pub fn for_backend(self, session_email: Option<&str>) -> BackendDonationRequest {
        let email = self.email.or_else(|| session_email.map(str::to_string));
        BackendDonationRequest {
            amount: self.amount,
            artist_name: self.artist_name,
            artist_id: self.artist_id,
            email,
        }
    }
}

/// Body of the outbound call to the payment backend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendDonationRequest {
    pub amount: Amount,
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Successful payment-intent acknowledgement from the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendDonationAck {
    pub success: bool,
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: Amount,
    pub currency: String,
    pub artist_name: String,
    pub status: String,
    pub message: String,
}

impl BackendDonationAck {
    pub fn into_response(self) -> DonationResponse {
        DonationResponse {
            success: self.success,
            client_secret: self.client_secret,
            payment_intent_id: self.payment_intent_id,
            amount: self.amount,
            currency: self.currency,
            artist_name: self.artist_name,
            status: self.status,
            message: self.message,
            timestamp: Utc::now(),
        }
    }
}

/// Card donation response relayed to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub success: bool,
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: Amount,
    pub currency: String,
    pub artist_name: String,
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Response of the success-only mock payment path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDonationResponse {
    pub success: bool,
    pub payment_id: String,
    pub message: String,
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimum() -> Decimal {
        Decimal::new(100, 2)
    }

    fn request(json: &str) -> DonationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let intent = request(r#"{"amount":"10","artistName":"Test Artist"}"#)
            .validate(minimum())
            .unwrap();
        assert_eq!(intent.artist_name, "Test Artist");
        assert_eq!(intent.amount.in_cents(), 1000);
    }

    #[test]
    fn test_validate_lists_missing_amount() {
        let err = request(r#"{"artistName":"X"}"#).validate(minimum()).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["amount"]));
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(body["required"][0], "amount");
    }

    #[test]
    fn test_validate_lists_all_missing_fields() {
        let err = request("{}").validate(minimum()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["amount", "artistName"])
        );
    }

    #[test]
    fn test_validate_treats_blank_name_as_missing() {
        let err = request(r#"{"amount":5,"artistName":"  "}"#)
            .validate(minimum())
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["artistName"]));
    }

    #[test]
    fn test_validate_rejects_below_minimum() {
        let err = request(r#"{"amount":"0.50","artistName":"X"}"#)
            .validate(minimum())
            .unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { .. }));
        assert_eq!(err.to_string(), "Amount must be at least $1.00");
    }

    #[test]
    fn test_for_backend_falls_back_to_session_email() {
        let intent = request(r#"{"amount":"10","artistName":"X"}"#)
            .validate(minimum())
            .unwrap();
        let payload = intent.for_backend(Some("fan@example.com"));
        assert_eq!(payload.email.as_deref(), Some("fan@example.com"));
    }

    #[test]
    fn test_for_backend_prefers_caller_email() {
        let intent = request(r#"{"amount":"10","artistName":"X","email":"me@example.com"}"#)
            .validate(minimum())
            .unwrap();
        let payload = intent.for_backend(Some("fan@example.com"));
        assert_eq!(payload.email.as_deref(), Some("me@example.com"));
    }
}
