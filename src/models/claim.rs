// Artist profile claim contract.
// A claim asserts ownership of an artist identity and is conceptually
// queued for manual review; no review queue actually exists here, so
// receipts and status snapshots are synthesized per request.

use super::ValidationError;
use crate::utils::validate_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile claim request as received on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    pub reason: Option<String>,
    pub email: Option<String>,
    pub proof_of_identity: Option<String>,
}

/// A validated profile claim.
#[derive(Debug, Clone)]
pub struct ClaimIntent {
    pub artist_id: String,
    pub artist_name: String,
    pub reason: String,
    pub email: String,
    pub proof_of_identity: Option<String>,
}

impl ClaimRequest {
    pub fn validate(self) -> Result<ClaimIntent, ValidationError> {
        let ClaimRequest {
            artist_id,
            artist_name,
            reason,
            email,
            proof_of_identity,
        } = self;

        let mut missing = Vec::new();
        let id = artist_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if id.is_none() {
            missing.push("artistId");
        }
        let name = artist_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if name.is_none() {
            missing.push("artistName");
        }
        let reason = reason.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if reason.is_none() {
            missing.push("reason");
        }
        let email = email.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if email.is_none() {
            missing.push("email");
        }

        match (id, name, reason, email) {
            (Some(id), Some(name), Some(reason), Some(email)) => {
                if !validate_email(email) {
                    return Err(ValidationError::InvalidEmail);
                }
                Ok(ClaimIntent {
                    artist_id: id.to_string(),
                    artist_name: name.to_string(),
                    reason: reason.to_string(),
                    email: email.to_string(),
                    proof_of_identity,
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Claim lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

/// Receipt returned for a submitted claim.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub claim_id: String,
    pub status: ClaimStatus,
    pub message: String,
    pub estimated_review_time: String,
    pub next_steps: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Synthesized claim status snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatusResponse {
    pub claim_id: String,
    pub status: ClaimStatus,
    pub artist_name: String,
    pub submitted_at: DateTime<Utc>,
    pub estimated_completion: DateTime<Utc>,
    pub current_step: String,
    pub notes: String,
}

/// Query parameters of the claim status lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLookupQuery {
    pub claim_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ClaimRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_accepts_complete_claim() {
        let intent = request(
            r#"{"artistId":"1","artistName":"X","reason":"I am X","email":"x@example.com"}"#,
        )
        .validate()
        .unwrap();
        assert_eq!(intent.email, "x@example.com");
        assert!(intent.proof_of_identity.is_none());
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let err = request(r#"{"artistId":"1"}"#).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["artistName", "reason", "email"])
        );
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let err = request(
            r#"{"artistId":"1","artistName":"X","reason":"mine","email":"not-an-email"}"#,
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }
}
