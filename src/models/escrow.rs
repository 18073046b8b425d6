// Lightning donation contract.
// The escrow here is a simulated holding state: identifiers and hashes
// are synthesized per request and never stored, so a status lookup
// returns a fresh snapshot rather than the original receipt.

use super::{Amount, ValidationError};
use crate::utils::validate_wallet_address;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lightning donation request as received on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningDonationRequest {
    pub artist_name: Option<String>,
    pub artist_id: Option<String>,
    pub amount: Option<Amount>,
    pub wallet_address: Option<String>,
}

/// A validated Lightning donation intent.
#[derive(Debug, Clone)]
pub struct LightningDonationIntent {
    pub artist_name: String,
    pub artist_id: String,
    pub amount: Amount,
    pub wallet_address: String,
}

impl LightningDonationRequest {
    pub fn validate(self, minimum: Decimal) -> Result<LightningDonationIntent, ValidationError> {
        let LightningDonationRequest {
            artist_name,
            artist_id,
            amount,
            wallet_address,
        } = self;

        let mut missing = Vec::new();
        let name = artist_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if name.is_none() {
            missing.push("artistName");
        }
        let id = artist_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
        if id.is_none() {
            missing.push("artistId");
        }
        if amount.is_none() {
            missing.push("amount");
        }
        let wallet = wallet_address
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if wallet.is_none() {
            missing.push("walletAddress");
        }

        match (name, id, amount, wallet) {
            (Some(name), Some(id), Some(amount), Some(wallet)) => {
                if !amount.is_positive() || amount.value() < minimum {
                    return Err(ValidationError::InvalidAmount);
                }
                if !validate_wallet_address(wallet) {
                    return Err(ValidationError::InvalidWalletAddress);
                }
                Ok(LightningDonationIntent {
                    artist_name: name.to_string(),
                    artist_id: id.to_string(),
                    amount,
                    wallet_address: wallet.to_string(),
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Escrow lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscrowStatus {
    Escrowed,
    Released,
    Refunded,
}

/// Verification outcome gating escrow release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Simulated HTLC parameters attached to an escrow receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowDetails {
    pub htlc_hash: String,
    /// Unix timestamp after which the escrow refunds
    pub time_lock: i64,
    pub verification_required: bool,
    pub estimated_release_time: String,
}

/// Receipt returned for a new Lightning donation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningDonationResponse {
    pub escrow_id: String,
    pub status: EscrowStatus,
    pub message: String,
    pub amount: Amount,
    pub currency: String,
    pub artist_name: String,
    pub artist_id: String,
    pub wallet_address: String,
    pub escrow_details: EscrowDetails,
    pub timestamp: DateTime<Utc>,
}

/// Synthesized escrow status snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowStatusResponse {
    pub escrow_id: String,
    pub status: EscrowStatus,
    pub amount: Decimal,
    pub currency: String,
    pub time_lock: i64,
    pub verification_status: VerificationStatus,
    pub estimated_release_time: String,
    pub last_updated: DateTime<Utc>,
}

/// Query parameters of the escrow status lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowLookupQuery {
    pub escrow_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimum() -> Decimal {
        Decimal::new(1, 3) // 0.001 BTC
    }

    fn request(json: &str) -> LightningDonationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let intent = request(
            r#"{"artistName":"X","artistId":"1","amount":0.002,"walletAddress":"phoenix_ab12cd34e"}"#,
        )
        .validate(minimum())
        .unwrap();
        assert_eq!(intent.artist_id, "1");
        assert_eq!(intent.wallet_address, "phoenix_ab12cd34e");
    }

    #[test]
    fn test_validate_lists_missing_wallet() {
        let err = request(r#"{"artistName":"X","artistId":"1","amount":0.002}"#)
            .validate(minimum())
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["walletAddress"]));
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let err = request(
            r#"{"artistName":"X","artistId":"1","amount":0,"walletAddress":"w"}"#,
        )
        .validate(minimum())
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);
    }

    #[test]
    fn test_validate_rejects_below_btc_minimum() {
        let err = request(
            r#"{"artistName":"X","artistId":"1","amount":"0.0001","walletAddress":"w"}"#,
        )
        .validate(minimum())
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);
    }

    #[test]
    fn test_escrow_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EscrowStatus::Escrowed).unwrap(),
            "\"escrowed\""
        );
    }
}
