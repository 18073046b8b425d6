// Lightning escrow simulation.
// Synthesizes HTLC-flavored escrow receipts after a fixed latency. There
// is no fund custody and no settlement: the hash comes from a discarded
// preimage and nothing is stored, so a status lookup fabricates a fresh
// snapshot for whatever identifier it is given.

use crate::config::DonationConfig;
use crate::models::{
    EscrowDetails, EscrowStatus, EscrowStatusResponse, LightningDonationIntent,
    LightningDonationResponse, VerificationStatus,
};
use crate::utils::{generate_receipt_id, random_htlc_hash};
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::time::{sleep, Duration};

const RELEASE_ESTIMATE: &str = "24-48 hours after verification";

pub struct EscrowService {
    latency: Duration,
    timelock: Duration,
}

impl EscrowService {
    pub fn new(latency_ms: u64, timelock_secs: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            timelock: Duration::from_secs(timelock_secs),
        }
    }

    pub fn from_config(config: &DonationConfig) -> Self {
        Self::new(config.escrow_latency_ms, config.escrow_timelock_secs)
    }

    /// Create an escrow receipt for a validated Lightning donation.
    pub async fn create_escrow(&self, intent: &LightningDonationIntent) -> LightningDonationResponse {
        // Simulated HTLC negotiation latency.
        sleep(self.latency).await;

        let escrow_id = generate_receipt_id("htlc");
        let time_lock = Utc::now().timestamp() + self.timelock.as_secs() as i64;

        log::info!(
            "Lightning escrow created: {} ({} BTC to {} [{}], wallet {})",
            escrow_id,
            intent.amount,
            intent.artist_name,
            intent.artist_id,
            intent.wallet_address
        );

        LightningDonationResponse {
            escrow_id,
            status: EscrowStatus::Escrowed,
            message: "Lightning donation successful! Funds held in escrow.".to_string(),
            amount: intent.amount,
            currency: "BTC".to_string(),
            artist_name: intent.artist_name.clone(),
            artist_id: intent.artist_id.clone(),
            wallet_address: intent.wallet_address.clone(),
            escrow_details: EscrowDetails {
                htlc_hash: random_htlc_hash(),
                time_lock,
                verification_required: true,
                estimated_release_time: RELEASE_ESTIMATE.to_string(),
            },
            timestamp: Utc::now(),
        }
    }

    /// Synthesize a status snapshot for an escrow identifier.
    pub fn escrow_status(&self, escrow_id: &str) -> EscrowStatusResponse {
        EscrowStatusResponse {
            escrow_id: escrow_id.to_string(),
            status: EscrowStatus::Escrowed,
            amount: Decimal::new(1, 3),
            currency: "BTC".to_string(),
            time_lock: Utc::now().timestamp() + self.timelock.as_secs() as i64,
            verification_status: VerificationStatus::Pending,
            estimated_release_time: RELEASE_ESTIMATE.to_string(),
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn intent() -> LightningDonationIntent {
        LightningDonationIntent {
            artist_name: "Test Artist".to_string(),
            artist_id: "a1".to_string(),
            amount: Amount::new(Decimal::new(2, 3)),
            wallet_address: "phoenix_k3j9x2m4q".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_escrow_receipt_shape() {
        let service = EscrowService::new(0, 7 * 24 * 60 * 60);
        let receipt = service.create_escrow(&intent()).await;

        assert!(receipt.escrow_id.starts_with("htlc_"));
        assert_eq!(receipt.status, EscrowStatus::Escrowed);
        assert_eq!(receipt.currency, "BTC");
        assert!(receipt.escrow_details.verification_required);
        assert!(receipt.escrow_details.htlc_hash.starts_with("0x"));
        assert!(receipt.escrow_details.time_lock > Utc::now().timestamp());
    }

    #[tokio::test]
    async fn test_escrow_ids_distinct_for_identical_input() {
        let service = EscrowService::new(0, 60);
        let a = service.create_escrow(&intent()).await;
        let b = service.create_escrow(&intent()).await;
        assert_ne!(a.escrow_id, b.escrow_id);
    }

    #[test]
    fn test_status_lookup_is_synthesized() {
        let service = EscrowService::new(0, 60);
        let status = service.escrow_status("htlc_123_abc");
        assert_eq!(status.escrow_id, "htlc_123_abc");
        assert_eq!(status.verification_status, VerificationStatus::Pending);
    }
}
