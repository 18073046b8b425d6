// Profile claim simulation.
// Claims are conceptually queued for manual review; here the queue is a
// log line and a synthesized receipt. Status lookups fabricate a
// plausible in-review snapshot for any identifier.

use crate::config::DonationConfig;
use crate::models::{ClaimIntent, ClaimResponse, ClaimStatus, ClaimStatusResponse};
use crate::utils::generate_receipt_id;
use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::{sleep, Duration};

const REVIEW_ESTIMATE: &str = "24-48 hours";

pub struct ClaimService {
    latency: Duration,
}

impl ClaimService {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn from_config(config: &DonationConfig) -> Self {
        Self::new(config.claim_latency_ms)
    }

    /// Accept a validated profile claim into the (simulated) review queue.
    pub async fn submit(&self, intent: &ClaimIntent) -> ClaimResponse {
        sleep(self.latency).await;

        let claim_id = generate_receipt_id("claim");
        log::info!(
            "Artist claim submitted: {} ({} [{}] by {})",
            claim_id,
            intent.artist_name,
            intent.artist_id,
            intent.email
        );

        ClaimResponse {
            claim_id,
            status: ClaimStatus::Pending,
            message: "Profile claim submitted successfully".to_string(),
            estimated_review_time: REVIEW_ESTIMATE.to_string(),
            next_steps: vec![
                "We'll review your claim request".to_string(),
                "You may be asked to provide additional proof of identity".to_string(),
                "We'll contact you via email with updates".to_string(),
                "Once approved, you'll have access to your artist dashboard".to_string(),
            ],
            timestamp: Utc::now(),
        }
    }

    /// Synthesize a status snapshot for a claim identifier.
    pub fn claim_status(&self, claim_id: &str) -> ClaimStatusResponse {
        let now = Utc::now();
        ClaimStatusResponse {
            claim_id: claim_id.to_string(),
            status: ClaimStatus::Pending,
            artist_name: "Taylor Swift".to_string(),
            submitted_at: now - ChronoDuration::hours(24),
            estimated_completion: now + ChronoDuration::hours(24),
            current_step: "Under review by our team".to_string(),
            notes: "Claim is being reviewed for verification".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> ClaimIntent {
        ClaimIntent {
            artist_id: "a1".to_string(),
            artist_name: "Clairo".to_string(),
            reason: "This is my profile".to_string(),
            email: "clairo@example.com".to_string(),
            proof_of_identity: None,
        }
    }

    #[tokio::test]
    async fn test_submit_returns_pending_receipt() {
        let service = ClaimService::new(0);
        let receipt = service.submit(&intent()).await;

        assert!(receipt.claim_id.starts_with("claim_"));
        assert_eq!(receipt.status, ClaimStatus::Pending);
        assert_eq!(receipt.next_steps.len(), 4);
    }

    #[tokio::test]
    async fn test_claim_ids_distinct_for_identical_input() {
        let service = ClaimService::new(0);
        let a = service.submit(&intent()).await;
        let b = service.submit(&intent()).await;
        assert_ne!(a.claim_id, b.claim_id);
    }

    #[test]
    fn test_status_window_brackets_now() {
        let service = ClaimService::new(0);
        let status = service.claim_status("claim_1_x");
        assert!(status.submitted_at < Utc::now());
        assert!(status.estimated_completion > Utc::now());
    }
}
