// Success-only mock payment path for local testing without the Stripe
// backend. Waits a fixed simulated latency, then fabricates a payment
// identifier. No side effect beyond a log line.

use crate::models::{DonationIntent, MockDonationResponse};
use crate::utils::{mock_client_secret, mock_payment_id};
use tokio::time::{sleep, Duration};

pub struct MockDonationService {
    latency: Duration,
}

impl MockDonationService {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    /// Synthesize a successful payment for a validated donation intent.
    pub async fn create_payment(&self, intent: &DonationIntent) -> MockDonationResponse {
        sleep(self.latency).await;

        let payment_id = mock_payment_id();
        log::info!(
            "Mock donation processed: {} (${} to {})",
            payment_id,
            intent.amount,
            intent.artist_name
        );

        MockDonationResponse {
            success: true,
            payment_id,
            message: format!(
                "Successfully donated ${} to {}!",
                intent.amount, intent.artist_name
            ),
            client_secret: mock_client_secret(),
        }
    }
}
