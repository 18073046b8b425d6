// HTTP client for the donation endpoints.
// The flow state machine talks through the DonationApi trait so tests
// can substitute a stub without a server.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

/// Outcome of a successfully submitted donation.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationConfirmation {
    /// Payment id for card donations, escrow id for Lightning ones.
    pub identifier: String,
    pub amount: Decimal,
    pub artist_name: String,
    pub status: String,
}

/// Donation submission operations the flow depends on.
#[async_trait]
pub trait DonationApi {
    async fn donate(
        &self,
        artist_id: &str,
        artist_name: &str,
        amount: Decimal,
    ) -> Result<DonationConfirmation>;

    async fn donate_lightning(
        &self,
        artist_id: &str,
        artist_name: &str,
        amount: Decimal,
        wallet_address: &str,
    ) -> Result<DonationConfirmation>;
}

/// DonationApi backed by the HTTP API.
pub struct HttpDonationApi {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardReceipt {
    success: bool,
    payment_id: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EscrowReceipt {
    escrow_id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

impl HttpDonationApi {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    async fn rejection(response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(body) => anyhow::anyhow!(
                "{}",
                body.message.unwrap_or(body.error)
            ),
            Err(_) => anyhow::anyhow!("Donation failed with status {}", status),
        }
    }
}

#[async_trait]
impl DonationApi for HttpDonationApi {
    async fn donate(
        &self,
        artist_id: &str,
        artist_name: &str,
        amount: Decimal,
    ) -> Result<DonationConfirmation> {
        let response = self
            .client
            .post(format!("{}/api/donate-mock", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&json!({
                "artistName": artist_name,
                "artistId": artist_id,
                "amount": amount,
            }))
            .send()
            .await
            .context("Donation service unreachable")?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let receipt: CardReceipt = response
            .json()
            .await
            .context("Malformed donation receipt")?;
        if !receipt.success {
            bail!("Donation was not accepted: {}", receipt.message);
        }

        Ok(DonationConfirmation {
            identifier: receipt.payment_id,
            amount,
            artist_name: artist_name.to_string(),
            status: "succeeded".to_string(),
        })
    }

    async fn donate_lightning(
        &self,
        artist_id: &str,
        artist_name: &str,
        amount: Decimal,
        wallet_address: &str,
    ) -> Result<DonationConfirmation> {
        let response = self
            .client
            .post(format!("{}/api/donate-lightning", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&json!({
                "artistName": artist_name,
                "artistId": artist_id,
                "amount": amount,
                "walletAddress": wallet_address,
            }))
            .send()
            .await
            .context("Donation service unreachable")?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let receipt: EscrowReceipt = response
            .json()
            .await
            .context("Malformed escrow receipt")?;

        Ok(DonationConfirmation {
            identifier: receipt.escrow_id,
            amount,
            artist_name: artist_name.to_string(),
            status: receipt.status,
        })
    }
}
