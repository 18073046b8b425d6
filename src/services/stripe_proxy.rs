// Payment backend proxy.
// Forwards validated donation intents to the local Express process that
// drives the Stripe SDK, and relays its responses. One outbound call per
// request, no retries; a downstream rejection is passed through with its
// original error body, and a transport failure is a hard error for the
// caller.

use crate::models::{BackendDonationAck, BackendDonationRequest};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

/// Outcome of a relayed call: either the downstream's success payload or
/// its rejection, carried verbatim.
#[derive(Debug)]
pub enum ProxyResult<T> {
    Ok(T),
    Rejected { status: u16, body: serde_json::Value },
}

/// Client for the Stripe-backed payment process.
pub struct StripeProxy {
    client: Client,
    backend_url: String,
}

impl StripeProxy {
    pub fn new(client: Client, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
        }
    }

    /// Create a payment intent for a donation.
    ///
    /// POST {backend}/donate
    pub async fn create_donation(
        &self,
        request: &BackendDonationRequest,
    ) -> Result<ProxyResult<BackendDonationAck>> {
        let response = self
            .client
            .post(format!("{}/donate", self.backend_url))
            .json(request)
            .send()
            .await
            .context("Payment backend unreachable")?;

        let status = response.status();
        if status.is_success() {
            let ack = response
                .json()
                .await
                .context("Invalid payment backend response")?;
            Ok(ProxyResult::Ok(ack))
        } else {
            Ok(ProxyResult::Rejected {
                status: status.as_u16(),
                body: Self::error_body(response).await,
            })
        }
    }

    /// Look up the status of a previously created payment intent.
    ///
    /// GET {backend}/donate/{payment_intent_id}
    pub async fn payment_status(
        &self,
        payment_intent_id: &str,
    ) -> Result<ProxyResult<serde_json::Value>> {
        let response = self
            .client
            .get(format!("{}/donate/{}", self.backend_url, payment_intent_id))
            .send()
            .await
            .context("Payment backend unreachable")?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json()
                .await
                .context("Invalid payment backend response")?;
            Ok(ProxyResult::Ok(body))
        } else {
            Ok(ProxyResult::Rejected {
                status: status.as_u16(),
                body: Self::error_body(response).await,
            })
        }
    }

    /// Reachability probe for the health endpoint.
    ///
    /// GET {backend}/health
    pub async fn is_reachable(&self) -> bool {
        self.client
            .get(format!("{}/health", self.backend_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn error_body(response: reqwest::Response) -> serde_json::Value {
        response
            .json()
            .await
            .unwrap_or_else(|_| json!({ "error": "Payment processing failed" }))
    }
}
