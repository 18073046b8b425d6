// Configuration management.
// Loads application settings from environment variables, with defaults
// suitable for local development next to the Express payment backend.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Payment backend proxy settings
    pub payments: PaymentsConfig,
    /// Donation thresholds and simulated latencies
    pub donation: DonationConfig,
    /// Spotify upstream settings
    pub spotify: SpotifyConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Worker thread count (actix default when unset)
    pub workers: Option<usize>,
}

/// Payment backend proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Base URL of the local Express process driving the Stripe SDK
    pub backend_url: String,
    /// Stripe secret key. The key is consumed by the backend process;
    /// we only surface whether it is configured.
    pub stripe_secret_key: Option<String>,
    /// Outbound request timeout in seconds
    pub request_timeout: u64,
}

/// Donation thresholds and simulated latencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationConfig {
    /// Platform minimum for card donations, in USD
    pub min_amount_usd: Decimal,
    /// Platform minimum for Lightning donations, in BTC
    pub min_amount_btc: Decimal,
    /// Simulated processing latency for the mock payment path (ms)
    pub mock_latency_ms: u64,
    /// Simulated HTLC negotiation latency for the Lightning path (ms)
    pub escrow_latency_ms: u64,
    /// Simulated review-queue latency for profile claims (ms)
    pub claim_latency_ms: u64,
    /// Escrow time-lock horizon in seconds
    pub escrow_timelock_secs: u64,
}

/// Spotify upstream settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    /// Base URL of the Spotify Web API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env`
    /// file when present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("Invalid SERVER_PORT")?,
                workers: env::var("SERVER_WORKERS").ok().and_then(|s| s.parse().ok()),
            },
            payments: PaymentsConfig {
                backend_url: env::var("PAYMENT_BACKEND_URL")
                    .unwrap_or_else(|_| "http://localhost:3001".to_string()),
                stripe_secret_key: env::var("STRIPE_SECRET_KEY").ok(),
                request_timeout: env::var("PAYMENT_REQUEST_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("Invalid PAYMENT_REQUEST_TIMEOUT")?,
            },
            donation: DonationConfig {
                min_amount_usd: env::var("DONATION_MIN_USD")
                    .unwrap_or_else(|_| "1.00".to_string())
                    .parse()
                    .context("Invalid DONATION_MIN_USD")?,
                min_amount_btc: env::var("DONATION_MIN_BTC")
                    .unwrap_or_else(|_| "0.001".to_string())
                    .parse()
                    .context("Invalid DONATION_MIN_BTC")?,
                mock_latency_ms: env::var("MOCK_LATENCY_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("Invalid MOCK_LATENCY_MS")?,
                escrow_latency_ms: env::var("ESCROW_LATENCY_MS")
                    .unwrap_or_else(|_| "1500".to_string())
                    .parse()
                    .context("Invalid ESCROW_LATENCY_MS")?,
                claim_latency_ms: env::var("CLAIM_LATENCY_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("Invalid CLAIM_LATENCY_MS")?,
                escrow_timelock_secs: env::var("ESCROW_TIMELOCK_SECS")
                    .unwrap_or_else(|_| (7 * 24 * 60 * 60).to_string())
                    .parse()
                    .context("Invalid ESCROW_TIMELOCK_SECS")?,
            },
            spotify: SpotifyConfig {
                api_base_url: env::var("SPOTIFY_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.spotify.com/v1".to_string()),
            },
        })
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.payments.backend_url.is_empty() {
            anyhow::bail!("Payment backend URL cannot be empty");
        }

        if self.payments.request_timeout == 0 {
            anyhow::bail!("Payment request timeout cannot be 0");
        }

        if self.donation.min_amount_usd <= Decimal::ZERO {
            anyhow::bail!("USD donation minimum must be positive");
        }

        if self.donation.min_amount_btc <= Decimal::ZERO {
            anyhow::bail!("BTC donation minimum must be positive");
        }

        if self.spotify.api_base_url.is_empty() {
            anyhow::bail!("Spotify API base URL cannot be empty");
        }

        Ok(())
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Configuration for tests: defaults with the simulated latencies
    /// zeroed so handler tests do not sleep.
    #[cfg(test)]
    pub fn for_test() -> Self {
        let mut config = Config::default();
        config.donation.mock_latency_ms = 0;
        config.donation.escrow_latency_ms = 0;
        config.donation.claim_latency_ms = 0;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            payments: PaymentsConfig {
                backend_url: "http://localhost:3001".to_string(),
                stripe_secret_key: None,
                request_timeout: 30,
            },
            donation: DonationConfig {
                min_amount_usd: Decimal::new(100, 2),
                min_amount_btc: Decimal::new(1, 3),
                mock_latency_ms: 1000,
                escrow_latency_ms: 1500,
                claim_latency_ms: 1000,
                escrow_timelock_secs: 7 * 24 * 60 * 60,
            },
            spotify: SpotifyConfig {
                api_base_url: "https://api.spotify.com/v1".to_string(),
            },
        }
    }
}
