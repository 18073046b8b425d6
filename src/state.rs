// Application state.
// Holds the configuration, the shared outbound HTTP client and the static
// chart catalog. Built once in main and passed to every handler; nothing
// here is a process-wide singleton and nothing is mutated per request.

use crate::config::Config;
use crate::services::ChartCatalog;
use actix_web::web;
use anyhow::{Context, Result};
use std::time::Duration;

/// Shared application state.
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Outbound HTTP client (payment backend proxy, Spotify upstream)
    pub http_client: reqwest::Client,
    /// Static leaderboard data served by the charts endpoint
    pub charts: ChartCatalog,
}

impl AppState {
    /// Create the application state from a loaded configuration.
    ///
    /// The outbound client carries a request timeout so a hung payment
    /// backend fails the request instead of stalling it indefinitely.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.payments.request_timeout))
            .build()
            .context("Failed to build outbound HTTP client")?;

        Ok(Self {
            config,
            http_client,
            charts: ChartCatalog::builtin(),
        })
    }

    /// State for handler tests: zeroed simulated latencies.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(Config::for_test()).expect("failed to build test state")
    }

    /// State for handler tests that talk to a stubbed payment backend.
    #[cfg(test)]
    pub fn new_for_test_with_backend(backend_url: &str) -> Self {
        let mut config = Config::for_test();
        config.payments.backend_url = backend_url.to_string();
        Self::new(config).expect("failed to build test state")
    }

    /// State for handler tests that talk to a stubbed Spotify upstream.
    #[cfg(test)]
    pub fn new_for_test_with_spotify(api_base_url: &str) -> Self {
        let mut config = Config::for_test();
        config.spotify.api_base_url = api_base_url.to_string();
        Self::new(config).expect("failed to build test state")
    }
}

/// Application state data type alias.
pub type AppStateData = web::Data<AppState>;
