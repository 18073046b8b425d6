// Spotify upstream client.
// Fetches the listener's top artists for the three listening windows and
// maps upstream failures to stable error codes the client can branch on,
// instead of relaying raw Spotify messages.

use crate::models::{SpotifyArtist, TopArtistsPage, TopArtistsResponse};
use reqwest::{Client, StatusCode};
use thiserror::Error;

const PAGE_LIMIT: &str = "20";

/// Upstream failures, each with a stable wire code.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Your Spotify session has expired. Please sign in again.")]
    TokenExpired,
    #[error("Spotify requires additional permissions to access your top artists.")]
    InsufficientPermissions,
    #[error("Too many requests to Spotify. Please try again later.")]
    RateLimited,
    #[error("There was an error connecting to Spotify. Please try again.")]
    Transport(#[from] reqwest::Error),
    #[error("There was an error connecting to Spotify. Please try again.")]
    UpstreamStatus(u16),
}

impl SpotifyError {
    /// Stable code for client-side branching.
    pub fn code(&self) -> &'static str {
        match self {
            SpotifyError::TokenExpired => "TOKEN_EXPIRED",
            SpotifyError::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            SpotifyError::RateLimited => "RATE_LIMITED",
            SpotifyError::Transport(_) | SpotifyError::UpstreamStatus(_) => "UNKNOWN_ERROR",
        }
    }

    /// Error summary used as the response `error` field.
    pub fn title(&self) -> &'static str {
        match self {
            SpotifyError::TokenExpired => "Token expired",
            SpotifyError::InsufficientPermissions => "Insufficient permissions",
            SpotifyError::RateLimited => "Rate limited",
            SpotifyError::Transport(_) | SpotifyError::UpstreamStatus(_) => {
                "Failed to fetch top artists"
            }
        }
    }

    /// HTTP status relayed to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            SpotifyError::TokenExpired => 401,
            SpotifyError::InsufficientPermissions => 403,
            SpotifyError::RateLimited => 429,
            SpotifyError::Transport(_) | SpotifyError::UpstreamStatus(_) => 500,
        }
    }
}

pub struct SpotifyService {
    client: Client,
    base_url: String,
}

impl SpotifyService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Top artists across the short, medium and long listening windows,
    /// fetched concurrently with the session's bearer token.
    pub async fn top_artists(&self, access_token: &str) -> Result<TopArtistsResponse, SpotifyError> {
        let (weekly, monthly, yearly) = futures_util::try_join!(
            self.fetch_range(access_token, "short_term"),
            self.fetch_range(access_token, "medium_term"),
            self.fetch_range(access_token, "long_term"),
        )?;

        Ok(TopArtistsResponse {
            weekly,
            monthly,
            yearly,
        })
    }

    async fn fetch_range(
        &self,
        access_token: &str,
        time_range: &str,
    ) -> Result<Vec<SpotifyArtist>, SpotifyError> {
        let response = self
            .client
            .get(format!("{}/me/top/artists", self.base_url))
            .bearer_auth(access_token)
            .query(&[("limit", PAGE_LIMIT), ("time_range", time_range)])
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(SpotifyError::TokenExpired),
            StatusCode::FORBIDDEN => Err(SpotifyError::InsufficientPermissions),
            StatusCode::TOO_MANY_REQUESTS => Err(SpotifyError::RateLimited),
            status if status.is_success() => {
                let page: TopArtistsPage = response.json().await?;
                Ok(page.items)
            }
            status => Err(SpotifyError::UpstreamStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(SpotifyError::TokenExpired.code(), "TOKEN_EXPIRED");
        assert_eq!(
            SpotifyError::InsufficientPermissions.code(),
            "INSUFFICIENT_PERMISSIONS"
        );
        assert_eq!(SpotifyError::RateLimited.code(), "RATE_LIMITED");
        assert_eq!(SpotifyError::UpstreamStatus(502).code(), "UNKNOWN_ERROR");
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(SpotifyError::TokenExpired.status_code(), 401);
        assert_eq!(SpotifyError::InsufficientPermissions.status_code(), 403);
        assert_eq!(SpotifyError::RateLimited.status_code(), 429);
        assert_eq!(SpotifyError::UpstreamStatus(502).status_code(), 500);
    }
}
