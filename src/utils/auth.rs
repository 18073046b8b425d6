// Session extraction.
// Authentication itself is delegated to the OAuth provider in front of
// this service; requests arrive carrying the provider's bearer token and
// optionally the profile email. The session is read-only request context.

use crate::models::Session;
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;
use anyhow::{anyhow, Result};

/// Header carrying the OAuth profile email alongside the bearer token.
const USER_EMAIL_HEADER: &str = "x-user-email";

/// Extract the authenticated session from request headers.
///
/// Expects `Authorization: Bearer <access token>`. Returns an error for
/// protected routes to convert into a 401 before any other processing.
pub fn extract_session(req: &HttpRequest) -> Result<Session> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| anyhow!("Missing Authorization header"))?
        .to_str()
        .map_err(|_| anyhow!("Invalid Authorization header encoding"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| anyhow!("Authorization header must use the Bearer scheme"))?
        .trim();

    if token.is_empty() {
        return Err(anyhow!("Empty bearer token"));
    }

    let email = req
        .headers()
        .get(USER_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(Session {
        access_token: token.to_string(),
        email,
    })
}
