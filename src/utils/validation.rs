// Input validation helpers shared by the request models.

use regex::Regex;

/// Validate an email address format.
pub fn validate_email(email: &str) -> bool {
    // Compiled per call; validation sits on the request path of mock
    // endpoints where that cost is irrelevant.
    match Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$") {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}

/// Validate a Lightning wallet address as produced by the simulated
/// wallet connectors: a wallet label, an underscore, and an alphanumeric
/// suffix.
pub fn validate_wallet_address(address: &str) -> bool {
    if address.is_empty() || address.len() > 128 {
        return false;
    }
    address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
