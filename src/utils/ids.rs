// Receipt identifier generation.
// Identifiers are opaque: a millisecond timestamp plus a random suffix.
// Collision-improbable, not guaranteed unique; nothing here is ever
// looked up again, because receipts are never stored.

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Generate a prefixed receipt identifier, e.g. `htlc_1712345678901_k3j9x2m4q`.
pub fn generate_receipt_id(prefix: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}

/// Random lowercase alphanumeric suffix.
pub fn random_suffix(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Payment-intent style identifier for the mock processor path.
pub fn mock_payment_id() -> String {
    format!("pi_mock_{}_{}", Utc::now().timestamp_millis(), random_suffix(6))
}

/// Client secret matching the mock payment identifier shape.
pub fn mock_client_secret() -> String {
    format!(
        "pi_mock_{}_secret_{}",
        Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}

/// SHA-256 of a random 32-byte preimage, hex encoded. Stands in for the
/// payment hash of an HTLC; the preimage is discarded immediately, so the
/// hash can never be redeemed.
pub fn random_htlc_hash() -> String {
    let preimage: [u8; 32] = rand::thread_rng().gen();
    format!("0x{}", hex::encode(Sha256::digest(preimage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_ids_are_distinct() {
        let a = generate_receipt_id("htlc");
        let b = generate_receipt_id("htlc");
        assert!(a.starts_with("htlc_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_mock_payment_ids_are_distinct() {
        assert_ne!(mock_payment_id(), mock_payment_id());
    }

    #[test]
    fn test_random_suffix_length_and_charset() {
        let suffix = random_suffix(9);
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(suffix, suffix.to_lowercase());
    }

    #[test]
    fn test_htlc_hash_shape() {
        let hash = random_htlc_hash();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 2 + 64);
        assert_ne!(hash, random_htlc_hash());
    }
}
