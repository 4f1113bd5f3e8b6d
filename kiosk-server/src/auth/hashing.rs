//! Token and password digests
//!
//! Passwords and tokens are stored as unsalted SHA-512 hex digests. Raw
//! tokens only ever exist in cookies.

use sha2::{Digest, Sha512};

/// SHA-512 hex digest of `input`
pub fn sha512_hex(input: &str) -> String {
    hex::encode(Sha512::digest(input.as_bytes()))
}

/// Raw admin session token issued at login
pub fn new_session_token(now: i64, password: &str) -> String {
    sha512_hex(&format!("{now}{password}{}", uuid::Uuid::new_v4()))
}

/// Raw device token issued at pairing
pub fn new_device_token(now: i64, device_id: u32) -> String {
    sha512_hex(&format!("{now}{device_id}{}", uuid::Uuid::new_v4()))
}

/// Whether a raw token hashes to the stored digest
pub fn token_matches(raw: &str, stored_hash: &str) -> bool {
    !raw.is_empty() && !stored_hash.is_empty() && sha512_hex(raw) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha512_hex_known_value() {
        let digest = sha512_hex("abc");
        assert_eq!(digest.len(), 128);
        assert!(digest.starts_with("ddaf35a193617aba"));
    }

    #[test]
    fn test_token_matches() {
        let token = new_session_token(1_700_000_000_000, "Passw0rd");
        let stored = sha512_hex(&token);
        assert!(token_matches(&token, &stored));
        assert!(!token_matches("other", &stored));
        assert!(!token_matches("", &sha512_hex("")));
        assert!(!token_matches(&token, ""));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(new_device_token(5, 1), new_device_token(5, 1));
        assert_ne!(new_session_token(5, "Passw0rd"), new_session_token(5, "Passw0rd"));
    }
}
