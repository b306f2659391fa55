//! CSRF state token generation.
//!
//! The `state` parameter is opaque to this crate and passed through to the
//! authorization endpoint verbatim. Callers that mint their own token can use
//! this helper.

use rand::Rng;

/// Generate a cryptographically random state token.
pub fn generate_state_token() -> String {
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_state_token_length() {
        let token = generate_state_token();
        assert_eq!(token.len(), 64); // 32 bytes hex encoded
    }

    #[test]
    fn test_generate_state_token_unique() {
        let a = generate_state_token();
        let b = generate_state_token();
        assert_ne!(a, b);
    }
}
