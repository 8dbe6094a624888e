//! Publish token derivation and verification.
//!
//! A publish token is the lowercase hex SHA-256 digest of the shared secret
//! immediately followed by the article name. Clients holding the secret
//! compute it themselves; the server recomputes and compares.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Token that authorises publishing article `name`.
pub fn publish_token(secret: &str, name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(name.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks `token` against the expected token for `name`.
///
/// The comparison runs in constant time with respect to the token contents.
pub fn verify_publish_token(secret: &str, name: &str, token: &str) -> bool {
    let expected = publish_token(secret, name);
    expected.as_bytes().ct_eq(token.as_bytes()).into()
}
