//! Salted password digests.
//!
//! Stored form is `salt$hex(sha256(salt || password))`. Verification is a
//! constant recomputation; there is no parameterized work factor here, the
//! stored hash is treated as opaque by everything above this module.

use sha2::{Digest, Sha256};
use uuid::Uuid;

const SEPARATOR: char = '$';

/// Hash a clear-text password under a fresh random salt
pub fn hash(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}{SEPARATOR}{}", digest(&salt, password))
}

/// Check a clear-text password against a stored hash
pub fn verify(password: &str, stored: &str) -> bool {
    match stored.split_once(SEPARATOR) {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_salts_differ() {
        let first = hash("hunter2");
        let second = hash("hunter2");
        assert_ne!(first, second);
        assert!(verify("hunter2", &first));
        assert!(verify("hunter2", &second));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let stored = hash("hunter2");
        assert!(!verify("hunter3", &stored));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify("hunter2", "no-separator"));
    }
}
