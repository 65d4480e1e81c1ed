//! Password hashing and verification.
//!
//! Passwords are never stored or compared in cleartext. Each user gets a
//! random salt; the database stores the salt and the SHA-256 hash of
//! salt + password, both hex-encoded. Login recomputes the hash of the
//! supplied password and compares hashes.

use sha2::{Digest, Sha256};

/// Generate a random per-user salt (16 bytes = 32 hex chars).
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Hash a password with the given salt.
///
/// The salt is fed into the hasher before the password, so equal passwords
/// stored under different salts produce different hashes.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    hex::encode(hasher.finalize())
}

/// Check a supplied password against the stored salt and hash.
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    hash_password(password, salt) == stored_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let salt = generate_salt();
        let hash = hash_password("pw1", &salt);

        assert!(verify_password("pw1", &salt, &hash));
        assert!(!verify_password("pw2", &salt, &hash));
    }

    #[test]
    fn same_password_different_salts_differ() {
        let a = hash_password("password123", "aaaa");
        let b = hash_password("password123", "bbbb");
        assert_ne!(a, b);
    }

    #[test]
    fn salt_is_32_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
