//! Password hashing for account login.
//!
//! Passwords are stored as hex-encoded SHA-256 digests salted with the
//! account's email, so identical passwords on different accounts produce
//! different digests.

use sha2::{Digest, Sha256};

/// Hashes a password for storage.
///
/// # Arguments
/// - `password` - The cleartext password
/// - `email` - The account email, mixed in as salt
///
/// # Returns
/// - Hex-encoded SHA-256 digest
pub fn hash_password(password: &str, email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks a cleartext password against a stored digest.
pub fn verify_password(password: &str, email: &str, stored_hash: &str) -> bool {
    hash_password(password, email) == stored_hash
}
