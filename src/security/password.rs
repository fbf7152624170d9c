/// Password hashing and verification using bcrypt
use crate::error::Result;

/// bcrypt work factor. 2^12 rounds resists offline brute force while staying
/// acceptable for interactive login.
const BCRYPT_COST: u32 = 12;

/// Hash a password with a per-call random salt.
/// Returns a self-describing hash string safe for database storage.
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Verify a password against its stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, password_hash)?)
}
