//! Password hashing policy.
//!
//! bcrypt with a fixed work factor. Every hash call embeds a fresh random
//! salt, so hashing the same password twice yields different strings; hashes
//! are only ever checked through `verify`, never compared for equality.

use tracing::error;

/// Fixed bcrypt work factor. Deliberately slow (tens of milliseconds);
/// throughput-limiting but not correctness-affecting.
pub const COST: u32 = 10;

/// Valid bcrypt hash of an unused filler password. Verified against when a
/// login targets an unknown username, so the unknown-user path spends the
/// same bcrypt work as a real verification.
const PHANTOM_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Hash a plaintext password with a fresh random salt.
/// # Errors
/// Returns an error if the hashing primitive fails
pub fn hash(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, COST)
}

/// Verify a plaintext against a stored hash using the salt and cost embedded
/// in the hash. A malformed stored hash counts as a mismatch, never a panic.
#[must_use]
pub fn verify(plain: &str, stored_hash: &str) -> bool {
    match bcrypt::verify(plain, stored_hash) {
        Ok(matched) => matched,
        Err(e) => {
            error!("Error verifying password hash: {}", e);
            false
        }
    }
}

/// Burn one bcrypt verification without revealing anything.
pub fn burn_verification(plain: &str) {
    let _ = bcrypt::verify(plain, PHANTOM_HASH);
}
