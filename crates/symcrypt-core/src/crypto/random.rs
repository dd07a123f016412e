//! Secure random salts and nonces
//!
//! Both generators draw directly from the operating system CSPRNG and keep
//! no state between calls.

use rand::{rngs::OsRng, RngCore};
use tracing::debug;

use super::{Nonce, Salt, NONCE_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};

/// Fill buffer with cryptographically secure random bytes
fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|e| {
        CryptoError::EntropySource(format!("OS random generator unavailable: {}", e))
    })
}

/// Generate a random 64-byte salt for key derivation
pub fn generate_salt() -> Result<Salt> {
    let mut salt = [0u8; SALT_LEN];
    fill_secure(&mut salt)?;
    debug!("Generated {}-byte salt", SALT_LEN);
    Ok(Salt::new(salt))
}

/// Generate a random 12-byte nonce for AES-GCM
///
/// 96 bits is the recommended GCM nonce size. A nonce must never repeat under
/// the same key, and random nonces only keep the collision probability
/// negligible for up to about 2^48 encryptions per key (birthday bound).
/// Callers that encrypt at high volume under one key need a counter-based
/// nonce scheme instead; this crate does not provide one.
pub fn generate_nonce() -> Result<Nonce> {
    let mut nonce = [0u8; NONCE_LEN];
    fill_secure(&mut nonce)?;
    debug!("Generated {}-byte nonce", NONCE_LEN);
    Ok(Nonce::new(nonce))
}
