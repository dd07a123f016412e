//! Password-based key derivation using PBKDF2-HMAC-SHA512
//!
//! The iteration count and digest are fixed for this version so that keys
//! derived earlier can always be re-derived. Derivation is deliberately slow
//! (tens of milliseconds) to make password guessing expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::debug;
use zeroize::Zeroizing;

use super::{DerivedKey, KEY_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 20_000;

/// Derive a 256-bit key from a password with PBKDF2-HMAC-SHA512, 20000 iterations
///
/// # Arguments
/// * `password` - The password as text or raw bytes, must not be empty
/// * `salt` - A 64-byte salt (use `generate_salt()` to create one)
///
/// # Returns
/// A 32-byte key suitable for AES-256. The same password and salt always
/// produce the same key.
pub fn derive_key(password: impl AsRef<[u8]>, salt: &[u8]) -> Result<DerivedKey> {
    let password = password.as_ref();
    if password.is_empty() {
        return Err(CryptoError::InvalidParameter(
            "Password must not be empty".to_string(),
        ));
    }
    if salt.len() != SALT_LEN {
        return Err(CryptoError::invalid_length("salt", SALT_LEN, salt.len()));
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha512>(password, salt, PBKDF2_ITERATIONS, &mut key[..]);

    debug!("Derived {}-byte key ({} iterations)", KEY_LEN, PBKDF2_ITERATIONS);
    Ok(DerivedKey::new(*key))
}
