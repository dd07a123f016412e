//! Off-thread key derivation for async callers
//!
//! PBKDF2 at 20000 iterations occupies a CPU for tens of milliseconds, long
//! enough to stall an async executor thread. This runs it on tokio's blocking
//! pool instead.

use zeroize::Zeroizing;

use crate::crypto::{derive_key, DerivedKey, Salt};
use crate::error::{CryptoError, Result};

/// Derive a key like [`derive_key`], on a blocking worker thread
///
/// Must be called from within a tokio runtime. The password is zeroized once
/// the worker finishes with it.
pub async fn derive_key_blocking(
    password: impl Into<Vec<u8>>,
    salt: Salt,
) -> Result<DerivedKey> {
    let password = Zeroizing::new(password.into());
    tokio::task::spawn_blocking(move || derive_key(password.as_slice(), salt.as_bytes()))
        .await
        .map_err(|e| CryptoError::UnderlyingCrypto(format!("Key derivation task failed: {}", e)))?
}
