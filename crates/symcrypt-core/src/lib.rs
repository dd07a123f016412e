//! # symcrypt-core
//!
//! Symmetric cryptography helpers:
//! - PBKDF2-HMAC-SHA512 key derivation (20000 iterations, 256-bit output)
//! - Cryptographically secure random salts (64 bytes) and nonces (12 bytes)
//! - AES-256-GCM authenticated encryption with a detached 16-byte tag
//!
//! Every operation returns [`Result`]; failures carry an [`ErrorKind`] and a
//! message. Nonce uniqueness per key is the caller's responsibility.

pub mod crypto;
pub mod error;
pub mod worker;

pub use crypto::{
    decrypt, decrypt_sealed, derive_key, encrypt, generate_nonce, generate_salt, AuthTag,
    DerivedKey, Nonce, Salt, SealedData,
};
pub use error::{CryptoError, ErrorKind, Result};
pub use worker::derive_key_blocking;
