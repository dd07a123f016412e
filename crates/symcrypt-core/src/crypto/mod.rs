//! Cryptographic primitives for symmetric encryption
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA512 key derivation from passwords
//! - Secure random salts and nonces from the OS CSPRNG
//! - AES-256-GCM authenticated encryption with a detached tag
//! - Secure memory handling with zeroize
//!
//! The components are independent. A typical caller generates a salt,
//! derives a key, generates a fresh nonce per message, then encrypts.

mod encryption;
mod key_derivation;
mod random;
mod secure_memory;
mod types;

pub use encryption::{decrypt, decrypt_sealed, encrypt, SealedData};
pub use key_derivation::{derive_key, PBKDF2_ITERATIONS};
pub use random::{generate_nonce, generate_salt};
pub use secure_memory::DerivedKey;
pub use types::{AuthTag, Nonce, Salt};

/// Length of the key derivation salt (64 bytes).
pub const SALT_LEN: usize = 64;
/// Length of the derived key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM nonce (12 bytes / 96 bits).
pub const NONCE_LEN: usize = 12;
/// Length of the GCM authentication tag (16 bytes / 128 bits).
pub const TAG_LEN: usize = 16;
