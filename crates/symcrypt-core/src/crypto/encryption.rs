//! AES-256-GCM authenticated encryption with a detached tag
//!
//! Text format of [`SealedData`]: `{nonce_hex}:{auth_tag_hex}:{ciphertext_hex}`
//! - Nonce: 12 bytes (96 bits) - standard for GCM
//! - Auth tag: 16 bytes (128 bits)
//! - Ciphertext: same length as the plaintext
//!
//! No associated data is authenticated.

use std::str::FromStr;

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes256Gcm, Nonce as GcmNonce, Tag,
};
use tracing::debug;
use zeroize::Zeroize;

use super::{AuthTag, Nonce, KEY_LEN, NONCE_LEN, TAG_LEN};
use crate::error::{CryptoError, Result};

/// Output of [`encrypt`]: ciphertext plus the nonce and tag needed to decrypt it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedData {
    /// Encrypted bytes, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Nonce the data was encrypted under (echoed from the input)
    pub nonce: Nonce,
    /// Authentication tag (16 bytes)
    pub tag: AuthTag,
}

impl std::fmt::Display for SealedData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            hex::encode(self.nonce.as_bytes()),
            hex::encode(self.tag.as_bytes()),
            hex::encode(&self.ciphertext)
        )
    }
}

impl FromStr for SealedData {
    type Err = CryptoError;

    /// Parse from the format: `{nonce_hex}:{auth_tag_hex}:{ciphertext_hex}`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CryptoError::InvalidParameter(
                "Invalid sealed data format: expected nonce:tag:ciphertext".to_string(),
            ));
        }

        let nonce_bytes = hex::decode(parts[0])
            .map_err(|e| CryptoError::InvalidParameter(format!("Invalid nonce hex: {}", e)))?;
        let tag_bytes = hex::decode(parts[1])
            .map_err(|e| CryptoError::InvalidParameter(format!("Invalid auth tag hex: {}", e)))?;
        let ciphertext = hex::decode(parts[2]).map_err(|e| {
            CryptoError::InvalidParameter(format!("Invalid ciphertext hex: {}", e))
        })?;

        Ok(Self {
            ciphertext,
            nonce: Nonce::from_slice(&nonce_bytes)?,
            tag: AuthTag::from_slice(&tag_bytes)?,
        })
    }
}

fn check_len(what: &str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(CryptoError::invalid_length(what, expected, bytes.len()));
    }
    Ok(())
}

fn new_cipher(key: &[u8]) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key)
        .map_err(|e| CryptoError::UnderlyingCrypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext using AES-256-GCM
///
/// The nonce MUST be unique for every call made with the same key. Reusing a
/// (key, nonce) pair destroys both confidentiality and authenticity of every
/// message encrypted under it.
///
/// # Arguments
/// * `key` - The 256-bit encryption key (32 bytes)
/// * `nonce` - A 96-bit nonce (12 bytes), never reused with this key
/// * `plaintext` - The data to encrypt, treated as opaque bytes
///
/// # Returns
/// Ciphertext of the same length as `plaintext`, the nonce, and a 16-byte tag
pub fn encrypt(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<SealedData> {
    check_len("nonce", nonce, NONCE_LEN)?;
    check_len("key", key, KEY_LEN)?;
    let nonce = Nonce::from_slice(nonce)?;

    let cipher = new_cipher(key)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GcmNonce::from_slice(nonce.as_bytes()), b"", &mut buffer)
        .map_err(|e| CryptoError::UnderlyingCrypto(format!("Encryption failed: {}", e)))?;

    debug!("Encrypted {} bytes", buffer.len());

    Ok(SealedData {
        ciphertext: buffer,
        nonce,
        tag: AuthTag::new(tag.into()),
    })
}

/// Decrypt ciphertext using AES-256-GCM, verifying the authentication tag
///
/// # Arguments
/// * `key` - The 256-bit key (32 bytes)
/// * `nonce` - The nonce used at encryption (12 bytes)
/// * `ciphertext` - The encrypted bytes
/// * `tag` - The authentication tag produced at encryption (16 bytes)
///
/// # Returns
/// The plaintext, only if the tag verifies. On a tag mismatch the result is
/// [`CryptoError::Authentication`] and no decrypted bytes are released.
pub fn decrypt(key: &[u8], nonce: &[u8], ciphertext: &[u8], tag: &[u8]) -> Result<Vec<u8>> {
    check_len("key", key, KEY_LEN)?;
    check_len("nonce", nonce, NONCE_LEN)?;
    check_len("authentication tag", tag, TAG_LEN)?;

    let cipher = new_cipher(key)?;

    let mut buffer = ciphertext.to_vec();
    match cipher.decrypt_in_place_detached(
        GcmNonce::from_slice(nonce),
        b"",
        &mut buffer,
        Tag::from_slice(tag),
    ) {
        Ok(()) => {
            debug!("Decrypted {} bytes", buffer.len());
            Ok(buffer)
        }
        Err(_) => {
            // Unverified bytes never leave this function
            buffer.zeroize();
            debug!("Authentication tag mismatch on {}-byte ciphertext", ciphertext.len());
            Err(CryptoError::Authentication(
                "invalid key or corrupted data".to_string(),
            ))
        }
    }
}

/// Decrypt a [`SealedData`] value produced by [`encrypt`]
pub fn decrypt_sealed(key: &[u8], sealed: &SealedData) -> Result<Vec<u8>> {
    decrypt(
        key,
        sealed.nonce.as_bytes(),
        &sealed.ciphertext,
        sealed.tag.as_bytes(),
    )
}
