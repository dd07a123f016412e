//! Fixed-length byte values shared by the crypto components

use super::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::{CryptoError, Result};

/// Generates a length-checked newtype over a fixed-size byte array
macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wrap raw bytes
            pub fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Copy from a slice, rejecting any other length
            pub fn from_slice(slice: &[u8]) -> Result<Self> {
                let bytes: [u8; $len] = slice
                    .try_into()
                    .map_err(|_| CryptoError::invalid_length($what, $len, slice.len()))?;
                Ok(Self(bytes))
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = CryptoError;

            fn try_from(slice: &[u8]) -> Result<Self> {
                Self::from_slice(slice)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }
    };
}

fixed_bytes!(
    /// Salt for password-based key derivation (64 bytes)
    Salt,
    SALT_LEN,
    "salt"
);

fixed_bytes!(
    /// AES-GCM nonce / IV (12 bytes)
    ///
    /// A nonce MUST NEVER be used twice with the same key. Reusing a
    /// (key, nonce) pair under GCM leaks the XOR of the plaintexts and lets
    /// an attacker forge authentication tags. This crate does not track
    /// nonces; uniqueness is the caller's responsibility.
    Nonce,
    NONCE_LEN,
    "nonce"
);

fixed_bytes!(
    /// AES-GCM authentication tag (16 bytes)
    AuthTag,
    TAG_LEN,
    "authentication tag"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_slice_exact_length() {
        let nonce = Nonce::from_slice(&[1u8; 12]).unwrap();
        assert_eq!(nonce.as_bytes(), &[1u8; 12]);

        let salt = Salt::try_from(&[2u8; 64][..]).unwrap();
        assert_eq!(salt.as_ref().len(), 64);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Nonce::from_slice(&[0u8; 10]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.message().contains("nonce"));

        assert!(Salt::from_slice(&[0u8; 16]).is_err());
        assert!(AuthTag::from_slice(&[0u8; 17]).is_err());
        assert!(AuthTag::from_slice(&[]).is_err());
    }

    #[test]
    fn test_debug_is_hex() {
        let tag = AuthTag::new([0xab; 16]);
        assert_eq!(
            format!("{:?}", tag),
            "AuthTag(abababababababababababababababab)"
        );
    }
}
