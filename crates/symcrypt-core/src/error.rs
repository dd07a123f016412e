//! Error types for symcrypt-core

use thiserror::Error;

/// Result type alias for crypto operations
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Coarse error category, for callers that branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong-length key/nonce/salt/tag, or empty required input
    InvalidParameter,
    /// Tag verification failed during decryption
    Authentication,
    /// Secure random source unavailable
    EntropySource,
    /// Any other fault surfaced by the primitive implementation
    UnderlyingCrypto,
}

/// Crypto error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Entropy source error: {0}")]
    EntropySource(String),

    #[error("Crypto error: {0}")]
    UnderlyingCrypto(String),
}

impl CryptoError {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            CryptoError::Authentication(_) => ErrorKind::Authentication,
            CryptoError::EntropySource(_) => ErrorKind::EntropySource,
            CryptoError::UnderlyingCrypto(_) => ErrorKind::UnderlyingCrypto,
        }
    }

    /// The detail message, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            CryptoError::InvalidParameter(msg)
            | CryptoError::Authentication(msg)
            | CryptoError::EntropySource(msg)
            | CryptoError::UnderlyingCrypto(msg) => msg,
        }
    }

    /// Build an `InvalidParameter` error for a buffer of the wrong length
    pub(crate) fn invalid_length(what: &str, expected: usize, actual: usize) -> Self {
        CryptoError::InvalidParameter(format!(
            "Invalid {} length: expected {}, got {}",
            what, expected, actual
        ))
    }
}
