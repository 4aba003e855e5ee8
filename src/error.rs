//! Error types for the AddPay client
//!
//! Every failure inside the SDK surfaces as an [`AddPayError`] with a
//! distinct kind, so callers can branch on "bad key encoding" versus
//! "wrong key algorithm" versus "signature mismatch" for diagnostics.
//! Nothing is retried or silently downgraded inside the SDK; retry policy
//! belongs to the caller.

use crate::types::ApiError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, AddPayError>;

/// Errors produced by the AddPay client
#[derive(Debug, thiserror::Error)]
pub enum AddPayError {
    /// Key material was empty or whitespace-only
    #[error("empty key material: {0}")]
    EmptyKeyMaterial(String),

    /// Base64 or PEM container could not be decoded
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// DER decoded but matched no supported key structure
    #[error("unsupported key structure: {0}")]
    UnsupportedKeyStructure(String),

    /// Structure decoded to a non-RSA key type
    #[error("wrong key algorithm: {0}")]
    WrongKeyAlgorithm(String),

    /// The RSA signing primitive failed
    #[error("signing failed: {0}")]
    SigningFailure(String),

    /// Signature decoded but the cryptographic check did not match.
    /// This is an expected, non-exceptional outcome, distinct from
    /// decode errors.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Plaintext too large for the key modulus, or the encryption
    /// primitive failed
    #[error("encryption failed: {0}")]
    EncryptionFailure(String),

    /// Ciphertext malformed or undecryptable
    #[error("decryption failed: {0}")]
    DecryptionFailure(String),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The gateway returned an error envelope
    #[error("gateway error: {0}")]
    Api(#[from] ApiError),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AddPayError {
    /// Create an empty-key-material error
    pub fn empty_key_material(msg: impl Into<String>) -> Self {
        Self::EmptyKeyMaterial(msg.into())
    }

    /// Create an invalid-encoding error
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }

    /// Create an unsupported-key-structure error
    pub fn unsupported_key_structure(msg: impl Into<String>) -> Self {
        Self::UnsupportedKeyStructure(msg.into())
    }

    /// Create a wrong-key-algorithm error
    pub fn wrong_key_algorithm(msg: impl Into<String>) -> Self {
        Self::WrongKeyAlgorithm(msg.into())
    }

    /// Create a signing-failure error
    pub fn signing_failure(msg: impl Into<String>) -> Self {
        Self::SigningFailure(msg.into())
    }

    /// Create a verification-failed error
    pub fn verification_failed(msg: impl Into<String>) -> Self {
        Self::VerificationFailed(msg.into())
    }

    /// Create an encryption-failure error
    pub fn encryption_failure(msg: impl Into<String>) -> Self {
        Self::EncryptionFailure(msg.into())
    }

    /// Create a decryption-failure error
    pub fn decryption_failure(msg: impl Into<String>) -> Self {
        Self::DecryptionFailure(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
