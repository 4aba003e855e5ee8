//! Request authentication for the AddPay gateway
//!
//! This module is the cryptographic core of the SDK: it ingests RSA key
//! material in the several encodings in circulation among AddPay SDKs and
//! provides the signing, verification, and envelope-encryption operations
//! every request depends on.
//!
//! # Architecture
//!
//! - [`keys`] - key-material parsing (PEM/base64 × PKCS#1/PKCS#8/SPKI)
//! - [`engine`] - [`RsaAuthenticator`]: sign, verify, encrypt, decrypt
//! - [`canonical`] - canonical parameter-string construction for
//!   form-style request signing
//!
//! # Examples
//!
//! ```no_run
//! use addpay::auth::RsaAuthenticator;
//!
//! # fn example() -> addpay::Result<()> {
//! # let (merchant_private_key, gateway_public_key) = (b"".as_slice(), b"".as_slice());
//! let auth = RsaAuthenticator::new(merchant_private_key, gateway_public_key)?;
//!
//! // Sign an outbound request body
//! let signature = auth.sign(br#"{"merchant_order_no":"ORDER-001"}"#)?;
//!
//! // Verify a gateway response signature
//! let _ = auth.verify(b"response body", &signature);
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod engine;
pub mod keys;

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use canonical::canonical_query_string;
pub use engine::RsaAuthenticator;
pub use keys::{load_private_key, load_public_key};
