//! # AddPay Rust client
//!
//! A type-safe Rust client for the AddPay payment-gateway API.
//!
//! ## Features
//!
//! - 🔑 **Flexible key ingestion**: merchant/gateway RSA keys in PEM
//!   (PKCS#1 or PKCS#8) or bare base64 DER, as produced by the other
//!   AddPay SDKs
//! - ✍️ **Request signing**: SHA-256 + RSA PKCS#1 v1.5 signatures over
//!   every outbound body, byte-compatible with the gateway's reference
//!   implementation
//! - 🧾 **Parameter signing**: canonical sorted/filtered/form-encoded
//!   parameter strings for form-style integrations
//! - 🔒 **Envelope encryption**: PKCS#1 v1.5 encrypt/decrypt for small
//!   secrets exchanged with the gateway
//! - 💳 **Business operations**: hosted checkout, tokenized payments,
//!   token queries, and debit checks
//! - 🧪 **Typed errors**: every failure mode is a distinct error kind
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use addpay::{Client, Config};
//! use addpay::types::CheckoutRequest;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(
//!         "your-app-id",
//!         "https://api.addpay.example",
//!         std::fs::read("merchant_private_key.pem")?,
//!         std::fs::read("gateway_public_key.pem")?,
//!     );
//!
//!     let client = Client::new(config)?;
//!
//!     let request = CheckoutRequest::new(
//!         "MERCHANT001",
//!         "STORE001",
//!         "ORDER-001",
//!         "USD",
//!         Decimal::from_str("99.99")?,
//!         1_900_000_000,
//!         "https://yourstore.example/webhook/notify",
//!         "https://yourstore.example/checkout/success",
//!     );
//!
//!     let response = client.hosted_checkout(&request).await?;
//!     println!("Checkout URL: {}", response.pay_url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **`auth`**: RSA key loading, request signing/verification, envelope
//!   encryption, canonical parameter strings
//! - **`client`**: HTTP client for the gateway's business operations
//! - **`types`**: configuration and request/response types
//! - **`error`**: comprehensive error handling

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use auth::RsaAuthenticator;
pub use client::Client;
pub use error::{AddPayError, Result};
pub use types::Config;

/// Current version of the addpay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new(
            "app",
            "https://api.addpay.example",
            b"key".to_vec(),
            b"key".to_vec(),
        )
        .with_timeout(std::time::Duration::from_secs(10));

        assert_eq!(config.app_id, "app");
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(10)));
        config.validate().unwrap();
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let config = Config::new("app", "nonsense", b"key".to_vec(), b"key".to_vec());
        assert!(matches!(
            config.validate().unwrap_err(),
            AddPayError::Config(_)
        ));
    }
}
