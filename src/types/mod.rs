//! Core types for the AddPay client
//!
//! Type-safe representations of the client configuration, the gateway's
//! business-operation requests and responses, and the generic response
//! envelope.
//!
//! # Architecture
//!
//! - [`config`] - client configuration and validation
//! - [`payment`] - checkout, tokenized-pay, and debit-check types
//! - [`response`] - the gateway's `{success, data, error}` envelope
//!
//! # Examples
//!
//! ```
//! use addpay::types::{CheckoutRequest, Config};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! # fn example() -> addpay::Result<()> {
//! let config = Config::new(
//!     "your-app-id",
//!     "https://api.addpay.example",
//!     b"<merchant private key>".to_vec(),
//!     b"<gateway public key>".to_vec(),
//! );
//!
//! let request = CheckoutRequest::new(
//!     "MERCHANT001",
//!     "STORE001",
//!     "ORDER-001",
//!     "USD",
//!     Decimal::from_str("99.99").unwrap(),
//!     1_900_000_000,
//!     "https://yourstore.example/webhook/notify",
//!     "https://yourstore.example/checkout/success",
//! )
//! .with_description("Test product purchase");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod payment;
pub mod response;

// Re-export commonly used types
pub use config::{Config, DEFAULT_TIMEOUT};
pub use payment::{
    CheckoutRequest, CheckoutResponse, DebitCheckRequest, DebitCheckResponse, QueryTokenRequest,
    QueryTokenResponse, TokenInfo, TokenizedPayRequest, TokenizedPayResponse,
};
pub use response::{ApiError, ApiResponse};
