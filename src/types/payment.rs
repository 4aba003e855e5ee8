//! Request and response types for the gateway's business operations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hosted checkout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Merchant number issued by AddPay
    pub merchant_no: String,
    /// Store number within the merchant account
    pub store_no: String,
    /// Merchant's own order reference, unique per order
    pub merchant_order_no: String,
    /// ISO currency code for the order
    pub price_currency: String,
    /// Order amount in major units
    pub order_amount: Decimal,
    /// Unix timestamp after which the checkout link expires
    pub expires: i64,
    /// Webhook URL for asynchronous payment notification
    pub notify_url: String,
    /// URL the shopper is returned to after payment
    pub return_url: String,
    /// Free-text order description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shopper geolocation hint (country code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<String>,
}

impl CheckoutRequest {
    /// Create a checkout request with the required fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        merchant_no: impl Into<String>,
        store_no: impl Into<String>,
        merchant_order_no: impl Into<String>,
        price_currency: impl Into<String>,
        order_amount: Decimal,
        expires: i64,
        notify_url: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_no: merchant_no.into(),
            store_no: store_no.into(),
            merchant_order_no: merchant_order_no.into(),
            price_currency: price_currency.into(),
            order_amount,
            expires,
            notify_url: notify_url.into(),
            return_url: return_url.into(),
            description: None,
            geolocation: None,
        }
    }

    /// Set the order description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the shopper geolocation hint
    pub fn with_geolocation(mut self, geolocation: impl Into<String>) -> Self {
        self.geolocation = Some(geolocation.into());
        self
    }
}

/// Hosted checkout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// URL the shopper should be redirected to
    pub pay_url: String,
}

/// Query-token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTokenRequest {
    /// Card token to look up
    pub token: String,
}

/// Stored card details behind a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Masked card number
    pub card_number: String,
    /// Card expiry date
    pub expiry_date: String,
    /// Card scheme
    pub card_type: String,
}

/// Query-token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTokenResponse {
    /// Token lifecycle status
    pub token_status: String,
    /// Details of the tokenized card
    pub token_info: TokenInfo,
}

/// Tokenized payment request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizedPayRequest {
    /// Merchant number issued by AddPay
    pub merchant_no: String,
    /// Store number within the merchant account
    pub store_no: String,
    /// Merchant's own order reference
    pub merchant_order_no: String,
    /// Card token to charge
    pub token: String,
    /// ISO currency code
    pub price_currency: String,
    /// Order amount in major units
    pub order_amount: Decimal,
    /// Webhook URL for asynchronous notification
    pub notify_url: String,
    /// Free-text order description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tokenized payment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizedPayResponse {
    /// Gateway transaction identifier
    pub transaction_id: String,
    /// Transaction outcome status
    pub transaction_status: String,
}

/// Debit check (mandate) request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebitCheckRequest {
    /// Merchant number issued by AddPay
    pub merchant_no: String,
    /// Store number within the merchant account
    pub store_no: String,
    /// Merchant's own order reference
    pub merchant_order_no: String,
    /// Debtor's bank account number
    pub account_number: String,
    /// Debtor's bank code
    pub bank_code: String,
    /// Collection amount in major units
    pub amount: Decimal,
    /// ISO currency code
    pub currency: String,
    /// Webhook URL for asynchronous notification
    pub notify_url: String,
    /// Free-text mandate description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Debit check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebitCheckResponse {
    /// Gateway mandate identifier
    pub mandate_id: String,
    /// Mandate lifecycle status
    pub mandate_status: String,
}
