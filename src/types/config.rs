//! Client configuration

use std::time::Duration;

use crate::Result;

/// Default request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the AddPay client
///
/// Key material is accepted in any encoding the loaders understand:
/// PEM-wrapped PKCS#1/PKCS#8 or bare base64 DER for the merchant private
/// key, PEM or bare base64 SubjectPublicKeyInfo for the gateway public key.
#[derive(Clone)]
pub struct Config {
    /// Application identifier issued by AddPay
    pub app_id: String,
    /// Base URL of the gateway API
    pub gateway_url: String,
    /// Merchant's RSA private key material
    pub merchant_private_key: Vec<u8>,
    /// Gateway's RSA public key material
    pub gateway_public_key: Vec<u8>,
    /// Request timeout (defaults to [`DEFAULT_TIMEOUT`])
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("gateway_url", &self.gateway_url)
            .field("merchant_private_key", &"<redacted>")
            .field("gateway_public_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Create a new configuration
    pub fn new(
        app_id: impl Into<String>,
        gateway_url: impl Into<String>,
        merchant_private_key: impl Into<Vec<u8>>,
        gateway_public_key: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            gateway_url: gateway_url.into(),
            merchant_private_key: merchant_private_key.into(),
            gateway_public_key: gateway_public_key.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(crate::AddPayError::config("app_id is required"));
        }
        if self.gateway_url.is_empty() {
            return Err(crate::AddPayError::config("gateway_url is required"));
        }
        url::Url::parse(&self.gateway_url).map_err(|e| {
            crate::AddPayError::config(format!("gateway_url is not a valid URL: {e}"))
        })?;
        if self.merchant_private_key.is_empty() {
            return Err(crate::AddPayError::config(
                "merchant_private_key is required",
            ));
        }
        if self.gateway_public_key.is_empty() {
            return Err(crate::AddPayError::config("gateway_public_key is required"));
        }
        Ok(())
    }
}
