//! AddPay gateway HTTP client
//!
//! [`Client`] is the entry point of the SDK: it owns the HTTP transport
//! and the request authenticator, signs every outbound JSON body with the
//! merchant's private key, and verifies the gateway's response signature
//! whenever one is present.
//!
//! # Examples
//!
//! ```no_run
//! use addpay::{Client, Config};
//! use addpay::types::CheckoutRequest;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! # async fn example() -> addpay::Result<()> {
//! # let (merchant_private_key, gateway_public_key): (Vec<u8>, Vec<u8>) = (vec![], vec![]);
//! let config = Config::new(
//!     "your-app-id",
//!     "https://api.addpay.example",
//!     merchant_private_key,
//!     gateway_public_key,
//! );
//! let client = Client::new(config)?;
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
//! );
//!
//! let response = client.hosted_checkout(&request).await?;
//! println!("redirect the shopper to {}", response.pay_url);
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::auth::RsaAuthenticator;
use crate::types::{
    ApiError, ApiResponse, CheckoutRequest, CheckoutResponse, Config, DebitCheckRequest,
    DebitCheckResponse, QueryTokenRequest, QueryTokenResponse, TokenizedPayRequest,
    TokenizedPayResponse, DEFAULT_TIMEOUT,
};
use crate::{AddPayError, Result};

/// Header carrying the request/response body signature
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Header carrying the merchant application identifier
pub const APP_ID_HEADER: &str = "X-App-ID";

/// AddPay API client
///
/// Construction fails if the configuration is invalid or either key fails
/// to parse, so an existing client is always able to sign. The client is
/// cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    app_id: String,
    gateway_url: String,
    http: reqwest::Client,
    auth: RsaAuthenticator,
}

impl Client {
    /// Create a new client from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let auth = RsaAuthenticator::new(&config.merchant_private_key, &config.gateway_public_key)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(format!("addpay/{}", crate::VERSION))
            .build()
            .map_err(|e| AddPayError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            app_id: config.app_id,
            gateway_url: config.gateway_url.trim_end_matches('/').to_string(),
            http,
            auth,
        })
    }

    /// Access the request authenticator, e.g. to verify a webhook
    /// notification signature out of band.
    pub fn auth(&self) -> &RsaAuthenticator {
        &self.auth
    }

    /// Create a hosted checkout session
    pub async fn hosted_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        info!(merchant_order_no = %request.merchant_order_no, "creating hosted checkout");

        let response: CheckoutResponse = self.post("/api/entry/checkout", request).await?;

        info!(pay_url = %response.pay_url, "hosted checkout created");
        Ok(response)
    }

    /// Query the state of a card token
    pub async fn query_token(&self, request: &QueryTokenRequest) -> Result<QueryTokenResponse> {
        info!(token = %request.token, "querying token");

        let response: QueryTokenResponse = self.post("/api/entry/query-token", request).await?;

        info!(token_status = %response.token_status, "token queried");
        Ok(response)
    }

    /// Charge a tokenized card
    pub async fn tokenized_pay(
        &self,
        request: &TokenizedPayRequest,
    ) -> Result<TokenizedPayResponse> {
        info!(merchant_order_no = %request.merchant_order_no, "processing tokenized payment");

        let response: TokenizedPayResponse = self.post("/api/entry/tokenized-pay", request).await?;

        info!(
            transaction_id = %response.transaction_id,
            transaction_status = %response.transaction_status,
            "tokenized payment processed"
        );
        Ok(response)
    }

    /// Create a debit check mandate
    pub async fn debit_check(&self, request: &DebitCheckRequest) -> Result<DebitCheckResponse> {
        info!(merchant_order_no = %request.merchant_order_no, "creating debit check");

        let response: DebitCheckResponse = self.post("/api/entry/debit-check", request).await?;

        info!(
            mandate_id = %response.mandate_id,
            mandate_status = %response.mandate_status,
            "debit check created"
        );
        Ok(response)
    }

    /// POST a signed JSON request and unwrap the gateway's response
    /// envelope.
    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)?;
        let signature = self.auth.sign(&body)?;
        let url = format!("{}{}", self.gateway_url, path);

        debug!(%url, body_len = body.len(), "sending gateway request");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header(APP_ID_HEADER, &self.app_id)
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_signature = response
            .headers()
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), body_len = body.len(), "received gateway response");

        // A signed response is verified against the gateway's public key
        // before anything in the body is trusted.
        if let Some(signature) = response_signature {
            if let Err(e) = self.auth.verify(&body, &signature) {
                error!(%url, "gateway response signature did not verify");
                return Err(e);
            }
        }

        if status.as_u16() >= 400 {
            return Err(Self::error_from_body(status, &body));
        }

        Self::unwrap_envelope(&body)
    }

    /// Turn an HTTP error response into the gateway's typed error when the
    /// body carries one.
    fn error_from_body(status: reqwest::StatusCode, body: &[u8]) -> AddPayError {
        if let Ok(envelope) = serde_json::from_slice::<ApiResponse>(body) {
            if let Some(api_error) = envelope.error {
                return AddPayError::Api(api_error);
            }
        }
        AddPayError::Api(ApiError {
            code: status.as_u16().to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
            details: None,
        })
    }

    /// Unwrap the `{success, data, error}` envelope; some endpoints return
    /// the payload directly, so fall back to deserializing the whole body.
    fn unwrap_envelope<Resp: DeserializeOwned>(body: &[u8]) -> Result<Resp> {
        match serde_json::from_slice::<ApiResponse>(body) {
            Ok(envelope) => {
                if !envelope.success {
                    if let Some(api_error) = envelope.error {
                        return Err(AddPayError::Api(api_error));
                    }
                }
                let data = envelope.data.unwrap_or(Value::Null);
                Ok(serde_json::from_value(data)?)
            }
            Err(_) => Ok(serde_json::from_slice(body)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_fixtures::{PRIVATE_PKCS1_PEM, PUBLIC_SPKI_PEM};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn test_config(gateway_url: &str) -> Config {
        Config::new(
            "test-app-id",
            gateway_url,
            PRIVATE_PKCS1_PEM.as_bytes().to_vec(),
            PUBLIC_SPKI_PEM.as_bytes().to_vec(),
        )
    }

    fn checkout_request() -> CheckoutRequest {
        CheckoutRequest::new(
            "MERCHANT001",
            "STORE001",
            "ORDER-001",
            "USD",
            Decimal::from_str("99.99").unwrap(),
            1_900_000_000,
            "https://yourstore.example/webhook/notify",
            "https://yourstore.example/checkout/success",
        )
        .with_description("Test product purchase")
    }

    #[test]
    fn client_requires_valid_config() {
        let err = Client::new(test_config("")).unwrap_err();
        assert!(matches!(err, AddPayError::Config(_)));

        let err = Client::new(test_config("not a url")).unwrap_err();
        assert!(matches!(err, AddPayError::Config(_)));

        let mut config = test_config("https://api.addpay.example");
        config.merchant_private_key = b"garbage".to_vec();
        let err = Client::new(config).unwrap_err();
        assert!(matches!(err, AddPayError::InvalidEncoding(_)));
    }

    #[tokio::test]
    async fn hosted_checkout_signs_request_and_unwraps_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/entry/checkout")
            .match_header(APP_ID_HEADER, "test-app-id")
            .match_header(SIGNATURE_HEADER, mockito::Matcher::Regex("^[A-Za-z0-9+/]+=*$".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success":true,"data":{"pay_url":"https://checkout.addpay.example/pay/12345"}}"#,
            )
            .create_async()
            .await;

        let client = Client::new(test_config(&server.url())).unwrap();
        let response = client.hosted_checkout(&checkout_request()).await.unwrap();

        assert_eq!(response.pay_url, "https://checkout.addpay.example/pay/12345");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn gateway_error_envelope_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/entry/tokenized-pay")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success":false,"error":{"code":"INVALID_TOKEN","message":"token is expired"}}"#,
            )
            .create_async()
            .await;

        let client = Client::new(test_config(&server.url())).unwrap();
        let request = TokenizedPayRequest {
            merchant_no: "MERCHANT001".to_string(),
            store_no: "STORE001".to_string(),
            merchant_order_no: "ORDER-002".to_string(),
            token: "tok_expired".to_string(),
            price_currency: "USD".to_string(),
            order_amount: Decimal::from_str("10.00").unwrap(),
            notify_url: "https://yourstore.example/webhook/notify".to_string(),
            description: None,
        };

        let err = client.tokenized_pay(&request).await.unwrap_err();
        match err {
            AddPayError::Api(api_error) => {
                assert_eq!(api_error.code, "INVALID_TOKEN");
                assert_eq!(api_error.message, "token is expired");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_envelope_without_http_error_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/entry/query-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success":false,"error":{"code":"NOT_FOUND","message":"unknown token"}}"#,
            )
            .create_async()
            .await;

        let client = Client::new(test_config(&server.url())).unwrap();
        let request = QueryTokenRequest {
            token: "tok_missing".to_string(),
        };

        let err = client.query_token(&request).await.unwrap_err();
        assert!(matches!(err, AddPayError::Api(_)));
    }

    #[tokio::test]
    async fn signed_response_with_bad_signature_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/entry/checkout")
            .with_status(200)
            .with_header("content-type", "application/json")
            // Base64-decodable, but not a signature the gateway key made.
            .with_header(SIGNATURE_HEADER, "AAAA")
            .with_body(
                r#"{"success":true,"data":{"pay_url":"https://checkout.addpay.example/pay/1"}}"#,
            )
            .create_async()
            .await;

        let client = Client::new(test_config(&server.url())).unwrap();
        let err = client.hosted_checkout(&checkout_request()).await.unwrap_err();
        assert!(matches!(err, AddPayError::VerificationFailed(_)));
    }

    #[tokio::test]
    async fn signed_response_with_good_signature_is_accepted() {
        let body =
            r#"{"success":true,"data":{"pay_url":"https://checkout.addpay.example/pay/2"}}"#;
        // Test keys are a matched pair, so the client's own signer can
        // stand in for the gateway's.
        let signer =
            RsaAuthenticator::new(PRIVATE_PKCS1_PEM.as_bytes(), PUBLIC_SPKI_PEM.as_bytes())
                .unwrap();
        let signature = signer.sign(body.as_bytes()).unwrap();

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/entry/checkout")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header(SIGNATURE_HEADER, &signature)
            .with_body(body)
            .create_async()
            .await;

        let client = Client::new(test_config(&server.url())).unwrap();
        let response = client.hosted_checkout(&checkout_request()).await.unwrap();
        assert_eq!(response.pay_url, "https://checkout.addpay.example/pay/2");
    }
}
