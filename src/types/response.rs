//! Gateway response envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the gateway
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error context, when the gateway provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Generic response envelope the gateway wraps most payloads in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// Operation-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error details when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}
