//! Backend gateway configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the external backend gateway that all
/// dashboard requests are forwarded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the backend gateway API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds for JSON calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Timeout in seconds for multipart uploads and binary downloads.
    #[serde(default = "default_transfer_timeout")]
    pub transfer_timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            transfer_timeout_seconds: default_transfer_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_transfer_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}
