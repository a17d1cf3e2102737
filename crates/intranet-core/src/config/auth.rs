//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Session token settings.
///
/// The intranet does not issue tokens itself; it reads the session token
/// the backend gateway placed in a cookie and re-attaches it on every
/// forwarded request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "intranet-token".to_string()
}
