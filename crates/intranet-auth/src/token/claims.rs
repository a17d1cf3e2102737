//! Claims carried in the session token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decoded payload of a session token.
///
/// The payload is read without signature verification, so these values
/// are assertions made by whoever minted the token, nothing more. Only
/// the expiry claim is acted on; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the authenticated user, when present.
    #[serde(default)]
    pub sub: Option<String>,
    /// Issued-at timestamp (seconds since epoch), when present.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch). Tokens without an
    /// expiry claim are accepted: no expiry check is enforced for them.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`, if the token has one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Checks whether this token has expired.
    ///
    /// A token with no expiry claim never expires. Expiry strictly in
    /// the past counts; an expiry of exactly "now" does not.
    pub fn is_expired(&self) -> bool {
        match self.expires_at() {
            Some(expires_at) => expires_at < Utc::now(),
            None => false,
        }
    }
}
