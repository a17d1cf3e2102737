//! `AuthToken` extractor — pulls the session token from the request
//! cookie, inspects it, and hands the validated raw token to handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use intranet_core::error::AppError;

use crate::state::AppState;

/// A validated session token, ready to forward to the backend gateway.
///
/// Validation is structural plus expiry only; the signature is checked
/// by the gateway itself on the forwarded request.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    /// The raw token string, exactly as it arrived in the cookie.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for AuthToken {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(&state.config.auth.cookie_name)
            .ok_or_else(|| AppError::unauthenticated("Session token not found in cookies"))?;

        let token = state.inspector.inspect(cookie.value())?;

        Ok(AuthToken(token.to_string()))
    }
}
