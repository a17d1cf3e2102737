//! Session token validation.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};

use intranet_core::error::{AppError, ErrorKind};
use intranet_core::result::AppResult;

use super::claims::Claims;

/// URL-safe base64, accepting payloads with or without padding.
///
/// Token segments are minted unpadded, but the decoder must not reject
/// a padded payload either.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Validates session tokens before they are forwarded to the backend.
///
/// A token passes inspection when it has exactly three dot-separated
/// segments, its payload segment decodes to a JSON object, and the
/// `exp` claim (when present) is not in the past.
///
/// No signature verification is performed: the backend gateway both
/// mints and verifies tokens, and rejects forged ones itself. Passing
/// inspection establishes "not obviously expired", not authenticity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenInspector;

impl TokenInspector {
    /// Creates a new inspector.
    pub fn new() -> Self {
        Self
    }

    /// Decodes the payload segment of a token into [`Claims`].
    ///
    /// Fails with a malformed-token error when the segment count is not
    /// three, the payload is not valid base64, or the decoded bytes are
    /// not a JSON object.
    pub fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(AppError::malformed_token("Invalid token format"));
        }

        let payload = URL_SAFE_LENIENT.decode(segments[1]).map_err(|e| {
            AppError::with_source(
                ErrorKind::MalformedToken,
                "Token payload is not valid base64",
                e,
            )
        })?;

        serde_json::from_slice(&payload).map_err(|e| {
            AppError::with_source(
                ErrorKind::MalformedToken,
                "Token payload is not valid JSON",
                e,
            )
        })
    }

    /// Inspects a token and returns it unchanged on success.
    ///
    /// The returned slice is the exact input: the token is never
    /// re-encoded or normalized, since the backend expects it verbatim.
    pub fn inspect<'t>(&self, token: &'t str) -> AppResult<&'t str> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired() {
            return Err(AppError::expired("Token has expired"));
        }

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use intranet_core::error::ErrorKind;

    use super::*;

    /// Builds a structurally valid token around the given JSON payload.
    fn make_token(payload: &str) -> String {
        let encode = |part: &str| URL_SAFE_LENIENT.encode(part.as_bytes());
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(payload),
            encode("signature")
        )
    }

    #[test]
    fn test_two_segments_is_malformed() {
        let inspector = TokenInspector::new();
        let err = inspector.inspect("abc.def").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);
    }

    #[test]
    fn test_four_segments_is_malformed() {
        let inspector = TokenInspector::new();
        let err = inspector.inspect("a.b.c.d").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);
    }

    #[test]
    fn test_garbage_payload_is_malformed() {
        let inspector = TokenInspector::new();
        let err = inspector.inspect("head.!!!not-base64!!!.sig").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);

        let not_json = format!("head.{}.sig", URL_SAFE_LENIENT.encode(b"plain text"));
        let err = inspector.inspect(&not_json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let inspector = TokenInspector::new();
        let exp = Utc::now().timestamp() - 3600;
        let token = make_token(&format!(r#"{{"sub":"ops","exp":{exp}}}"#));

        let err = inspector.inspect(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Expired);
    }

    #[test]
    fn test_future_expiry_returns_token_unchanged() {
        let inspector = TokenInspector::new();
        let exp = Utc::now().timestamp() + 3600;
        let token = make_token(&format!(r#"{{"sub":"ops","exp":{exp}}}"#));

        let validated = inspector.inspect(&token).unwrap();
        assert_eq!(validated, token);
    }

    #[test]
    fn test_missing_expiry_is_accepted() {
        // Tokens without an exp claim skip the expiry check entirely.
        let inspector = TokenInspector::new();
        let token = make_token(r#"{"sub":"ops"}"#);

        assert!(inspector.inspect(&token).is_ok());
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let inspector = TokenInspector::new();
        let exp = Utc::now().timestamp() + 3600;
        let padded = base64::engine::general_purpose::URL_SAFE
            .encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
        let token = format!("head.{padded}.sig");

        assert!(inspector.inspect(&token).is_ok());
    }

    #[test]
    fn test_decode_claims_reads_subject() {
        let inspector = TokenInspector::new();
        let token = make_token(r#"{"sub":"maria","iat":1700000000}"#);

        let claims = inspector.decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("maria"));
        assert!(claims.exp.is_none());
        assert!(!claims.is_expired());
    }
}
