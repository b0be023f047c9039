//! Access token handling on the client side
//!
//! After login Auth0 redirects to the callback URL with the token in the
//! fragment. The payload is decoded without verifying the signature; it is
//! only used to decide what the UI should offer. The API verifies the token.

use crate::error::AuthError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

/// Pull `access_token` out of a callback URL fragment
/// (`http://localhost:8100/#access_token=...&expires_in=7200`)
pub fn token_from_fragment(callback: &str) -> Option<String> {
    let (_, fragment) = callback.split_once('#')?;

    url::form_urlencoded::parse(fragment.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Claims the frontend reads from an Auth0 access token
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenPayload {
    /// Subject (user id)
    pub sub: Option<String>,

    /// Expiry as seconds since the epoch
    pub exp: Option<i64>,

    /// RBAC permissions granted to the user for the audience
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl TokenPayload {
    /// Decode the payload segment of a JWT without checking its signature
    pub fn decode_unverified(token: &str) -> Result<Self, AuthError> {
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::MalformedToken(
                "expected three dot-separated segments".to_string(),
            ));
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken(format!("payload is not base64url: {e}")))?;

        let claims: Self = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::MalformedToken(format!("payload is not JSON: {e}")))?;

        debug!(
            "Decoded token payload with {} permissions",
            claims.permissions.len()
        );
        Ok(claims)
    }

    /// Whether the token grants `permission` (e.g. `post:drinks`)
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_token_from_fragment() {
        let url = "http://localhost:8100/#access_token=abc.def.ghi&expires_in=7200&token_type=Bearer";
        assert_eq!(token_from_fragment(url).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_token_from_fragment_absent() {
        assert_eq!(token_from_fragment("http://localhost:8100"), None);
        assert_eq!(token_from_fragment("http://localhost:8100/#state=x"), None);
        assert_eq!(token_from_fragment("http://localhost:8100/#access_token="), None);
    }

    #[test]
    fn test_decode_and_check_permissions() {
        let token = token_with(
            r#"{"sub":"auth0|123","exp":1700000000,"permissions":["get:drinks-detail","post:drinks"]}"#,
        );

        let payload = TokenPayload::decode_unverified(&token).unwrap();
        assert_eq!(payload.sub.as_deref(), Some("auth0|123"));
        assert_eq!(payload.exp, Some(1_700_000_000));
        assert!(payload.can("post:drinks"));
        assert!(!payload.can("delete:drinks"));
    }

    #[test]
    fn test_missing_permissions_claim_grants_nothing() {
        let payload = TokenPayload::decode_unverified(&token_with(r#"{"sub":"x"}"#)).unwrap();
        assert!(payload.permissions.is_empty());
        assert!(!payload.can("get:drinks-detail"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            TokenPayload::decode_unverified("not-a-jwt"),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            TokenPayload::decode_unverified("a.!!!.c"),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            TokenPayload::decode_unverified(&token_with("not json")),
            Err(AuthError::MalformedToken(_))
        ));
    }
}
