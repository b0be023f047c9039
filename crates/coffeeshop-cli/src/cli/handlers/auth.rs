//! `login-url`, `logout-url` and `can`

use crate::error::Result;
use coffeeshop_env::auth::{Auth0ClientConfig, TokenPayload};
use coffeeshop_env::EnvironmentConfig;
use tracing::debug;

pub fn login_url(env: &EnvironmentConfig, callback_path: &str) -> Result<String> {
    let config = Auth0ClientConfig::from_environment(env)?;
    Ok(config.login_url(callback_path).to_string())
}

pub fn logout_url(env: &EnvironmentConfig) -> Result<String> {
    let config = Auth0ClientConfig::from_environment(env)?;
    Ok(config.logout_url().to_string())
}

/// `yes`/`no` followed by the permissions the token carries
pub fn check_permission(token: &str, permission: &str) -> Result<String> {
    let payload = TokenPayload::decode_unverified(token)?;
    debug!("Checking '{}' for subject {:?}", permission, payload.sub);

    let verdict = if payload.can(permission) { "yes" } else { "no" };
    Ok(format!(
        "{verdict} (granted: {})",
        if payload.permissions.is_empty() {
            "none".to_string()
        } else {
            payload.permissions.join(", ")
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use coffeeshop_env::environment::development;

    // header.payload.signature with payload {"permissions":["post:drinks"]}
    const BARISTA_TOKEN: &str = "eyJhbGciOiJub25lIn0.eyJwZXJtaXNzaW9ucyI6WyJwb3N0OmRyaW5rcyJdfQ.sig";

    #[test]
    fn test_login_url_targets_tenant() {
        let url = login_url(&development::ENVIRONMENT, "").unwrap();
        assert!(url.starts_with("https://thedevscott.auth0.com/authorize?"));
        assert!(url.contains("client_id=I67b3U2Nr1MTBBn0nGQlDOkKvG68gBi1"));
    }

    #[test]
    fn test_logout_url() {
        let url = logout_url(&development::ENVIRONMENT).unwrap();
        assert!(url.starts_with("https://thedevscott.auth0.com/v2/logout?"));
    }

    #[test]
    fn test_check_permission() {
        assert_eq!(
            check_permission(BARISTA_TOKEN, "post:drinks").unwrap(),
            "yes (granted: post:drinks)"
        );
        assert_eq!(
            check_permission(BARISTA_TOKEN, "delete:drinks").unwrap(),
            "no (granted: post:drinks)"
        );
    }

    #[test]
    fn test_check_permission_rejects_garbage() {
        assert!(matches!(
            check_permission("garbage", "post:drinks"),
            Err(CliError::Auth(_))
        ));
    }
}
