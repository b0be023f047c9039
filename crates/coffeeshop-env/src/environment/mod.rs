//! The environment record
//!
//! Both variants are compiled as `const` literals so either can be inspected,
//! but only one of them is bound to [`ENVIRONMENT`]. The choice is made at
//! build time by the `production` cargo feature; nothing here branches at
//! runtime, validates, or reads external sources.
//!
//! The default test run covers the development binding. The production
//! binding has its own test, run with
//! `cargo test -p coffeeshop-env --features production`.

pub mod development;
pub mod production;

use serde::Serialize;
use std::fmt;

/// Environment configuration consumed by bootstrap, the API client and the
/// Auth0 integration.
///
/// Serializes to the frontend's shape:
/// `{ production, apiServerUrl, auth0: { url, audience, clientId, callbackURL } }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Build/runtime mode flag
    pub production: bool,

    /// Base URL of the drinks API server, scheme and port included
    pub api_server_url: &'static str,

    /// Identity provider settings
    pub auth0: Auth0Settings,
}

/// Auth0 tenant and application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Auth0Settings {
    /// Tenant prefix; the full domain is `{prefix}.auth0.com`
    #[serde(rename = "url")]
    pub provider_domain_prefix: &'static str,

    /// OAuth audience of the protected API
    pub audience: &'static str,

    /// Client ID issued for the frontend application
    #[serde(rename = "clientId")]
    pub client_id: &'static str,

    /// Redirect target after login, registered at the provider
    #[serde(rename = "callbackURL")]
    pub callback_url: &'static str,
}

/// Build mode derived from the `production` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

#[cfg(not(feature = "production"))]
use development::ENVIRONMENT as SELECTED;
#[cfg(feature = "production")]
use production::ENVIRONMENT as SELECTED;

/// The environment this build was compiled for
pub static ENVIRONMENT: EnvironmentConfig = SELECTED;

/// Read accessor for the compiled-in environment
pub fn environment() -> &'static EnvironmentConfig {
    &ENVIRONMENT
}

impl EnvironmentConfig {
    /// Same as [`environment()`]
    pub fn current() -> &'static Self {
        environment()
    }

    /// Build mode named by the `production` flag
    pub fn mode(&self) -> Mode {
        if self.production {
            Mode::Production
        } else {
            Mode::Development
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_is_referentially_stable() {
        let first = environment();
        let second = EnvironmentConfig::current();

        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, *second);
    }

    #[cfg(not(feature = "production"))]
    #[test]
    fn test_default_build_selects_development() {
        assert_eq!(ENVIRONMENT, development::ENVIRONMENT);
        assert_eq!(environment().mode(), Mode::Development);
    }

    #[cfg(feature = "production")]
    #[test]
    fn test_production_feature_selects_production() {
        assert_eq!(ENVIRONMENT, production::ENVIRONMENT);
        assert_eq!(environment().mode(), Mode::Production);
    }

    #[test]
    fn test_variant_literals_report_their_mode() {
        assert_eq!(development::ENVIRONMENT.mode(), Mode::Development);
        assert_eq!(production::ENVIRONMENT.mode(), Mode::Production);
    }

    #[test]
    fn test_serializes_to_frontend_shape() {
        let value = serde_json::to_value(development::ENVIRONMENT).unwrap();

        assert_eq!(value["production"], serde_json::json!(false));
        assert_eq!(value["apiServerUrl"], "http://127.0.0.1:5000");
        assert_eq!(value["auth0"]["url"], "thedevscott");
        assert_eq!(value["auth0"]["audience"], "localhost:5000");
        assert_eq!(value["auth0"]["clientId"], "I67b3U2Nr1MTBBn0nGQlDOkKvG68gBi1");
        assert_eq!(value["auth0"]["callbackURL"], "http://localhost:8100");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Development.to_string(), "development");
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
