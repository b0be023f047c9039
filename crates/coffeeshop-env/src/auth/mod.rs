//! Auth0 integration
//!
//! Reads the four Auth0 settings from the environment record and derives what
//! an OAuth client needs: the full tenant domain, the login and logout links,
//! and the issuer/JWKS locations the API validates tokens against.
//!
//! Audience, client ID and callback URL are passed through unmodified.

mod token;

pub use token::{token_from_fragment, TokenPayload};

use crate::environment::EnvironmentConfig;
use crate::error::AuthError;
use tracing::debug;
use url::Url;

/// Fixed suffix appended to the tenant prefix to form the Auth0 domain
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Response type requested by the frontend's implicit flow
pub const RESPONSE_TYPE: &str = "token";

/// Client-side Auth0 configuration derived from [`EnvironmentConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0ClientConfig {
    /// Full tenant domain, e.g. `thedevscott.auth0.com`
    pub domain: String,

    /// OAuth audience sent with the authorize request
    pub audience: String,

    /// OAuth client identifier
    pub client_id: String,

    /// Redirect target exactly as configured
    pub callback_url: String,

    base: Url,
}

impl Auth0ClientConfig {
    /// Build the client configuration from an environment record
    pub fn from_environment(env: &EnvironmentConfig) -> Result<Self, AuthError> {
        let settings = &env.auth0;

        for (field, value) in [
            ("url", settings.provider_domain_prefix),
            ("audience", settings.audience),
            ("clientId", settings.client_id),
            ("callbackURL", settings.callback_url),
        ] {
            if value.is_empty() {
                return Err(AuthError::MissingField { field });
            }
        }

        Url::parse(settings.callback_url).map_err(|source| AuthError::InvalidCallbackUrl {
            value: settings.callback_url.to_string(),
            source,
        })?;

        let domain = full_domain(settings.provider_domain_prefix);
        let base = Url::parse(&format!("https://{domain}/")).map_err(|source| {
            AuthError::InvalidDomain {
                domain: domain.clone(),
                source: Some(source),
            }
        })?;

        // Characters such as '#', '/', '?' or '@' in the prefix parse fine but
        // move the host; the links must point at exactly `domain`.
        if !base
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&domain))
        {
            return Err(AuthError::InvalidDomain {
                domain,
                source: None,
            });
        }

        debug!(
            "Initialized Auth0 client config for domain {} (client_id: {})",
            domain, settings.client_id
        );

        Ok(Self {
            domain,
            audience: settings.audience.to_string(),
            client_id: settings.client_id.to_string(),
            callback_url: settings.callback_url.to_string(),
            base,
        })
    }

    /// Authorize link for the implicit flow
    ///
    /// `callback_path` is appended verbatim to the configured callback URL to
    /// form `redirect_uri`.
    pub fn login_url(&self, callback_path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path("/authorize");
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair(
                "redirect_uri",
                &format!("{}{}", self.callback_url, callback_path),
            );
        url
    }

    /// Logout link returning the browser to the callback URL
    pub fn logout_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path("/v2/logout");
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        url
    }

    /// Token issuer (`https://{domain}/`)
    pub fn issuer(&self) -> String {
        self.base.to_string()
    }

    /// Location of the tenant's signing keys
    pub fn jwks_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path("/.well-known/jwks.json");
        url
    }
}

/// `{prefix}.auth0.com`
pub fn full_domain(prefix: &str) -> String {
    format!("{prefix}.{AUTH0_DOMAIN_SUFFIX}")
}
