//! Error types for the environment consumers
//!
//! The environment record cannot fail. Malformed values only surface once a
//! consumer tries to use them, so the errors live with the consumers.

use thiserror::Error;

/// Errors raised by the Auth0 integration
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required Auth0 setting is empty
    #[error("Auth0 setting '{field}' is empty")]
    MissingField { field: &'static str },

    /// The callback URL does not parse as an absolute URL
    #[error("Invalid callback URL '{value}': {source}")]
    InvalidCallbackUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The tenant prefix does not form a valid host, or the parsed host
    /// differs from the domain
    #[error("Invalid Auth0 domain '{domain}'")]
    InvalidDomain {
        domain: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// The access token is not a three-part JWT with a JSON payload
    #[error("Malformed access token: {0}")]
    MalformedToken(String),
}

/// Errors raised by the drinks API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured API server URL cannot be used as a base URL
    #[error("Invalid API URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport or decoding failure
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// 401 from the API, with the backend's auth error code when present
    #[error("Unauthorized ({code}): {description}")]
    Unauthorized { code: String, description: String },

    /// 403 from the API
    #[error("Forbidden ({code}): {description}")]
    Forbidden { code: String, description: String },

    /// 404 from the API
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// 422 from the API
    #[error("Unprocessable: {message}")]
    Unprocessable { message: String },

    /// Any other non-success status
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
