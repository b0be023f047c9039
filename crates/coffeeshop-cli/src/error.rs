//! Error types for the Coffee Shop CLI

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Auth0 settings could not be turned into a client configuration
    #[error(transparent)]
    Auth(#[from] coffeeshop_env::AuthError),

    /// Drinks API failures
    #[error("API error: {0}")]
    Api(#[from] coffeeshop_env::ApiError),

    /// Rendering output as JSON
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering output as TOML
    #[error("Failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    /// A command needs an access token that was not supplied
    #[error("No access token given. Pass --token or set COFFEESHOP_TOKEN")]
    MissingToken,
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
