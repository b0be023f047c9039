use clap::{Subcommand, ValueEnum};

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the compiled-in environment
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the Auth0 login link
    LoginUrl {
        /// Path appended to the callback URL for the redirect
        #[arg(long, default_value = "")]
        callback_path: String,
    },

    /// Print the Auth0 logout link
    LogoutUrl,

    /// List the drinks API routes with their URLs and required permissions
    Routes {
        /// Drink id used for the per-drink routes
        #[arg(long, default_value_t = 1)]
        id: u64,
    },

    /// Fetch drinks from the API
    Drinks {
        /// Use the detail route (requires get:drinks-detail)
        #[arg(long)]
        detail: bool,

        /// Access token sent as a bearer token
        #[arg(long, env = "COFFEESHOP_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Check whether an access token grants a permission
    Can {
        /// Permission to check, e.g. post:drinks
        permission: String,

        /// Access token to inspect
        #[arg(long, env = "COFFEESHOP_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

/// Rendering for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}
