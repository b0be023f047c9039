use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use coffeeshop_env::environment;

/// Coffee Shop CLI - environment inspection and drinks API access
#[derive(Parser, Debug)]
#[command(
    name = "coffeeshop",
    author = "Coffee Shop Team",
    version,
    about = "Coffee Shop CLI - environment inspection and drinks API access",
    long_about = "Inspect the environment the Coffee Shop frontend is built against.

EXAMPLES:
  coffeeshop show --format toml          # Print the environment
  coffeeshop login-url                   # Auth0 login link
  coffeeshop routes                      # Drinks API routes and permissions
  coffeeshop drinks --detail --token T   # Call the API
  coffeeshop can post:drinks --token T   # Check a token's permissions"
)]
pub struct Args {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let env = environment();

        let output = match self.command {
            Commands::Show { format } => handlers::environment::render_environment(env, format)?,
            Commands::Routes { id } => handlers::environment::render_routes(env, id),
            Commands::LoginUrl { callback_path } => {
                handlers::auth::login_url(env, &callback_path)?
            }
            Commands::LogoutUrl => handlers::auth::logout_url(env)?,
            Commands::Can { permission, token } => {
                let token = token.ok_or(crate::error::CliError::MissingToken)?;
                handlers::auth::check_permission(&token, &permission)?
            }
            Commands::Drinks { detail, token } => {
                handlers::drinks::handle_drinks(env, detail, token).await?
            }
        };

        println!("{output}");
        Ok(())
    }
}
