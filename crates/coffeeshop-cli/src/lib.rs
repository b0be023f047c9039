//! # Coffee Shop CLI
//!
//! Command-line access to the environment the frontend is built against:
//! print the compiled-in configuration, the Auth0 login and logout links and
//! the drinks route table, check a token's permissions, and call the API.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
