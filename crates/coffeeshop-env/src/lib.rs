//! # Coffee Shop environment
//!
//! The environment record the coffee shop frontend is built against, plus the
//! two consumers that read it:
//!
//! - [`auth`] turns the Auth0 settings into a client configuration (domain,
//!   login and logout links, token permission checks)
//! - [`api`] uses the API server URL as the base for the drinks routes
//!
//! The record itself is a `static` literal. The development variant is compiled
//! in by default; enabling the `production` feature swaps in the production one.
//! Run the test suite under both (`cargo test` and
//! `cargo test --features production`) to cover both bindings.

pub mod api;
pub mod auth;
pub mod environment;
pub mod error;

pub use environment::{environment, Auth0Settings, EnvironmentConfig, Mode, ENVIRONMENT};
pub use error::{ApiError, AuthError};
