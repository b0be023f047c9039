//! Command handlers for the Coffee Shop CLI
//!
//! Handlers return the text to print so they can be tested without a terminal.

pub mod auth;
pub mod drinks;
pub mod environment;
