//! Shared building blocks for Coffee Shop binaries

pub mod logging;
