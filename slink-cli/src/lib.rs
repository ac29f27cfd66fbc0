//! Library exports for slink-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules; keeping
//! them in a library lets the commands be unit tested in isolation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod report;
pub mod utils;

pub use cli::Cli;
