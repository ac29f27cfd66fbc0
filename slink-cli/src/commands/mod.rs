//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List the symbolic links directly inside a directory
//! - `create`: Create a new symbolic link
//! - `unlink`: Remove a symbolic link
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod create;
pub mod list;
pub mod unlink;

pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use list::ListCommand;
pub use unlink::UnlinkCommand;
