//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, CreateCommand, ListCommand, UnlinkCommand};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line tool for listing, creating and removing symbolic links.
#[derive(Parser)]
#[command(name = "slink")]
#[command(version, about = "List, create and remove symbolic links", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value = "text",
        env = "SLINK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the symbolic links directly inside a directory
    #[command(visible_alias = "l")]
    List(ListCommand),

    /// Create a new symbolic link
    #[command(visible_alias = "c")]
    Create(CreateCommand),

    /// Remove a symbolic link
    #[command(visible_alias = "u")]
    Unlink(UnlinkCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines, colored on a terminal
    #[default]
    Text,
    /// JSON documents
    Json,
}

/// Whether a parse error is a usage problem that should print usage and exit 0.
///
/// Covers help and version requests, missing or surplus positional arguments,
/// and a missing or unknown subcommand. An unrecognized `-`/`--` option is a
/// typo and stays an error, as do invalid option values.
pub fn shows_usage(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::InvalidSubcommand
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => true,
        ErrorKind::UnknownArgument => !names_an_option(err),
        _ => false,
    }
}

fn names_an_option(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with('-')
    )
}
