//! Utility functions for CLI operations.
//!
//! This module provides the state shared across CLI commands: the global
//! options, the path resolver captured at startup, and reporter selection.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use slink::{PathContext, PathResolver};
use std::env;
use std::ffi::OsStr;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Environment variable that disables colored output when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Disable colored output.
    pub no_color: bool,

    /// Output format for command results.
    pub format: OutputFormat,

    /// Resolver for path arguments, holding the home and working directory
    /// captured at startup.
    pub paths: PathResolver,
}

impl GlobalOptions {
    /// Build options from parsed flags, capturing the process environment once.
    ///
    /// Verbosity is not kept here; it only selects the logger in `main`.
    pub fn new(quiet: bool, no_color: bool, format: OutputFormat) -> Self {
        Self {
            quiet,
            no_color,
            format,
            paths: PathResolver::new(PathContext::from_env()),
        }
    }
}

/// Whether output to stdout should carry ANSI colors.
///
/// Colors are used only when stdout is a terminal, `--no-color` was not
/// given and `NO_COLOR` is unset or empty.
pub fn use_color(global: &GlobalOptions) -> bool {
    !global.no_color
        && !no_color_requested(env::var_os(NO_COLOR_ENV).as_deref())
        && io::stdout().is_terminal()
}

fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Create the reporter for stdout matching the global options.
pub fn stdout_reporter(global: &GlobalOptions) -> Box<dyn Reporter> {
    match global.format {
        OutputFormat::Text => Box::new(ConsoleReporter::new(io::stdout(), use_color(global))),
        OutputFormat::Json => Box::new(JsonReporter::new(io::stdout())),
    }
}

/// Require that a normalized path names an entry, i.e. is not a root, `.` or `..`.
pub fn require_file_name(path: &Path, what: &str) -> Result<PathBuf, CliError> {
    if path.file_name().is_none() {
        return Err(CliError::InvalidArguments(format!(
            "{what} must name a file, got '{}'",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}
