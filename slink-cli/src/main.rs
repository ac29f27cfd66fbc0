//! Main entry point for the slink CLI.
//!
//! This is the command-line interface for inspecting and managing symbolic links:
//! - `list`: List the symbolic links directly inside a directory
//! - `create`: Create a new symbolic link
//! - `unlink`: Remove a symbolic link
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use slink_cli::cli::{self, Cli, Command};
use slink_cli::utils::{self, GlobalOptions};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => exit_on_parse_error(&e),
    };

    // Initialize logging based on verbosity
    if let Err(e) = slink::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("WARN: logging unavailable: {e}");
    }

    // Capture the home and working directory once, up front
    let global = GlobalOptions::new(cli.quiet, cli.no_color, cli.format);
    let mut reporter = utils::stdout_reporter(&global);

    // Execute the command
    let result = match cli.command {
        Command::List(cmd) => cmd.execute(&global, reporter.as_mut()),
        Command::Create(cmd) => cmd.execute(&global, reporter.as_mut()),
        Command::Unlink(cmd) => cmd.execute(&global, reporter.as_mut()),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}

/// Show usage for a malformed invocation and exit.
///
/// Missing or surplus arguments are not failures: the usage text is shown
/// and the process exits with status 0. Anything else (a mistyped flag or an
/// invalid value for a typed option) keeps clap's own exit status.
fn exit_on_parse_error(err: &clap::Error) -> ! {
    if cli::shows_usage(err) {
        // nothing sensible to do if the terminal is gone
        let _ = err.print();
        process::exit(0);
    }
    err.exit()
}
