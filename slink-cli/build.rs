//! Build script for slink-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("slink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List, create and remove symbolic links")
        .long_about(
            "Command-line tool for listing the symbolic links in a directory, \
             creating new ones and removing them",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output (also honors NO_COLOR)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .global(true)
                .env("SLINK_OUTPUT_FORMAT"),
        )
        .subcommands(vec![
            Command::new("list")
                .visible_alias("l")
                .about("List the symbolic links directly inside a directory")
                .long_about(
                    "Print every symbolic link found directly inside DIR (default: the \
                     current directory) as `name -> target`. Subdirectories are not scanned.",
                )
                .arg(Arg::new("dir").value_name("DIR"))
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Sort links by name")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("dangling")
                        .long("dangling")
                        .help("Only show links whose target does not exist")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("resolve")
                        .long("resolve")
                        .help("Show targets joined onto the scanned directory")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("create")
                .visible_alias("c")
                .about("Create a new symbolic link")
                .long_about(
                    "Create LINK pointing at TARGET. Both paths are normalized first: `~` is \
                     expanded and `.`/`..` segments are removed. Without --relative both are \
                     anchored at the current directory.",
                )
                .arg(Arg::new("target").value_name("TARGET").required(true))
                .arg(Arg::new("link").value_name("LINK").required(true))
                .arg(
                    Arg::new("relative")
                        .short('r')
                        .long("relative")
                        .help("Keep both paths relative")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("unlink")
                .visible_alias("u")
                .about("Remove a symbolic link")
                .long_about("Remove the symbolic link at PATH. Regular files are never removed.")
                .arg(Arg::new("path").value_name("PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set by cargo")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("slink.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
