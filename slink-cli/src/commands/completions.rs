//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Name of the installed binary.
const BIN_NAME: &str = "slink";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            print_install_hint(self.shell);
        }
        self.write_to(&mut io::stdout())
    }

    /// Write the completion script for the selected shell to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, out);
        out.flush()?;
        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    match shell {
        Shell::Bash => {
            eprintln!("#   slink completions bash > ~/.local/share/bash-completion/completions/slink");
            eprintln!("# Or add to ~/.bashrc:");
            eprintln!("#   eval \"$(slink completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   slink completions zsh > ~/.zsh/completions/_slink");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   slink completions fish > ~/.config/fish/completions/slink.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   slink completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        CompletionsCommand { shell }.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("slink"));
        assert!(script.contains("unlink"));
        assert!(script.contains("create"));
    }

    #[test]
    fn test_fish_completions_nonempty() {
        assert!(script(Shell::Fish).contains("complete -c slink"));
    }
}
