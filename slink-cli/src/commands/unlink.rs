//! Unlink command implementation.
//!
//! This module implements the `unlink` command, which removes a single
//! symbolic link after normalizing its path.

use crate::error::CliError;
use crate::report::Reporter;
use crate::utils::{require_file_name, GlobalOptions};
use clap::Args;
use slink::unlink;
use std::path::PathBuf;

/// Remove a symbolic link.
#[derive(Args)]
pub struct UnlinkCommand {
    /// Path of the link to remove
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl UnlinkCommand {
    /// Execute the unlink command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<(), CliError> {
        let path = require_file_name(&global.paths.resolve_absolute(&self.path)?, "path")?;

        unlink(&path)?;

        reporter.link_removed(&path)
    }
}
