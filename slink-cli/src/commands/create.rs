//! Create command implementation.
//!
//! This module implements the `create` command, which normalizes the
//! target and link paths and creates a new symbolic link.

use crate::error::CliError;
use crate::report::Reporter;
use crate::utils::{require_file_name, GlobalOptions};
use clap::Args;
use slink::{create_link, NormalizeMode};
use std::path::PathBuf;

/// Create a new symbolic link.
#[derive(Args)]
pub struct CreateCommand {
    /// Path the new link points to
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Where to create the link
    #[arg(value_name = "LINK")]
    pub link: PathBuf,

    /// Keep both paths relative instead of anchoring them at the current directory
    #[arg(short, long)]
    pub relative: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<(), CliError> {
        let mode = NormalizeMode::from_relative_flag(self.relative);
        let target = global.paths.resolve(&self.target, mode)?;
        let link = require_file_name(&global.paths.resolve(&self.link, mode)?, "link path")?;

        log::debug!(
            "{mode:?} paths: target {}, link {}",
            target.display(),
            link.display()
        );

        let entry = create_link(&target, &link)?;

        reporter.link_created(&entry)
    }
}
