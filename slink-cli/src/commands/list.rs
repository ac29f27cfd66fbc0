//! List command implementation.
//!
//! This module implements the `list` command, which prints the symbolic
//! links found directly inside a directory (no recursion).

use crate::error::CliError;
use crate::report::Reporter;
use crate::utils::GlobalOptions;
use clap::Args;
use slink::{list_links, ListOptions};
use std::path::PathBuf;

/// List the symbolic links directly inside a directory.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Sort links by name
    #[arg(long)]
    pub sort: bool,

    /// Only show links whose target does not exist
    #[arg(long)]
    pub dangling: bool,

    /// Show targets joined onto the scanned directory instead of as recorded
    #[arg(long)]
    pub resolve: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<(), CliError> {
        let dir = global.paths.resolve_dir_or_cwd(self.dir.as_deref())?;
        let options = ListOptions::new()
            .with_sorted(self.sort)
            .with_dangling_only(self.dangling);
        log::debug!("listing {} with {options:?}", dir.display());

        let links = list_links(&dir, &options)?;

        reporter.links_listed(&links, self.resolve)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::test_support::global_at;
    use crate::report::MockReporter;
    use std::fs;
    use std::os::unix::fs::symlink;

    fn command(dir: Option<&str>) -> ListCommand {
        ListCommand {
            dir: dir.map(PathBuf::from),
            sort: false,
            dangling: false,
            resolve: false,
        }
    }

    #[test]
    fn test_list_defaults_to_cwd() {
        let temp = tempfile::tempdir().unwrap();
        symlink("/etc/hosts", temp.path().join("hosts")).unwrap();
        let expected = temp.path().join("hosts");

        let mut reporter = MockReporter::new();
        reporter
            .expect_links_listed()
            .withf(move |links, resolve| {
                links.len() == 1 && links[0].location() == expected && !*resolve
            })
            .times(1)
            .returning(|_, _| Ok(()));

        command(None)
            .execute(&global_at(temp.path()), &mut reporter)
            .unwrap();
    }

    #[test]
    fn test_list_relative_dir_and_flags() {
        let temp = tempfile::tempdir().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        symlink("missing-b", sub.join("b")).unwrap();
        symlink("missing-a", sub.join("a")).unwrap();
        symlink("/", sub.join("root")).unwrap();

        let mut reporter = MockReporter::new();
        reporter
            .expect_links_listed()
            .withf(|links, resolve| {
                let names: Vec<_> = links.iter().map(|l| l.name().into_owned()).collect();
                names == ["a", "b"] && *resolve
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let cmd = ListCommand {
            dir: Some(PathBuf::from("./sub/")),
            sort: true,
            dangling: true,
            resolve: true,
        };
        cmd.execute(&global_at(temp.path()), &mut reporter).unwrap();
    }

    #[test]
    fn test_list_missing_dir_reports_nothing() {
        let temp = tempfile::tempdir().unwrap();

        let mut reporter = MockReporter::new();
        reporter.expect_links_listed().never();

        let err = command(Some("nope"))
            .execute(&global_at(temp.path()), &mut reporter)
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
