//! Rendering of command results.
//!
//! Commands hand their results to a [`Reporter`] instead of printing
//! directly, so output format and coloring are decided once in `main`.

use crate::error::CliError;
use owo_colors::{AnsiColors, OwoColorize};
use serde_json::json;
use slink::LinkEntry;
use std::io::Write;
use std::path::Path;

/// Sink for the results of the link commands.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Report the links found by `list`.
    ///
    /// With `resolve` set, targets are shown joined onto the link's directory.
    fn links_listed(&mut self, links: &[LinkEntry], resolve: bool) -> Result<(), CliError>;

    /// Report a freshly created link.
    fn link_created(&mut self, link: &LinkEntry) -> Result<(), CliError>;

    /// Report a removed link.
    fn link_removed(&mut self, path: &Path) -> Result<(), CliError>;
}

/// Plain-text output, one `name -> target` line per link.
pub struct ConsoleReporter<W> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing to `out`, with ANSI colors if `color` is set.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_link(&mut self, name: &str, target: &Path) -> Result<(), CliError> {
        let name = self.paint(name, AnsiColors::Yellow);
        let target = self.paint(&target.to_string_lossy(), AnsiColors::Cyan);
        writeln!(self.out, "{name} -> {target}")?;
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn links_listed(&mut self, links: &[LinkEntry], resolve: bool) -> Result<(), CliError> {
        for link in links {
            if resolve {
                self.write_link(&link.name(), &link.resolved_target())?;
            } else {
                self.write_link(&link.name(), link.target())?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn link_created(&mut self, link: &LinkEntry) -> Result<(), CliError> {
        writeln!(self.out, "New symbolic link has been created!")?;
        self.write_link(&link.name(), link.target())?;
        self.out.flush()?;
        Ok(())
    }

    fn link_removed(&mut self, path: &Path) -> Result<(), CliError> {
        writeln!(
            self.out,
            "{} has been successfully unlinked!",
            path.display()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Machine-readable output, one JSON document per command.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: &serde_json::Value) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn links_listed(&mut self, links: &[LinkEntry], resolve: bool) -> Result<(), CliError> {
        let links: Vec<LinkEntry> = if resolve {
            links
                .iter()
                .map(|l| LinkEntry::new(l.location().to_path_buf(), l.resolved_target()))
                .collect()
        } else {
            links.to_vec()
        };
        self.emit(&json!({ "links": links }))
    }

    fn link_created(&mut self, link: &LinkEntry) -> Result<(), CliError> {
        self.emit(&json!({ "created": link }))
    }

    fn link_removed(&mut self, path: &Path) -> Result<(), CliError> {
        self.emit(&json!({ "unlinked": path.to_string_lossy() }))
    }
}
