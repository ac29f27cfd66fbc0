#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slink
//!
//! A library for inspecting and managing the symbolic links in a directory.
//!
//! ## Core Types
//!
//! - [`LinkEntry`]: one symbolic link and its recorded target
//! - [`PathResolver`], [`PathContext`] and [`NormalizeMode`]: path argument normalization
//! - [`list_links`], [`create_link`] and [`unlink`]: the link operations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use slink::{create_link, list_links, unlink, ListOptions, PathResolver};
//! use std::path::Path;
//!
//! let resolver = PathResolver::default();
//! let dir = resolver.resolve_absolute(Path::new("~/bin")).unwrap();
//! let link = dir.join("python");
//!
//! create_link(Path::new("/usr/bin/python3"), &link).unwrap();
//! for entry in list_links(&dir, &ListOptions::new().with_sorted(true)).unwrap() {
//!     println!("{entry}");
//! }
//! unlink(&link).unwrap();
//! ```

pub mod entry;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;

// Re-export key types at crate root for convenience
pub use entry::LinkEntry;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{create_link, list_links, unlink, ListOptions};
pub use path::{NormalizeMode, PathContext, PathResolver};
