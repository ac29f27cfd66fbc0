//! Path handling for user-supplied arguments.
//!
//! Every path argument goes through this module before any filesystem call.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts paths to a canonical form by:
//! - Expanding a leading tilde (~) to the home directory
//! - Collapsing redundant separators
//! - Resolving `.` and `..` components lexically
//! - In absolute mode, anchoring relative paths at the working directory
//!
//! Symlinks are never followed: the paths handled here are usually links
//! themselves, and following them would change their meaning.
//!
//! ## Context
//!
//! The home and working directory are captured once in a [`PathContext`]
//! and handed to a [`PathResolver`], rather than queried from the process
//! on every call.
//!
//! # Examples
//!
//! ```
//! use slink::path::{NormalizeMode, PathContext, PathResolver};
//! use std::path::{Path, PathBuf};
//!
//! let resolver = PathResolver::new(PathContext::new(
//!     Some(PathBuf::from("/home/user")),
//!     Some(PathBuf::from("/srv")),
//! ));
//!
//! let dir = resolver.resolve_absolute(Path::new("~/dotfiles/")).unwrap();
//! assert_eq!(dir, Path::new("/home/user/dotfiles"));
//! ```

mod context;
pub mod normalize;
mod resolver;
mod types;

pub use context::PathContext;
pub use resolver::PathResolver;
pub use types::NormalizeMode;
