//! Link operations.
//!
//! Three independent, single-shot operations over already-normalized paths:
//! - [`list_links`]: enumerate the symbolic links directly inside a directory
//! - [`create_link`]: create a new symbolic link
//! - [`unlink`]: remove a symbolic link
//!
//! None of them normalize their arguments; pass paths through a
//! [`PathResolver`](crate::path::PathResolver) first.

mod create;
mod list;
mod unlink;

pub use create::create_link;
pub use list::{list_links, ListOptions};
pub use unlink::unlink;
