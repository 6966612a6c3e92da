//! Filesystem wire model
//!
//! - `FilesystemNode`: a single file or directory entry
//! - `FilesystemPath`: the answer to a stat query, a node together with its
//!   ancestor chain, its children and the caller's permissions on it
//! - prefix helpers that scope a sub-tree of the remote namespace

mod node;
mod path;
mod prefix;

pub use node::{FileInfo, FilesystemNode, NodeInfo};
pub use path::{BaseIndexOutOfRange, FilesystemPath, PathParts, Permissions};
pub use prefix::{normalize_path, scope_prefix, strip_prefix};
