//! Filesystem view over the remote API
//!
//! This module presents a sub-tree of the remote namespace as an independent
//! filesystem root that a sync or file-management host can drive.
//!
//! # Architecture
//!
//! - `Fs`: one scope (path prefix) over a shared `ApiClient`
//! - `Object`: handle to a node returned by a lookup or an upload
//! - `Directory`/`DirEntry`: listing entries
//!
//! Every path handed in or out of this module is relative to the scope. The
//! prefix is added on the way to the API and stripped from every node that
//! comes back.

mod dir_entry;
mod object;
mod remote_fs;

pub use dir_entry::{DirEntry, Directory};
pub use object::Object;
pub use remote_fs::{Fs, Usage};
