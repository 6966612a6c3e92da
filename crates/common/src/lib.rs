//! Core data structures for pixelfs
//!
//! Everything in this crate is pure: the JSON wire model returned by the
//! remote filesystem API, the path-prefix scoping rules, and the mapping from
//! remote error payloads onto filesystem error kinds. The HTTP side lives in
//! `pixelfs-client`.

pub mod error;
pub mod filesystem;
pub mod user;

pub mod prelude {
    pub use crate::error::{ErrorBody, RemoteError};
    pub use crate::filesystem::{
        normalize_path, scope_prefix, strip_prefix, BaseIndexOutOfRange, FileInfo,
        FilesystemNode, FilesystemPath, NodeInfo, PathParts, Permissions,
    };
    pub use crate::user::{SubscriptionType, UserInfo};
}
