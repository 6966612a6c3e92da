//! Filesystem endpoint operations
//!
//! Every request addresses a node as `{api_url}/filesystem/{escaped path}`.
//! Mutations go through POST with a multipart `action` field.

pub mod delete;
pub mod mkdir;
pub mod options;
pub mod put;
pub mod read;
pub mod rename;
pub mod stat;
pub mod update;

pub use delete::DeleteRequest;
pub use mkdir::MkdirRequest;
pub use options::OpenOption;
pub use put::PutRequest;
pub use read::ReadRequest;
pub use rename::RenameRequest;
pub use stat::StatRequest;
pub use update::{format_timestamp, UpdateRequest};
