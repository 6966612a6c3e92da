//! Remote filesystem client for pixelfs
//!
//! - `api`: the HTTP client and one request type per remote operation
//! - `fs`: a scoped filesystem (`Fs`) and node handles (`Object`) on top of it
//! - `config`: TOML configuration consumed by both

pub mod api;
pub mod config;
pub mod fs;

pub use api::client::{ApiClient, ApiError, ContentReader};
pub use api::filesystem::OpenOption;
pub use config::{Config, ConfigError};
pub use fs::{DirEntry, Directory, Fs, Object, Usage};

pub use common::prelude::*;
