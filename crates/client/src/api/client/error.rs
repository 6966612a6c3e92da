use common::error::RemoteError;
use common::filesystem::BaseIndexOutOfRange;
use reqwest::StatusCode;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a well-formed error payload
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("failed to parse error json (status {status}): {source}")]
    MalformedErrorBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid path response: {0}")]
    InvalidPath(#[from] BaseIndexOutOfRange),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            ApiError::Remote(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote(RemoteError::NotFound))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, ApiError::Remote(RemoteError::AlreadyExists))
    }

    pub fn is_directory_not_empty(&self) -> bool {
        matches!(self, ApiError::Remote(RemoteError::DirectoryNotEmpty))
    }
}
