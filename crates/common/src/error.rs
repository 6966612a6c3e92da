//! Remote error payloads and the filesystem error kinds they map onto
//!
//! Any non-success response from the filesystem API carries a body of the
//! form `{"value": "<code>", "message": "<human text>"}`. The five codes the
//! filesystem layer needs to act on get their own variant; everything else is
//! kept verbatim in [`RemoteError::Other`].

use serde::{Deserialize, Serialize};

pub const PATH_NOT_FOUND: &str = "path_not_found";
pub const DIRECTORY_NOT_EMPTY: &str = "directory_not_empty";
pub const NODE_ALREADY_EXISTS: &str = "node_already_exists";
pub const AUTHENTICATION_FAILED: &str = "authentication_failed";
pub const PERMISSION_DENIED: &str = "permission_denied";

/// Error payload as sent by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine readable status code
    #[serde(rename = "value")]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Semantic error kinds produced by the remote service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("path not found")]
    NotFound,
    #[error("directory not empty")]
    DirectoryNotEmpty,
    #[error("node already exists")]
    AlreadyExists,
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("permission denied")]
    PermissionDenied,
    /// A code this client has no dedicated handling for
    #[error("{code}: {message}")]
    Other { code: String, message: String },
}

impl RemoteError {
    /// Decode an error response body and map it.
    ///
    /// Fails only when the body is not a valid error payload.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let body: ErrorBody = serde_json::from_slice(body)?;
        Ok(body.into())
    }

    /// The remote status code this error was mapped from
    pub fn code(&self) -> &str {
        match self {
            RemoteError::NotFound => PATH_NOT_FOUND,
            RemoteError::DirectoryNotEmpty => DIRECTORY_NOT_EMPTY,
            RemoteError::AlreadyExists => NODE_ALREADY_EXISTS,
            RemoteError::AuthenticationFailed => AUTHENTICATION_FAILED,
            RemoteError::PermissionDenied => PERMISSION_DENIED,
            RemoteError::Other { code, .. } => code,
        }
    }
}

impl From<ErrorBody> for RemoteError {
    fn from(body: ErrorBody) -> Self {
        match body.code.as_str() {
            PATH_NOT_FOUND => RemoteError::NotFound,
            DIRECTORY_NOT_EMPTY => RemoteError::DirectoryNotEmpty,
            NODE_ALREADY_EXISTS => RemoteError::AlreadyExists,
            AUTHENTICATION_FAILED => RemoteError::AuthenticationFailed,
            PERMISSION_DENIED => RemoteError::PermissionDenied,
            _ => RemoteError::Other {
                code: body.code,
                message: body.message,
            },
        }
    }
}
