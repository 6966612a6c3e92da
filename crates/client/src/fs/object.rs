use chrono::{DateTime, Utc};
use common::filesystem::{FilesystemNode, PathParts, Permissions};
use reqwest::Body;

use super::remote_fs::Fs;
use crate::api::client::{ApiError, ContentReader};
use crate::api::filesystem::OpenOption;

/// Handle to a remote node.
///
/// Built fresh from each API response and never changed afterwards; actions
/// that modify the node return a new handle. All paths it exposes are scoped.
#[derive(Debug, Clone)]
pub struct Object {
    fs: Fs,
    base: FilesystemNode,
    /// Breadcrumb above `base`, empty for handles built from a listing entry
    ancestors: Vec<FilesystemNode>,
    /// Set when the handle comes from a stat of this node
    children: Option<Vec<FilesystemNode>>,
    permissions: Option<Permissions>,
}

impl Object {
    pub(crate) fn from_parts(fs: Fs, parts: PathParts) -> Self {
        Self {
            fs,
            base: parts.base,
            ancestors: parts.ancestors,
            children: Some(parts.children),
            permissions: Some(parts.permissions),
        }
    }

    pub(crate) fn from_node(fs: Fs, node: FilesystemNode) -> Self {
        Self {
            fs,
            base: node,
            ancestors: Vec::new(),
            children: None,
            permissions: None,
        }
    }

    /* Getters */

    /// The filesystem this handle belongs to
    pub fn fs(&self) -> &Fs {
        &self.fs
    }

    pub fn node(&self) -> &FilesystemNode {
        &self.base
    }

    pub fn into_node(self) -> FilesystemNode {
        self.base
    }

    /// Scoped path, e.g. `/a/b/c.txt`
    pub fn path(&self) -> &str {
        self.base.path()
    }

    /// Scoped path without the leading slash
    pub fn remote(&self) -> &str {
        self.path().trim_start_matches('/')
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn is_dir(&self) -> bool {
        self.base.is_dir()
    }

    pub fn size(&self) -> u64 {
        self.base.size()
    }

    pub fn mod_time(&self) -> DateTime<Utc> {
        self.base.modified()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.base.created()
    }

    /// Hex SHA-256 of the content, `None` for directories or when the
    /// server did not report one
    pub fn sha256(&self) -> Option<&str> {
        self.base
            .file()
            .map(|f| f.sha256_sum.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.base
            .file()
            .map(|f| f.file_type.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.base.info().id.as_deref()
    }

    pub fn ancestors(&self) -> &[FilesystemNode] {
        &self.ancestors
    }

    /// Directory listing, `None` unless the handle came from a stat
    pub fn children(&self) -> Option<&[FilesystemNode]> {
        self.children.as_deref()
    }

    pub(crate) fn into_children(self) -> Vec<FilesystemNode> {
        self.children.unwrap_or_default()
    }

    /// What the credential may do to this node, `None` unless the handle
    /// came from a stat. Ancestor permissions are not folded in.
    pub fn permissions(&self) -> Option<Permissions> {
        self.permissions
    }

    /* Actions */

    pub async fn open(&self, options: &[OpenOption]) -> Result<ContentReader, ApiError> {
        self.fs.open(self.path(), options).await
    }

    /// Replace the content, returns the handle of the new version
    pub async fn update(
        &self,
        body: impl Into<Body>,
        mod_time: Option<DateTime<Utc>>,
    ) -> Result<Object, ApiError> {
        self.fs.put(self.path(), body, mod_time).await
    }

    pub async fn set_mod_time(&self, mod_time: DateTime<Utc>) -> Result<Object, ApiError> {
        self.fs.set_mod_time(self.path(), mod_time).await
    }

    pub async fn remove(&self) -> Result<(), ApiError> {
        self.fs.remove(self.path(), false).await
    }
}
