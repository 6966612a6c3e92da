use chrono::{DateTime, Utc};
use common::filesystem::{normalize_path, scope_prefix, FilesystemNode, FilesystemPath};
use reqwest::Body;
use tracing::{debug, info};

use super::dir_entry::{DirEntry, Directory};
use super::object::Object;
use crate::api::client::{ApiClient, ApiError, ContentReader};
use crate::api::filesystem::OpenOption;
use crate::config::Config;

/// Storage usage of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// Bytes in use
    pub used: u64,
    /// Storage cap, `None` when the subscription has none
    pub total: Option<u64>,
    pub free: Option<u64>,
}

/// A scoped filesystem over the remote API
#[derive(Debug, Clone)]
pub struct Fs {
    client: ApiClient,
    root: String,
}

impl Fs {
    /// Create a filesystem rooted at `root` inside the configured root folder
    pub fn new(config: &Config, root: &str) -> Result<Self, ApiError> {
        let client = ApiClient::new(config)?;
        Ok(Self::with_client(&client, &config.root_folder_id, root))
    }

    /// Create a filesystem sharing `client`'s connections and credentials
    pub fn with_client(client: &ApiClient, root_folder_id: &str, root: &str) -> Self {
        let root = normalize_path(root);
        let path_prefix = scope_prefix(root_folder_id, &root);
        debug!(root = %root, path_prefix = %path_prefix, "creating filesystem scope");

        Self {
            client: client.with_path_prefix(path_prefix),
            root,
        }
    }

    /* Getters */

    /// Root of this scope relative to the root folder, `""` for the folder
    /// itself
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn path_prefix(&self) -> &str {
        self.client.path_prefix()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Full remote path of a scoped path
    fn full_path(&self, path: &str) -> String {
        self.client.scope().prefixed(&normalize_path(path))
    }

    /* Conversions */

    /// Build a handle from a stat response. Consumes the response.
    pub(crate) fn path_to_object(&self, mut fsp: FilesystemPath) -> Result<Object, ApiError> {
        fsp.strip_path_prefix(self.path_prefix());
        let parts = fsp.into_parts()?;
        Ok(Object::from_parts(self.clone(), parts))
    }

    /// Build a handle from a single node, typically a listing entry
    pub(crate) fn node_to_object(&self, mut node: FilesystemNode) -> Object {
        node.strip_path_prefix(self.path_prefix());
        Object::from_node(self.clone(), node)
    }

    pub(crate) fn node_to_directory(&self, node: &FilesystemNode) -> Directory {
        Directory {
            path: common::filesystem::strip_prefix(node.path(), self.path_prefix()).to_string(),
            modified: node.modified(),
        }
    }

    /* Operations */

    /// Look up any node
    pub async fn stat(&self, path: &str) -> Result<Object, ApiError> {
        let fsp = self.client.stat(&self.full_path(path)).await?;
        self.path_to_object(fsp)
    }

    /// Look up a file. Directories are rejected.
    pub async fn new_object(&self, path: &str) -> Result<Object, ApiError> {
        let object = self.stat(path).await?;
        if object.is_dir() {
            return Err(ApiError::IsADirectory(normalize_path(path)));
        }
        Ok(object)
    }

    /// List the direct children of a directory
    pub async fn list(&self, dir: &str) -> Result<Vec<DirEntry>, ApiError> {
        let fsp = self.client.stat(&self.full_path(dir)).await?;
        let object = self.path_to_object(fsp)?;
        if !object.is_dir() {
            return Err(ApiError::NotADirectory(normalize_path(dir)));
        }

        let entries: Vec<DirEntry> = object
            .into_children()
            .into_iter()
            .map(|node| {
                if node.is_dir() {
                    DirEntry::Directory(self.node_to_directory(&node))
                } else {
                    DirEntry::Object(self.node_to_object(node))
                }
            })
            .collect();

        debug!(dir = %dir, count = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Open the content of a file
    pub async fn open(&self, path: &str, options: &[OpenOption]) -> Result<ContentReader, ApiError> {
        self.client.read(&self.full_path(path), options).await
    }

    /// Create or overwrite a file. Missing parent directories are created.
    ///
    /// When `mod_time` is given it is applied with a follow-up update and the
    /// returned handle reflects it.
    pub async fn put(
        &self,
        path: &str,
        body: impl Into<Body>,
        mod_time: Option<DateTime<Utc>>,
    ) -> Result<Object, ApiError> {
        let full_path = self.full_path(path);
        let mut node = self.client.put(&full_path, body, &[]).await?;
        if let Some(mod_time) = mod_time {
            node = self.client.update(&full_path, None, Some(mod_time)).await?;
        }

        info!(path = %full_path, size = node.size(), "uploaded file");
        Ok(self.node_to_object(node))
    }

    /// Set the modification time of a node
    pub async fn set_mod_time(&self, path: &str, mod_time: DateTime<Utc>) -> Result<Object, ApiError> {
        let node = self
            .client
            .update(&self.full_path(path), None, Some(mod_time))
            .await?;
        Ok(self.node_to_object(node))
    }

    /// Create a directory and its missing ancestors. Existing directories
    /// are not an error.
    pub async fn mkdir(&self, dir: &str) -> Result<(), ApiError> {
        self.client.mkdir(&self.full_path(dir)).await
    }

    pub async fn remove(&self, path: &str, recursive: bool) -> Result<(), ApiError> {
        let full_path = self.full_path(path);
        self.client.delete(&full_path, recursive).await?;
        info!(path = %full_path, recursive, "removed");
        Ok(())
    }

    /// Remove an empty directory
    pub async fn rmdir(&self, dir: &str) -> Result<(), ApiError> {
        self.remove(dir, false).await
    }

    /// Remove a directory and everything below it
    pub async fn purge(&self, dir: &str) -> Result<(), ApiError> {
        self.remove(dir, true).await
    }

    /// Move a file or directory within this scope
    pub async fn move_path(&self, from: &str, to: &str) -> Result<(), ApiError> {
        let from = self.full_path(from);
        let to = normalize_path(to);
        self.client.rename(&from, &to).await?;
        info!(from = %from, to = %to, "moved");
        Ok(())
    }

    /// Account storage usage
    pub async fn about(&self) -> Result<Usage, ApiError> {
        let user = self.client.user_info().await?;
        let used = user.storage_space_used.max(0) as u64;
        let total = (user.subscription.storage_space > 0)
            .then_some(user.subscription.storage_space as u64);

        Ok(Usage {
            used,
            total,
            free: total.map(|t| t.saturating_sub(used)),
        })
    }
}
