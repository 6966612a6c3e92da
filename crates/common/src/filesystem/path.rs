use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::node::FilesystemNode;

/// Actions the current credential may perform on a node.
///
/// The four flags are independent; nothing here combines them with the
/// permissions of ancestor nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub update: bool,
    #[serde(default)]
    pub delete: bool,
}

/// Response to a stat query
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemPath {
    /// Every node from the API root down to the queried node
    pub path: Vec<FilesystemNode>,
    /// Position of the queried node in `path`
    pub base_index: usize,
    /// Directory listing of the queried node, empty for files
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub children: Vec<FilesystemNode>,
    #[serde(default)]
    pub permissions: Permissions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("base index {index} out of range for path of length {len}")]
pub struct BaseIndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// A [`FilesystemPath`] taken apart around its base node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Nodes above the base, root first
    pub ancestors: Vec<FilesystemNode>,
    pub base: FilesystemNode,
    pub children: Vec<FilesystemNode>,
    pub permissions: Permissions,
}

impl FilesystemPath {
    /// The queried node, if `base_index` is in range
    pub fn base(&self) -> Option<&FilesystemNode> {
        self.path.get(self.base_index)
    }

    /// Strip `prefix` from every node in the breadcrumb and in the listing
    pub fn strip_path_prefix(&mut self, prefix: &str) {
        for node in self.path.iter_mut().chain(self.children.iter_mut()) {
            node.strip_path_prefix(prefix);
        }
    }

    /// Consume the response and move the base node out of the breadcrumb.
    ///
    /// Nodes after the base (the server never sends any) are dropped.
    pub fn into_parts(self) -> Result<PathParts, BaseIndexOutOfRange> {
        let len = self.path.len();
        let index = self.base_index;
        if index >= len {
            return Err(BaseIndexOutOfRange { index, len });
        }

        let mut ancestors = self.path;
        let base = ancestors
            .split_off(index)
            .into_iter()
            .next()
            .ok_or(BaseIndexOutOfRange { index, len })?;

        Ok(PathParts {
            ancestors,
            base,
            children: self.children,
            permissions: self.permissions,
        })
    }
}
