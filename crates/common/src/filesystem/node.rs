use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::prefix::strip_prefix;

/// Attributes every node carries regardless of its kind
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Absolute path of the node
    pub path: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Permission mode, e.g. `drwxr-xr-x`
    #[serde(default)]
    pub mode_string: String,
    #[serde(default)]
    pub mode_octal: String,

    // Metadata, only set for some nodes (bucket roots, shared directories)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_password: Option<String>,
    /// Free-form properties, keys are defined by the server
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

/// Attributes only files carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default)]
    pub file_size: u64,
    /// MIME type
    #[serde(default)]
    pub file_type: String,
    /// Hex encoded SHA-256 of the content
    #[serde(default)]
    pub sha256_sum: String,
}

/// One entry in the remote tree, discriminated on the `type` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilesystemNode {
    #[serde(rename = "file")]
    File {
        #[serde(flatten)]
        info: NodeInfo,
        #[serde(flatten)]
        file: FileInfo,
    },
    #[serde(rename = "dir", alias = "directory")]
    Directory {
        #[serde(flatten)]
        info: NodeInfo,
    },
}

impl FilesystemNode {
    pub fn info(&self) -> &NodeInfo {
        match self {
            FilesystemNode::File { info, .. } | FilesystemNode::Directory { info } => info,
        }
    }

    pub fn info_mut(&mut self) -> &mut NodeInfo {
        match self {
            FilesystemNode::File { info, .. } | FilesystemNode::Directory { info } => info,
        }
    }

    /// File attributes, `None` for directories
    pub fn file(&self) -> Option<&FileInfo> {
        match self {
            FilesystemNode::File { file, .. } => Some(file),
            FilesystemNode::Directory { .. } => None,
        }
    }

    pub fn path(&self) -> &str {
        &self.info().path
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.info().created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.info().modified
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FilesystemNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FilesystemNode::File { .. })
    }

    /// Content size in bytes, zero for directories
    pub fn size(&self) -> u64 {
        self.file().map(|f| f.file_size).unwrap_or(0)
    }

    /// Remove `prefix` from the node's path. Paths outside the prefix are
    /// left untouched, so calling this more than once is harmless.
    pub fn strip_path_prefix(&mut self, prefix: &str) {
        let info = self.info_mut();
        let stripped = strip_prefix(&info.path, prefix);
        if stripped.len() != info.path.len() {
            info.path = stripped.to_string();
        }
    }
}
