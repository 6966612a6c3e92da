use chrono::{DateTime, Utc};

use super::object::Object;

/// Directory as it appears in a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Scoped path
    pub path: String,
    pub modified: DateTime<Utc>,
}

impl Directory {
    /// Path without the leading slash
    pub fn remote(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

#[derive(Debug, Clone)]
pub enum DirEntry {
    Object(Object),
    Directory(Directory),
}

impl DirEntry {
    pub fn path(&self) -> &str {
        match self {
            DirEntry::Object(object) => object.path(),
            DirEntry::Directory(dir) => &dir.path,
        }
    }

    pub fn modified(&self) -> DateTime<Utc> {
        match self {
            DirEntry::Object(object) => object.mod_time(),
            DirEntry::Directory(dir) => dir.modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, DirEntry::Directory(_))
    }
}
