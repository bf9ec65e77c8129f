/// A read-only snapshot of the file a report is generated for.
///
/// Taken once per request, owned by that request and never mutated.
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

/// Name, size and modification time of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Display name only (NOT the full path). Classification runs on this.
    pub name: String,

    /// Logical file size in bytes.
    pub size_bytes: u64,

    /// Last-modified timestamp. `None` when the platform cannot report it.
    pub last_modified: Option<SystemTime>,
}

impl FileDescriptor {
    /// Create a descriptor with no modification time.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            last_modified: None,
        }
    }

    /// Snapshot the metadata of `path`, naming it `name`.
    pub fn from_metadata(name: impl Into<String>, metadata: &std::fs::Metadata) -> Self {
        Self {
            name: name.into(),
            size_bytes: metadata.len(),
            last_modified: metadata.modified().ok(),
        }
    }

    /// Modification time rendered in local time, e.g. `2026-10-18 14:03:11`.
    pub fn modified_display(&self) -> Option<String> {
        self.last_modified.map(|t| {
            DateTime::<Local>::from(t)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
    }
}

/// Final path component of `path` as an owned string, if it has one.
pub fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
}
