/*!
 * Core types and data structures for sls
 */

use std::path::PathBuf;
use std::time::SystemTime;

use crate::permissions::{has_execute_bit, is_directory_like};

/// One filesystem object in a listing
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display name (`.` and `..` for the synthetic entries)
    pub name: String,
    /// Path the metadata was read from
    pub path: PathBuf,
    /// Raw POSIX type and permission bits
    pub mode: u32,
    /// Hard link count
    pub link_count: u64,
    /// Resolved owner name
    pub owner_name: String,
    /// Resolved group name
    pub group_name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Last modification time
    pub modified_time: SystemTime,
}

/// Classification of an entry as seen by the icon rules.
///
/// Derived from the decoded permission string, so anything that is not a
/// regular file counts as a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory-like entry
    Directory,
    /// Regular file with at least one execute bit
    Executable,
    /// Any other regular file
    File,
}

impl EntryKind {
    /// Classify a decoded permission string such as `-rwxr-xr-x`
    pub fn from_permissions(permissions: &str) -> Self {
        if is_directory_like(permissions) {
            Self::Directory
        } else if has_execute_bit(permissions) {
            Self::Executable
        } else {
            Self::File
        }
    }
}

/// The fields of one table row, already rendered to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub permissions: String,
    pub links: String,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub modified: String,
    pub name: String,
}

impl Row {
    /// Number of rendered columns
    pub const COLUMNS: usize = 7;

    /// Column texts in display order
    pub fn cells(&self) -> [&str; Self::COLUMNS] {
        [
            self.permissions.as_str(),
            self.links.as_str(),
            self.owner.as_str(),
            self.group.as_str(),
            self.size.as_str(),
            self.modified.as_str(),
            self.name.as_str(),
        ]
    }
}
