//! Workspaces and folder enumeration
//!
//! A workspace is a named binding between a panel tab and a folder
//! path. Its entry listing is recomputed on demand, never persisted,
//! and carries no identity across listings: entries that go stale when
//! the folder changes externally are tolerated until the next refresh.

use std::path::{Path, PathBuf};

use crate::error::QuickdropError;

/// One immediate child of a workspace folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Base name of the child (lossy for non-UTF-8 names)
    pub name: String,
    /// Full path, used as the opaque payload for open/reveal/drag
    pub path: PathBuf,
    /// Whether this is a directory (display affordance only)
    pub is_dir: bool,
}

impl FileEntry {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_dir = path.is_dir();

        Self { name, path, is_dir }
    }
}

/// List the immediate children of `path`, sorted by name.
///
/// No recursion. Ordering is case-sensitive lexicographic byte order
/// of the entry name, so two calls with no file-system change in
/// between yield identical sequences.
pub fn enumerate(path: &Path) -> crate::error::Result<Vec<FileEntry>> {
    let mut entries: Vec<FileEntry> = std::fs::read_dir(path)
        .map_err(|e| QuickdropError::Enumeration {
            path: path.to_path_buf(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| FileEntry::from_path(entry.path()))
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// A named binding between a panel tab and a folder path
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Unique key within the registry, user-assigned
    pub name: String,
    /// Absolute folder path, validated to exist at creation time only
    pub path: PathBuf,
    /// Position among the workspace tabs
    pub display_index: usize,
    /// Current listing, recomputed on demand
    pub entries: Vec<FileEntry>,
}

impl Workspace {
    /// Re-list the workspace folder in place.
    ///
    /// A failed listing leaves the tab registered with empty entries
    /// rather than tearing it down; the path may have been removed or
    /// become unreadable since the workspace was created.
    pub fn refresh(&mut self) {
        match enumerate(&self.path) {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::warn!("{}", e);
                self.entries.clear();
            }
        }
    }
}
