//! The in-memory workspace registry
//!
//! Owns workspace lifecycle: create, remove, lookup by display index.
//! Display indices stay a contiguous `0..count` permutation after every
//! mutation; renaming is remove + recreate. The registry is the source
//! of truth for the running session even when persistence fails.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::PersistedConfig;
use crate::error::QuickdropError;

use super::workspace::{enumerate, Workspace};

/// Ordered collection of workspaces, indexed by display position
#[derive(Debug, Clone, Default)]
pub struct WorkspaceRegistry {
    workspaces: Vec<Workspace>,
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new workspace and synchronously list its folder.
    ///
    /// Fails with `InvalidPath` when `path` is missing or not a
    /// directory, and with `DuplicateName` when `name` is already
    /// registered (names are the persisted mapping's keys, so two
    /// entries with one name cannot round-trip). A listing failure on
    /// an otherwise valid directory is not fatal: the workspace is
    /// registered with empty entries and a diagnostic is logged.
    pub fn create(&mut self, name: &str, path: &Path) -> crate::error::Result<&Workspace> {
        if !path.is_dir() {
            return Err(QuickdropError::InvalidPath {
                path: path.to_path_buf(),
            });
        }
        if self.workspaces.iter().any(|w| w.name == name) {
            return Err(QuickdropError::DuplicateName {
                name: name.to_string(),
            });
        }

        let entries = match enumerate(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        };

        let workspace = Workspace {
            name: name.to_string(),
            path: path.to_path_buf(),
            display_index: self.workspaces.len(),
            entries,
        };
        tracing::info!(
            "Created workspace '{}' -> {} ({} entries)",
            workspace.name,
            workspace.path.display(),
            workspace.entries.len()
        );

        self.workspaces.push(workspace);
        Ok(self.workspaces.last().expect("just pushed"))
    }

    /// Remove the workspace at `index`, reindexing the remainder.
    ///
    /// A vacant index is a silent no-op returning `None`.
    pub fn remove(&mut self, index: usize) -> Option<Workspace> {
        if index >= self.workspaces.len() {
            return None;
        }

        let removed = self.workspaces.remove(index);
        self.reindex();
        tracing::info!("Removed workspace '{}'", removed.name);
        Some(removed)
    }

    /// Snapshot of all workspaces, ordered by display index
    pub fn list(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// Lookup by display index, used after tab-change notifications
    pub fn get(&self, index: usize) -> Option<&Workspace> {
        self.workspaces.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Workspace> {
        self.workspaces.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    /// Re-list the folder of the workspace at `index`
    pub fn refresh(&mut self, index: usize) {
        if let Some(workspace) = self.workspaces.get_mut(index) {
            workspace.refresh();
        }
    }

    /// Name → path snapshot for persistence
    pub fn persisted(&self) -> PersistedConfig {
        let workspaces: BTreeMap<String, PathBuf> = self
            .workspaces
            .iter()
            .map(|w| (w.name.clone(), w.path.clone()))
            .collect();
        PersistedConfig { workspaces }
    }

    fn reindex(&mut self) {
        for (index, workspace) in self.workspaces.iter_mut().enumerate() {
            workspace.display_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(names: &[&str]) -> (tempfile::TempDir, WorkspaceRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = WorkspaceRegistry::new();
        for name in names {
            let path = dir.path().join(name);
            std::fs::create_dir(&path).unwrap();
            registry.create(name, &path).unwrap();
        }
        (dir, registry)
    }

    #[test]
    fn test_create_assigns_contiguous_indices() {
        let (_dir, registry) = registry_with(&["A", "B", "C"]);
        let indices: Vec<usize> = registry.list().iter().map(|w| w.display_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_create_rejects_missing_path() {
        let mut registry = WorkspaceRegistry::new();
        let err = registry
            .create("Ghost", Path::new("/nonexistent/quickdrop-test"))
            .unwrap_err();
        assert!(matches!(err, QuickdropError::InvalidPath { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();

        let mut registry = WorkspaceRegistry::new();
        let err = registry.create("Plain", &file).unwrap_err();
        assert!(matches!(err, QuickdropError::InvalidPath { .. }));
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let (dir, mut registry) = registry_with(&["A"]);
        let other = dir.path().join("other");
        std::fs::create_dir(&other).unwrap();

        let err = registry.create("A", &other).unwrap_err();
        assert!(matches!(err, QuickdropError::DuplicateName { .. }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).unwrap().path, dir.path().join("A"));
    }

    #[test]
    fn test_remove_reindexes_contiguously() {
        let (_dir, mut registry) = registry_with(&["A", "B", "C"]);

        let removed = registry.remove(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = registry.list().iter().map(|w| w.name.as_str()).collect();
        let indices: Vec<usize> = registry.list().iter().map(|w| w.display_index).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn test_remove_vacant_index_is_noop() {
        let (_dir, mut registry) = registry_with(&["A"]);
        assert!(registry.remove(5).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_persisted_snapshot_matches_registry() {
        let (dir, mut registry) = registry_with(&["A", "B", "C"]);
        registry.remove(1);

        let persisted = registry.persisted();
        assert_eq!(persisted.workspaces.len(), 2);
        assert_eq!(persisted.workspaces["A"], dir.path().join("A"));
        assert_eq!(persisted.workspaces["C"], dir.path().join("C"));
    }

    #[test]
    fn test_create_lists_folder_synchronously() {
        let dir = tempfile::tempdir().unwrap();
        let ws_dir = dir.path().join("docs");
        std::fs::create_dir(&ws_dir).unwrap();
        std::fs::write(ws_dir.join("note.txt"), "").unwrap();

        let mut registry = WorkspaceRegistry::new();
        let workspace = registry.create("Docs", &ws_dir).unwrap();
        assert_eq!(workspace.entries.len(), 1);
        assert_eq!(workspace.entries[0].name, "note.txt");
    }
}
