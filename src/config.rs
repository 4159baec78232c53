//! Workspace registry persistence
//!
//! Stores the name → folder mapping in `~/.config/quickdrop/config.json`.
//! Loading is fail-open: a missing, unreadable, or corrupt file yields an
//! empty mapping so startup never blocks on bad config. Saving is a
//! single overwrite; callers log and ignore failures because the
//! in-memory registry stays authoritative for the running session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The persisted config document.
///
/// On disk this is a JSON object with a single recognized key
/// `workspaces`; unknown keys are ignored on load and an absent key is
/// the empty mapping. `BTreeMap` keeps serialization order stable so
/// save → load → save round-trips byte-for-byte.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedConfig {
    /// Workspace name → absolute folder path
    #[serde(default)]
    pub workspaces: BTreeMap<String, PathBuf>,
}

impl PersistedConfig {
    /// Load the config document from `path`, or the empty mapping on
    /// any failure.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, starting empty", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the default user-profile location, or the empty
    /// mapping if no config directory is available.
    pub fn load_default() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config directory available, starting empty");
                Self::default()
            }
        }
    }

    /// Save the config document to `path` as pretty-printed JSON.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Seed the conventional default workspaces when nothing was
    /// loaded.
    ///
    /// Inserts the user's Desktop and Downloads folders, each only if
    /// it exists on disk. No-op when the mapping is non-empty; returns
    /// whether anything was seeded.
    pub fn seed_defaults(&mut self) -> bool {
        if !self.workspaces.is_empty() {
            return false;
        }

        let mut seeded = false;
        let candidates = [
            ("Desktop", dirs::desktop_dir()),
            ("Downloads", dirs::download_dir()),
        ];
        for (name, dir) in candidates {
            if let Some(dir) = dir {
                if dir.is_dir() {
                    self.workspaces.insert(name.to_string(), dir);
                    seeded = true;
                }
            }
        }

        if seeded {
            tracing::info!("Seeded default workspaces");
        }
        seeded
    }
}
