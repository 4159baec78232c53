//! Application model - the complete state of the panel session
//!
//! This module contains all the state types following the Elm
//! Architecture pattern. One `AppModel` is constructed at startup, owns
//! the registry and the visibility state machine for the whole process
//! lifetime, and is torn down only at explicit quit.

pub mod registry;
pub mod visibility;
pub mod workspace;

pub use registry::WorkspaceRegistry;
pub use visibility::{
    PanelTransition, VisibilityController, HIDE_MARGIN, SAMPLE_INTERVAL, SHOW_EDGE_THRESHOLD,
};
pub use workspace::{enumerate, FileEntry, Workspace};

use std::path::PathBuf;

use crate::config::PersistedConfig;

/// Default panel size in logical pixels
pub const PANEL_WIDTH: f64 = 600.0;
pub const PANEL_HEIGHT: f64 = 400.0;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Workspace registry (tabs, in display order)
    pub registry: WorkspaceRegistry,
    /// Show/hide/pin state machine
    pub visibility: VisibilityController,
    /// Display index of the active workspace tab
    pub active_tab: usize,
    /// Selected entry row within the active tab, if any
    pub selected_entry: Option<usize>,
    /// Config file location; `None` when no config directory exists,
    /// in which case persistence is skipped (and logged)
    pub config_path: Option<PathBuf>,
}

impl AppModel {
    /// Build the session model: load the persisted registry, skip
    /// bindings whose folders no longer exist, and seed the
    /// conventional defaults when nothing usable was loaded.
    pub fn bootstrap(config_override: Option<PathBuf>) -> Self {
        let config_path = config_override.or_else(crate::config_paths::config_file);
        let config = match &config_path {
            Some(path) => PersistedConfig::load(path),
            None => {
                tracing::warn!("No config directory available; registry will not persist");
                PersistedConfig::default()
            }
        };

        let mut registry = WorkspaceRegistry::new();
        populate(&mut registry, &config);

        // Seeding runs exactly once, only when no persisted workspace
        // survived the load.
        if registry.is_empty() {
            let mut seeded = PersistedConfig::default();
            if seeded.seed_defaults() {
                populate(&mut registry, &seeded);
            }
        }

        Self {
            registry,
            visibility: VisibilityController::new(),
            active_tab: 0,
            selected_entry: None,
            config_path,
        }
    }

    /// The workspace shown on the active tab
    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.registry.get(self.active_tab)
    }

    /// Switch the active tab, clamping to the registry and clearing
    /// the row selection.
    pub fn set_active_tab(&mut self, index: usize) {
        self.active_tab = index.min(self.registry.len().saturating_sub(1));
        self.selected_entry = None;
    }

    /// Selected entry of the active workspace, if any
    pub fn selected_file(&self) -> Option<&FileEntry> {
        let workspace = self.active_workspace()?;
        workspace.entries.get(self.selected_entry?)
    }

    /// Write the registry snapshot to the config file.
    ///
    /// Failure is logged and otherwise ignored: the in-memory registry
    /// remains the source of truth for the running session.
    pub fn persist(&self) {
        let Some(path) = &self.config_path else {
            tracing::debug!("Skipping save, no config path");
            return;
        };
        if let Err(e) = self.registry.persisted().save(path) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

/// Create a workspace for every mapping entry whose folder still
/// exists, preserving the mapping order.
fn populate(registry: &mut WorkspaceRegistry, config: &PersistedConfig) {
    for (name, path) in &config.workspaces {
        if !path.is_dir() {
            tracing::warn!(
                "Skipping workspace '{}': {} is not a directory",
                name,
                path.display()
            );
            continue;
        }
        if let Err(e) = registry.create(name, path) {
            tracing::warn!("Skipping workspace '{}': {}", name, e);
        }
    }
}
