//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles
//! separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use quickdrop::model::{AppModel, VisibilityController, WorkspaceRegistry};

/// An AppModel with no workspaces and no config file backing
pub fn test_model() -> AppModel {
    AppModel {
        registry: WorkspaceRegistry::new(),
        visibility: VisibilityController::new(),
        active_tab: 0,
        selected_entry: None,
        config_path: None,
    }
}

/// An AppModel persisting to `config_path`
pub fn test_model_with_config(config_path: &Path) -> AppModel {
    let mut model = test_model();
    model.config_path = Some(config_path.to_path_buf());
    model
}

/// Create a folder under `root` populated with the given file names
pub fn make_workspace_dir(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir(&dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), "").unwrap();
    }
    dir
}
