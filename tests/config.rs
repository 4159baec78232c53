//! Config persistence tests
//!
//! Fail-open loading, byte-stable round-trips, and the one-shot
//! bootstrap seeding policy.

mod common;

use std::path::PathBuf;

use common::{make_workspace_dir, test_model_with_config};

use quickdrop::config::PersistedConfig;
use quickdrop::model::AppModel;

// ========================================================================
// Fail-Open Loading
// ========================================================================

#[test]
fn test_missing_file_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let config = PersistedConfig::load(&tmp.path().join("nope.json"));
    assert!(config.workspaces.is_empty());
}

#[test]
fn test_corrupt_json_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let config = PersistedConfig::load(&path);
    assert!(config.workspaces.is_empty());
}

#[test]
fn test_unknown_keys_are_ignored_on_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"workspaces": {"Docs": "/tmp/docs"}, "pinned": true, "geometry": [1, 2]}"#,
    )
    .unwrap();

    let config = PersistedConfig::load(&path);
    assert_eq!(config.workspaces.len(), 1);
    assert_eq!(config.workspaces["Docs"], PathBuf::from("/tmp/docs"));
}

#[test]
fn test_absent_workspaces_key_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(&path, r#"{"something_else": 1}"#).unwrap();

    let config = PersistedConfig::load(&path);
    assert!(config.workspaces.is_empty());
}

// ========================================================================
// Round-Trip
// ========================================================================

#[test]
fn test_save_load_save_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");

    let mut config = PersistedConfig::default();
    config
        .workspaces
        .insert("Zeta".to_string(), PathBuf::from("/z"));
    config
        .workspaces
        .insert("Alpha".to_string(), PathBuf::from("/a"));
    config.save(&path).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let reloaded = PersistedConfig::load(&path);
    reloaded.save(&path).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_creates_parent_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("dir").join("config.json");

    PersistedConfig::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_persist_failure_is_swallowed() {
    let tmp = tempfile::tempdir().unwrap();
    // Parent "directory" is a plain file, so the save must fail
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let model = test_model_with_config(&blocker.join("config.json"));
    // Must not panic; the failure lands in the log
    model.persist();
}

// ========================================================================
// Bootstrap Seeding
// ========================================================================

#[test]
fn test_bootstrap_seeds_only_existing_conventional_folders() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("config.json");

    let model = AppModel::bootstrap(Some(config_path));

    // With no persisted workspaces, the registry holds exactly the
    // conventional folders that exist on this machine, nothing else.
    let existing: Vec<(&str, PathBuf)> = [
        ("Desktop", dirs::desktop_dir()),
        ("Downloads", dirs::download_dir()),
    ]
    .into_iter()
    .filter_map(|(name, dir)| dir.map(|d| (name, d)))
    .filter(|(_, dir)| dir.is_dir())
    .collect();

    assert_eq!(model.registry.len(), existing.len());
    for (name, dir) in existing {
        let workspace = model
            .registry
            .list()
            .iter()
            .find(|w| w.name == name)
            .expect("seeded workspace present");
        assert_eq!(workspace.path, dir);
    }
}

#[test]
fn test_bootstrap_does_not_seed_over_loaded_workspaces() {
    let tmp = tempfile::tempdir().unwrap();
    let docs = make_workspace_dir(tmp.path(), "docs", &[]);

    let config_path = tmp.path().join("config.json");
    std::fs::write(
        &config_path,
        format!(r#"{{"workspaces": {{"Docs": "{}"}}}}"#, docs.display()),
    )
    .unwrap();

    let model = AppModel::bootstrap(Some(config_path));

    let names: Vec<&str> = model
        .registry
        .list()
        .iter()
        .map(|w| w.name.as_str())
        .collect();
    assert_eq!(names, ["Docs"]);
}

#[test]
fn test_bootstrap_with_empty_mapping_starts_unpinned_and_hidden() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("config.json");
    std::fs::write(&config_path, r#"{"workspaces": {}}"#).unwrap();

    let model = AppModel::bootstrap(Some(config_path));
    assert!(!model.visibility.is_visible());
    assert!(!model.visibility.is_pinned());
}
