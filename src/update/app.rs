//! Application-level message handlers (dialogs, open/reveal/drag, quit)

use std::path::Path;

use crate::commands::Cmd;
use crate::drag::DragPayload;
use crate::messages::{AppMsg, RegistryMsg};
use crate::model::AppModel;

use super::registry::update_registry;

/// Handle application messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::AddWorkspaceRequested => Some(Cmd::PickWorkspaceFolder),

        AppMsg::FolderPicked(None) => None,
        AppMsg::FolderPicked(Some(path)) => {
            let name = workspace_name_for(&path);
            update_registry(model, RegistryMsg::Create { name, path })
        }

        AppMsg::OpenEntry(index) => {
            let entry = model.active_workspace()?.entries.get(index)?;
            Some(Cmd::OpenPath(entry.path.clone()))
        }

        AppMsg::RevealEntry(index) => {
            let entry = model.active_workspace()?.entries.get(index)?;
            Some(Cmd::RevealPath(entry.path.clone()))
        }

        AppMsg::DragEntry(index) => {
            let entry = model.active_workspace()?.entries.get(index)?;
            Some(Cmd::BeginDrag(DragPayload::for_entry(entry)))
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Tab label for a picked folder: its base name, or the whole path for
/// roots like `/`.
fn workspace_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
