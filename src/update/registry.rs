//! Workspace registry message handlers
//!
//! Every mutation that changes the persisted mapping (create, remove)
//! emits `Cmd::SaveConfig`; the shell performs the write and the
//! failure path is logged, never surfaced.

use crate::commands::Cmd;
use crate::messages::RegistryMsg;
use crate::model::AppModel;

/// Handle registry messages (tabs and entry rows)
pub fn update_registry(model: &mut AppModel, msg: RegistryMsg) -> Option<Cmd> {
    match msg {
        RegistryMsg::Create { name, path } => match model.registry.create(&name, &path) {
            Ok(workspace) => {
                let index = workspace.display_index;
                model.set_active_tab(index);
                Some(Cmd::Batch(vec![Cmd::SaveConfig, Cmd::Redraw]))
            }
            Err(e) => {
                tracing::warn!("Cannot add workspace '{}': {}", name, e);
                None
            }
        },

        RegistryMsg::Remove(index) => {
            model.registry.remove(index)?;
            // Clamp the active tab back into range and drop the row
            // selection along with it.
            model.set_active_tab(model.active_tab);
            Some(Cmd::Batch(vec![Cmd::SaveConfig, Cmd::Redraw]))
        }

        RegistryMsg::SelectTab(index) => {
            model.set_active_tab(index);
            Some(Cmd::Redraw)
        }

        RegistryMsg::SelectEntry(index) => {
            let in_range = model
                .active_workspace()
                .is_some_and(|w| index < w.entries.len());
            if !in_range {
                return None;
            }
            model.selected_entry = Some(index);
            Some(Cmd::Redraw)
        }

        RegistryMsg::Refresh => {
            model.registry.refresh(model.active_tab);
            model.selected_entry = None;
            Some(Cmd::Redraw)
        }
    }
}
