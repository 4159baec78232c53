//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The runtime shell executes them; the update layer only
//! decides them.

use std::path::PathBuf;

use crate::drag::DragPayload;

/// A side effect requested by the update layer
#[derive(Debug)]
pub enum Cmd {
    /// Repaint the panel contents
    Redraw,
    /// Make the panel window visible: reposition at top-center of the
    /// primary display, raise, and focus
    ShowPanel,
    /// Hide the panel window
    HidePanel,
    /// Persist the registry snapshot (failure is logged, not surfaced)
    SaveConfig,
    /// Open a path in its default application (fire-and-forget)
    OpenPath(PathBuf),
    /// Reveal a path in the system file browser (fire-and-forget)
    RevealPath(PathBuf),
    /// Hand a single-entry payload to the platform drag mechanism
    BeginDrag(DragPayload),
    /// Run the native folder picker for a new workspace
    PickWorkspaceFolder,
    /// Terminate the process (tray "Quit" only)
    Quit,
    /// Execute several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether executing this command should trigger a repaint
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::ShowPanel => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }
}
