//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::geometry::{Point, Rect};

/// Panel visibility messages (sampler ticks and manual triggers)
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Show-trigger sampler tick, carrying the probe sample for this
    /// cycle. `None` fields mean the platform query was unavailable.
    ShowTick {
        pointer: Option<Point>,
        display: Option<Rect>,
    },
    /// Auto-hide sampler tick with the pointer and the panel's current
    /// bounds
    HideTick {
        pointer: Option<Point>,
        panel: Option<Rect>,
    },
    /// Tray icon click: toggle visibility unconditionally
    TrayToggle,
    /// Tray menu "Show panel": force visible
    ShowRequested,
    /// Close button or window-close request: hide, never quit
    CloseRequested,
    /// Pin button: flip the pin flag only
    TogglePin,
}

/// Workspace registry messages
#[derive(Debug, Clone)]
pub enum RegistryMsg {
    /// Register a new workspace tab
    Create { name: String, path: PathBuf },
    /// Remove the workspace at this display index (tab close)
    Remove(usize),
    /// Switch the active tab
    SelectTab(usize),
    /// Select an entry row in the active tab
    SelectEntry(usize),
    /// Re-list the active workspace's folder
    Refresh,
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Header "+ workspace" button: open the folder picker
    AddWorkspaceRequested,
    /// Folder picker result (None = cancelled)
    FolderPicked(Option<PathBuf>),
    /// Open the entry at this row in its default application
    OpenEntry(usize),
    /// Reveal the entry at this row in the system file browser
    RevealEntry(usize),
    /// A drag gesture started on this entry row
    DragEntry(usize),
    /// Tray menu "Quit": the only normal termination path
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Panel(PanelMsg),
    Registry(RegistryMsg),
    App(AppMsg),
}
