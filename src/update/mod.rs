//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod panel;
mod registry;

pub use app::update_app;
pub use panel::update_panel;
pub use registry::update_registry;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Registry(m) => registry::update_registry(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}
