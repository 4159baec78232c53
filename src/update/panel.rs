//! Panel visibility message handlers
//!
//! Thin bridge between the sampler/trigger messages and the
//! [`VisibilityController`]: the state machine decides, the returned
//! command tells the shell what to do with the window.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::{AppModel, PanelTransition};

/// Handle panel visibility messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::ShowTick { pointer, display } => model
            .visibility
            .show_tick(pointer, display)
            .map(transition_cmd),

        PanelMsg::HideTick { pointer, panel } => model
            .visibility
            .hide_tick(pointer, panel)
            .map(transition_cmd),

        PanelMsg::TrayToggle => Some(transition_cmd(model.visibility.toggle())),

        PanelMsg::ShowRequested => model.visibility.force_show().map(transition_cmd),

        PanelMsg::CloseRequested => model.visibility.close_requested().map(transition_cmd),

        PanelMsg::TogglePin => {
            model.visibility.toggle_pinned();
            Some(Cmd::Redraw)
        }
    }
}

fn transition_cmd(transition: PanelTransition) -> Cmd {
    match transition {
        PanelTransition::Show => Cmd::ShowPanel,
        PanelTransition::Hide => Cmd::HidePanel,
    }
}
