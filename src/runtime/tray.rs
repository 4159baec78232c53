//! System tray icon and menu
//!
//! The tray is the panel's alternate trigger surface: a left click on
//! the icon toggles visibility unconditionally, the menu offers "Show
//! panel" and "Quit" — the latter being the only normal termination
//! path, since the panel's own close affordance just hides it.

use anyhow::{Context, Result};
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

const ICON_SIZE: u32 = 32;

/// A user action originating from the tray surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// Icon left-click: toggle the panel
    Toggle,
    /// Menu "Show panel"
    Show,
    /// Menu "Quit"
    Quit,
}

/// The tray icon, its menu, and the ids needed to route menu events
pub struct Tray {
    _icon: TrayIcon,
    show_id: MenuId,
    quit_id: MenuId,
}

impl Tray {
    pub fn new() -> Result<Self> {
        let menu = Menu::new();
        let show_item = MenuItem::new("Show panel", true, None);
        let quit_item = MenuItem::new("Quit", true, None);
        menu.append(&show_item).context("tray menu")?;
        menu.append(&quit_item).context("tray menu")?;

        let icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip("QuickDrop")
            .with_icon(solid_icon())
            .build()
            .context("tray icon")?;

        Ok(Self {
            _icon: icon,
            show_id: show_item.id().clone(),
            quit_id: quit_item.id().clone(),
        })
    }

    /// Drain pending tray and menu events into actions.
    pub fn poll(&self) -> Vec<TrayAction> {
        let mut actions = Vec::new();

        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                actions.push(TrayAction::Toggle);
            }
        }

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if event.id == self.show_id {
                actions.push(TrayAction::Show);
            } else if event.id == self.quit_id {
                actions.push(TrayAction::Quit);
            }
        }

        actions
    }
}

/// A plain in-memory pixmap; no icon asset is shipped.
fn solid_icon() -> Icon {
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for _ in 0..ICON_SIZE * ICON_SIZE {
        rgba.extend_from_slice(&[0x00, 0x78, 0xD4, 0xFF]);
    }
    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).expect("static icon dimensions are valid")
}
