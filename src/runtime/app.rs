//! The winit shell driving the panel
//!
//! Owns the window, the tray, the pointer probe, and the two sampler
//! deadlines. All state changes funnel through `update()`; this module
//! only translates platform events into messages and executes the
//! commands that come back.

use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, DeviceEvents};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowLevel};

use crate::commands::Cmd;
use crate::geometry::{Point, Rect};
use crate::messages::{AppMsg, Msg, PanelMsg, RegistryMsg};
use crate::model::{AppModel, PANEL_HEIGHT, PANEL_WIDTH, SAMPLE_INTERVAL};
use crate::update::update;
use crate::view::hit_test::{hit_test, visible_rows, HitTarget};
use crate::view::Renderer;

use super::pointer::PointerProbe;
use super::tray::{Tray, TrayAction};

/// Pixels of cursor travel before a press becomes a drag
const DRAG_THRESHOLD_PIXELS: f64 = 4.0;
/// Two clicks on the same row within this window open the entry
const DOUBLE_CLICK_MS: u64 = 300;

pub struct App {
    model: AppModel,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    renderer: Option<Renderer>,
    tray: Option<Tray>,
    probe: PointerProbe,

    /// List scroll position of the active tab (presentation state only)
    scroll_offset: usize,
    start_visible: bool,
    should_exit: bool,

    // Mouse gesture state (panel-local logical coordinates)
    cursor_position: Option<Point>,
    pressed_row: Option<usize>,
    drag_start: Option<Point>,
    drag_active: bool,
    last_click: Option<(Instant, usize)>,

    // Independent sampler deadlines
    next_show_tick: Instant,
    next_hide_tick: Instant,

    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    pub fn new(model: AppModel, start_visible: bool) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let now = Instant::now();

        Self {
            model,
            window: None,
            context: None,
            renderer: None,
            tray: None,
            probe: PointerProbe::new(),
            scroll_offset: 0,
            start_visible,
            should_exit: false,
            cursor_position: None,
            pressed_row: None,
            drag_start: None,
            drag_active: false,
            last_click: None,
            next_show_tick: now + SAMPLE_INTERVAL,
            // Offset the two deadlines so the ticks interleave
            next_hide_tick: now + SAMPLE_INTERVAL + SAMPLE_INTERVAL / 2,
            msg_tx,
            msg_rx,
            clipboard: None,
        }
    }

    /// Run one message through the update loop and execute the result.
    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        let previous_tab = self.model.active_tab;
        if let Some(cmd) = update(&mut self.model, msg) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd, event_loop);
            if needs_redraw {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
        if self.model.active_tab != previous_tab {
            self.scroll_offset = 0;
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, event_loop: &ActiveEventLoop) {
        match cmd {
            Cmd::Redraw => {}

            Cmd::ShowPanel => self.show_panel(event_loop),

            Cmd::HidePanel => {
                if let Some(window) = &self.window {
                    window.set_visible(false);
                }
            }

            Cmd::SaveConfig => self.model.persist(),

            Cmd::OpenPath(path) => {
                if let Err(e) = open::that_detached(&path) {
                    tracing::debug!("Failed to open {}: {}", path.display(), e);
                }
            }

            Cmd::RevealPath(path) => reveal_in_file_browser(&path),

            Cmd::BeginDrag(payload) => {
                // winit cannot originate a native drag; hand the
                // uri-list to the clipboard as the best-effort
                // transfer and log the export.
                if self.clipboard.is_none() {
                    self.clipboard = match arboard::Clipboard::new() {
                        Ok(clipboard) => Some(clipboard),
                        Err(e) => {
                            tracing::debug!("Clipboard unavailable: {}", e);
                            None
                        }
                    };
                }
                if let Some(clipboard) = &mut self.clipboard {
                    if let Err(e) = clipboard.set_text(payload.uri_list.clone()) {
                        tracing::debug!("Failed to export drag payload: {}", e);
                    } else {
                        tracing::debug!("Exported drag payload: {}", payload.uri_list.trim_end());
                    }
                }
            }

            Cmd::PickWorkspaceFolder => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let folder = rfd::FileDialog::new().pick_folder();
                    let _ = tx.send(Msg::App(AppMsg::FolderPicked(folder)));
                });
            }

            Cmd::Quit => {
                self.should_exit = true;
                event_loop.exit();
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, event_loop);
                }
            }
        }
    }

    /// Reposition at top-center of the primary display, show, raise,
    /// and focus.
    fn show_panel(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };

        if let Some(monitor) = event_loop.primary_monitor() {
            let display_pos = monitor.position();
            let display_size = monitor.size();
            let panel = window.inner_size();
            let x = display_pos.x + (display_size.width.saturating_sub(panel.width)) as i32 / 2;
            window.set_outer_position(PhysicalPosition::new(x, display_pos.y));
        }

        window.set_visible(true);
        window.focus_window();
        window.request_redraw();
    }

    /// Primary display bounds in logical coordinates, if known
    fn display_rect(&self, event_loop: &ActiveEventLoop) -> Option<Rect> {
        let monitor = event_loop.primary_monitor()?;
        let scale = monitor.scale_factor();
        let pos = monitor.position();
        let size = monitor.size();
        Some(Rect::new(
            pos.x as f64 / scale,
            pos.y as f64 / scale,
            size.width as f64 / scale,
            size.height as f64 / scale,
        ))
    }

    /// The panel window's current bounds in logical coordinates
    fn panel_rect(&self) -> Option<Rect> {
        let window = self.window.as_ref()?;
        let scale = window.scale_factor();
        let pos = window.outer_position().ok()?;
        let size = window.inner_size();
        Some(Rect::new(
            pos.x as f64 / scale,
            pos.y as f64 / scale,
            size.width as f64 / scale,
            size.height as f64 / scale,
        ))
    }

    fn render(&mut self) {
        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.model, self.scroll_offset) {
                tracing::warn!("Render error: {}", e);
            }
        }
    }

    fn active_entry_count(&self) -> usize {
        self.model
            .active_workspace()
            .map(|w| w.entries.len())
            .unwrap_or(0)
    }

    fn panel_logical_size(&self) -> (f64, f64) {
        match &self.window {
            Some(window) => {
                let scale = window.scale_factor();
                let size = window.inner_size();
                (size.width as f64 / scale, size.height as f64 / scale)
            }
            None => (PANEL_WIDTH, PANEL_HEIGHT),
        }
    }

    fn handle_mouse_press(&mut self, button: MouseButton, event_loop: &ActiveEventLoop) {
        let Some(position) = self.cursor_position else {
            return;
        };
        let (panel_w, _) = self.panel_logical_size();
        let target = hit_test(
            position,
            panel_w,
            self.model.registry.len(),
            self.active_entry_count(),
            self.scroll_offset,
        );

        match (button, target) {
            (MouseButton::Left, HitTarget::PinButton) => {
                self.dispatch(Msg::Panel(PanelMsg::TogglePin), event_loop);
            }
            (MouseButton::Left, HitTarget::AddButton) => {
                self.dispatch(Msg::App(AppMsg::AddWorkspaceRequested), event_loop);
            }
            (MouseButton::Left, HitTarget::CloseButton) => {
                self.dispatch(Msg::Panel(PanelMsg::CloseRequested), event_loop);
            }
            (MouseButton::Left, HitTarget::Tab(index)) => {
                self.dispatch(Msg::Registry(RegistryMsg::SelectTab(index)), event_loop);
            }
            (MouseButton::Left, HitTarget::TabClose(index)) => {
                self.dispatch(Msg::Registry(RegistryMsg::Remove(index)), event_loop);
            }
            (MouseButton::Left, HitTarget::EntryRow(row)) => {
                let now = Instant::now();
                let is_double = self
                    .last_click
                    .is_some_and(|(at, r)| {
                        r == row && now.duration_since(at) < Duration::from_millis(DOUBLE_CLICK_MS)
                    });
                self.last_click = Some((now, row));
                self.pressed_row = Some(row);
                self.drag_start = Some(position);
                self.drag_active = false;

                if is_double {
                    self.dispatch(Msg::App(AppMsg::OpenEntry(row)), event_loop);
                } else {
                    self.dispatch(Msg::Registry(RegistryMsg::SelectEntry(row)), event_loop);
                }
            }
            (MouseButton::Right, HitTarget::EntryRow(row)) => {
                self.dispatch(Msg::App(AppMsg::RevealEntry(row)), event_loop);
            }
            _ => {}
        }
    }

    fn handle_cursor_moved(&mut self, position: Point, event_loop: &ActiveEventLoop) {
        self.cursor_position = Some(position);

        // Absolute fix for the probe: window origin + panel-local offset
        if let Some(panel) = self.panel_rect() {
            self.probe
                .observe_absolute(Point::new(panel.x + position.x, panel.y + position.y));
        }

        // Drag gesture: a pressed row dragged past the threshold
        // becomes a single-item export.
        if let (Some(row), Some(start), false) =
            (self.pressed_row, self.drag_start, self.drag_active)
        {
            let dx = position.x - start.x;
            let dy = position.y - start.y;
            if (dx * dx + dy * dy).sqrt() >= DRAG_THRESHOLD_PIXELS {
                self.drag_active = true;
                self.dispatch(Msg::App(AppMsg::DragEntry(row)), event_loop);
            }
        }
    }

    fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y as i64,
            MouseScrollDelta::PixelDelta(pos) => {
                -(pos.y / crate::view::hit_test::ROW_HEIGHT) as i64
            }
        };
        if lines == 0 {
            return;
        }

        let (_, panel_h) = self.panel_logical_size();
        let max_offset = self
            .active_entry_count()
            .saturating_sub(visible_rows(panel_h));
        let next = self.scroll_offset as i64 + lines;
        self.scroll_offset = next.clamp(0, max_offset as i64) as usize;

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Run any sampler whose deadline has passed and re-arm it.
    fn run_samplers(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now >= self.next_show_tick {
            self.next_show_tick = now + SAMPLE_INTERVAL;
            let msg = Msg::Panel(PanelMsg::ShowTick {
                pointer: self.probe.position(),
                display: self.display_rect(event_loop),
            });
            self.dispatch(msg, event_loop);
        }

        if now >= self.next_hide_tick {
            self.next_hide_tick = now + SAMPLE_INTERVAL;
            let msg = Msg::Panel(PanelMsg::HideTick {
                pointer: self.probe.position(),
                panel: self.panel_rect(),
            });
            self.dispatch(msg, event_loop);
        }
    }

    fn drain_channels(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg, event_loop);
        }

        let actions = match &self.tray {
            Some(tray) => tray.poll(),
            None => Vec::new(),
        };
        for action in actions {
            let msg = match action {
                TrayAction::Toggle => Msg::Panel(PanelMsg::TrayToggle),
                TrayAction::Show => Msg::Panel(PanelMsg::ShowRequested),
                TrayAction::Quit => Msg::App(AppMsg::Quit),
            };
            self.dispatch(msg, event_loop);
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title("QuickDrop")
            .with_inner_size(LogicalSize::new(PANEL_WIDTH, PANEL_HEIGHT))
            .with_decorations(false)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_visible(false);

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        self.window = Some(window);
        self.context = Some(context);

        self.tray = match Tray::new() {
            Ok(tray) => Some(tray),
            Err(e) => {
                // The panel still works from the edge trigger alone.
                tracing::warn!("Tray unavailable: {}", e);
                None
            }
        };

        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        event_loop.listen_device_events(DeviceEvents::Always);
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to initialize panel window: {}", e);
            event_loop.exit();
            return;
        }

        if self.start_visible {
            self.dispatch(Msg::Panel(PanelMsg::ShowRequested), event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let (own_id, scale) = match &self.window {
            Some(window) => (window.id(), window.scale_factor()),
            None => return,
        };
        if window_id != own_id {
            return;
        }

        match event {
            // The panel's close affordance hides; quitting is the
            // tray's job.
            WindowEvent::CloseRequested => {
                self.dispatch(Msg::Panel(PanelMsg::CloseRequested), event_loop);
            }

            WindowEvent::RedrawRequested => self.render(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::warn!("Resize error: {}", e);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = Point::new(position.x / scale, position.y / scale);
                self.handle_cursor_moved(logical, event_loop);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.handle_mouse_press(button, event_loop),

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.pressed_row = None;
                self.drag_start = None;
                self.drag_active = false;
            }

            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(delta),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::F5)
                {
                    self.dispatch(Msg::Registry(RegistryMsg::Refresh), event_loop);
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Keeps the probe alive while the panel is hidden and
        // receiving no window events.
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let display = self.display_rect(event_loop);
            let scale = event_loop
                .primary_monitor()
                .map(|m| m.scale_factor())
                .unwrap_or(1.0);
            self.probe.observe_delta(dx / scale, dy / scale, display);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            return;
        }

        self.drain_channels(event_loop);
        self.run_samplers(event_loop);

        // The sampler cadence doubles as the wake-up for the tray and
        // dialog channels.
        let next = self.next_show_tick.min(self.next_hide_tick);
        event_loop.set_control_flow(ControlFlow::WaitUntil(next));
    }
}

/// Reveal `path` in the platform file browser, fire-and-forget.
fn reveal_in_file_browser(path: &Path) {
    #[cfg(target_os = "macos")]
    {
        let _ = std::process::Command::new("open").arg("-R").arg(path).spawn();
    }
    #[cfg(target_os = "windows")]
    {
        let _ = std::process::Command::new("explorer")
            .arg(format!("/select,{}", path.display()))
            .spawn();
    }
    #[cfg(target_os = "linux")]
    {
        // No portable "select in file manager"; open the parent folder.
        let target = path.parent().unwrap_or(path);
        let _ = std::process::Command::new("xdg-open").arg(target).spawn();
    }
}
