//! The auto-hide / auto-show state machine
//!
//! Two fixed-rate samplers drive the panel: a show trigger that fires
//! when the pointer reaches the top edge of the primary display, and an
//! auto-hide check that fires when the pointer leaves the panel's
//! expanded bounds. Polling (rather than OS hover events) keeps the
//! behavior uniform across window-manager backends and lets tests drive
//! the machine with synthetic samples instead of real pointer hardware.
//!
//! The controller itself is pure: it owns the `visible`/`pinned` flags
//! and decides transitions, while the runtime owns the timers and maps
//! the returned [`PanelTransition`] onto the actual window.

use std::time::Duration;

use crate::geometry::{Point, Rect};

/// Pointer must be within this many logical pixels of the display's top
/// edge to trigger an automatic show.
pub const SHOW_EDGE_THRESHOLD: f64 = 50.0;

/// The panel's bounds are expanded by this margin on every side before
/// the auto-hide check, so the pointer gets a grace band around the
/// panel edge.
pub const HIDE_MARGIN: f64 = 20.0;

/// Interval of both samplers. Each runs on its own deadline for the
/// whole process lifetime.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// A visibility change the shell must apply to the panel window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// Make the panel visible: reposition at top-center of the primary
    /// display, raise it, and request input focus.
    Show,
    /// Hide the panel window.
    Hide,
}

/// Show/hide/pin state for the panel
///
/// Every process start begins hidden and unpinned; neither flag is
/// persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityController {
    visible: bool,
    pinned: bool,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Show-trigger sampler tick.
    ///
    /// Transitions to visible when the panel is hidden, unpinned, and
    /// the pointer sits within [`SHOW_EDGE_THRESHOLD`] of the primary
    /// display's top edge inside its horizontal extent. A `None`
    /// pointer or display means the platform query was unavailable
    /// this cycle; the state is simply not re-evaluated.
    pub fn show_tick(
        &mut self,
        pointer: Option<Point>,
        display: Option<Rect>,
    ) -> Option<PanelTransition> {
        if self.visible || self.pinned {
            return None;
        }
        let (pointer, display) = (pointer?, display?);

        let in_trigger_band = pointer.y < display.y + SHOW_EDGE_THRESHOLD
            && pointer.x >= display.x
            && pointer.x <= display.x + display.width;
        if in_trigger_band {
            self.visible = true;
            return Some(PanelTransition::Show);
        }
        None
    }

    /// Auto-hide sampler tick.
    ///
    /// Transitions to hidden when the panel is visible, unpinned, and
    /// the pointer lies outside the panel bounds expanded by
    /// [`HIDE_MARGIN`]. A `None` pointer or panel rect is a no-op
    /// cycle.
    pub fn hide_tick(
        &mut self,
        pointer: Option<Point>,
        panel: Option<Rect>,
    ) -> Option<PanelTransition> {
        if !self.visible || self.pinned {
            return None;
        }
        let (pointer, panel) = (pointer?, panel?);

        if !panel.expanded(HIDE_MARGIN).contains(pointer) {
            self.visible = false;
            return Some(PanelTransition::Hide);
        }
        None
    }

    /// Tray-click toggle: flips visibility unconditionally, ignoring
    /// the pin flag.
    pub fn toggle(&mut self) -> PanelTransition {
        self.visible = !self.visible;
        if self.visible {
            PanelTransition::Show
        } else {
            PanelTransition::Hide
        }
    }

    /// Tray-menu "show panel": forces visible; no-op if already shown.
    pub fn force_show(&mut self) -> Option<PanelTransition> {
        if self.visible {
            return None;
        }
        self.visible = true;
        Some(PanelTransition::Show)
    }

    /// The panel's close affordance or a window-close request: always
    /// ends hidden, regardless of pin state, and never terminates the
    /// process.
    pub fn close_requested(&mut self) -> Option<PanelTransition> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(PanelTransition::Hide)
    }

    /// Pin-button toggle: flips the pin flag only, leaving current
    /// visibility exactly as the user left it.
    pub fn toggle_pinned(&mut self) {
        self.pinned = !self.pinned;
        tracing::debug!("Panel pinned: {}", self.pinned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }

    fn panel() -> Option<Rect> {
        Some(Rect::new(660.0, 0.0, 600.0, 400.0))
    }

    #[test]
    fn test_show_tick_at_top_edge() {
        let mut vis = VisibilityController::new();
        let result = vis.show_tick(Some(Point::new(960.0, 10.0)), display());
        assert_eq!(result, Some(PanelTransition::Show));
        assert!(vis.is_visible());
    }

    #[test]
    fn test_show_tick_below_threshold_band() {
        let mut vis = VisibilityController::new();
        assert_eq!(vis.show_tick(Some(Point::new(960.0, 50.0)), display()), None);
        assert_eq!(vis.show_tick(Some(Point::new(960.0, 300.0)), display()), None);
        assert!(!vis.is_visible());
    }

    #[test]
    fn test_show_tick_outside_display_width() {
        let mut vis = VisibilityController::new();
        assert_eq!(vis.show_tick(Some(Point::new(-5.0, 10.0)), display()), None);
        assert_eq!(vis.show_tick(Some(Point::new(1925.0, 10.0)), display()), None);
    }

    #[test]
    fn test_show_tick_noop_without_sample() {
        let mut vis = VisibilityController::new();
        assert_eq!(vis.show_tick(None, display()), None);
        assert_eq!(vis.show_tick(Some(Point::new(960.0, 10.0)), None), None);
        assert!(!vis.is_visible());
    }

    #[test]
    fn test_hide_tick_outside_expanded_bounds() {
        let mut vis = VisibilityController::new();
        vis.toggle();

        // Just inside the 20px grace band: stays visible
        assert_eq!(
            vis.hide_tick(Some(Point::new(660.0, 419.0)), panel()),
            None
        );
        // Outside it: hides
        assert_eq!(
            vis.hide_tick(Some(Point::new(660.0, 421.0)), panel()),
            Some(PanelTransition::Hide)
        );
        assert!(!vis.is_visible());
    }

    #[test]
    fn test_hide_tick_noop_when_hidden() {
        let mut vis = VisibilityController::new();
        assert_eq!(
            vis.hide_tick(Some(Point::new(0.0, 1000.0)), panel()),
            None
        );
    }

    #[test]
    fn test_pinned_suppresses_both_samplers() {
        let mut vis = VisibilityController::new();
        vis.toggle_pinned();

        assert_eq!(vis.show_tick(Some(Point::new(960.0, 0.0)), display()), None);
        assert!(!vis.is_visible());

        vis.toggle();
        assert!(vis.is_visible());
        assert_eq!(
            vis.hide_tick(Some(Point::new(0.0, 1000.0)), panel()),
            None
        );
        assert!(vis.is_visible());
    }

    #[test]
    fn test_toggle_ignores_pin() {
        let mut vis = VisibilityController::new();
        vis.toggle_pinned();

        assert_eq!(vis.toggle(), PanelTransition::Show);
        assert_eq!(vis.toggle(), PanelTransition::Hide);
    }

    #[test]
    fn test_toggle_pinned_leaves_visibility_untouched() {
        let mut vis = VisibilityController::new();
        vis.toggle();
        vis.toggle_pinned();
        assert!(vis.is_visible());
        vis.toggle_pinned();
        assert!(vis.is_visible());
    }

    #[test]
    fn test_close_requested_hides_even_when_pinned() {
        let mut vis = VisibilityController::new();
        vis.toggle();
        vis.toggle_pinned();

        assert_eq!(vis.close_requested(), Some(PanelTransition::Hide));
        assert!(!vis.is_visible());
        assert_eq!(vis.close_requested(), None);
    }

    #[test]
    fn test_force_show_noop_when_visible() {
        let mut vis = VisibilityController::new();
        assert_eq!(vis.force_show(), Some(PanelTransition::Show));
        assert_eq!(vis.force_show(), None);
    }

    #[test]
    fn test_show_tick_respects_display_origin_offset() {
        let mut vis = VisibilityController::new();
        let offset_display = Some(Rect::new(100.0, 200.0, 800.0, 600.0));

        // y is small in absolute terms but above the offset display
        assert_eq!(
            vis.show_tick(Some(Point::new(500.0, 10.0)), offset_display),
            None
        );
        // Within 50px of the display's own top edge
        assert_eq!(
            vis.show_tick(Some(Point::new(500.0, 230.0)), offset_display),
            Some(PanelTransition::Show)
        );
    }
}
