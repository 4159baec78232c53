//! Panel layout constants and hit-testing
//!
//! All values are logical pixels; the runtime converts physical cursor
//! positions before calling in. Pure functions, shared between
//! rendering and mouse dispatch and testable without a window.

use crate::geometry::{Point, Rect};

pub const PANEL_PADDING: f64 = 10.0;
pub const HEADER_HEIGHT: f64 = 36.0;
pub const HEADER_BUTTON_WIDTH: f64 = 32.0;
pub const HEADER_BUTTON_HEIGHT: f64 = 24.0;
pub const ADD_BUTTON_WIDTH: f64 = 110.0;
pub const TAB_BAR_HEIGHT: f64 = 28.0;
pub const TAB_WIDTH: f64 = 120.0;
pub const TAB_CLOSE_WIDTH: f64 = 18.0;
pub const ROW_HEIGHT: f64 = 24.0;

/// The UI element under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Pin toggle button
    PinButton,
    /// "+ workspace" button
    AddButton,
    /// Panel close button (hides, never quits)
    CloseButton,
    /// A workspace tab body
    Tab(usize),
    /// The close affordance inside a workspace tab
    TabClose(usize),
    /// An entry row of the active workspace (absolute index,
    /// scroll already applied)
    EntryRow(usize),
    /// Anything else inside the panel
    Background,
}

pub fn pin_button_rect() -> Rect {
    Rect::new(PANEL_PADDING, 6.0, HEADER_BUTTON_WIDTH, HEADER_BUTTON_HEIGHT)
}

pub fn add_button_rect() -> Rect {
    Rect::new(
        PANEL_PADDING + HEADER_BUTTON_WIDTH + 6.0,
        6.0,
        ADD_BUTTON_WIDTH,
        HEADER_BUTTON_HEIGHT,
    )
}

pub fn close_button_rect(panel_width: f64) -> Rect {
    Rect::new(
        panel_width - PANEL_PADDING - HEADER_BUTTON_WIDTH,
        6.0,
        HEADER_BUTTON_WIDTH,
        HEADER_BUTTON_HEIGHT,
    )
}

/// Top of the entry list area
pub fn list_top() -> f64 {
    HEADER_HEIGHT + TAB_BAR_HEIGHT + 4.0
}

/// Number of rows that fit in the list area
pub fn visible_rows(panel_height: f64) -> usize {
    ((panel_height - list_top() - PANEL_PADDING) / ROW_HEIGHT).max(0.0) as usize
}

/// Determine which element sits under `p` (panel-local logical
/// coordinates).
pub fn hit_test(
    p: Point,
    panel_width: f64,
    tab_count: usize,
    entry_count: usize,
    scroll_offset: usize,
) -> HitTarget {
    if pin_button_rect().contains(p) {
        return HitTarget::PinButton;
    }
    if add_button_rect().contains(p) {
        return HitTarget::AddButton;
    }
    if close_button_rect(panel_width).contains(p) {
        return HitTarget::CloseButton;
    }

    if p.y >= HEADER_HEIGHT && p.y < HEADER_HEIGHT + TAB_BAR_HEIGHT && p.x >= PANEL_PADDING {
        let index = ((p.x - PANEL_PADDING) / TAB_WIDTH) as usize;
        if index < tab_count {
            let local_x = (p.x - PANEL_PADDING) % TAB_WIDTH;
            if local_x >= TAB_WIDTH - TAB_CLOSE_WIDTH {
                return HitTarget::TabClose(index);
            }
            return HitTarget::Tab(index);
        }
    }

    if p.y >= list_top() && p.x >= PANEL_PADDING && p.x < panel_width - PANEL_PADDING {
        let row = ((p.y - list_top()) / ROW_HEIGHT) as usize + scroll_offset;
        if row < entry_count {
            return HitTarget::EntryRow(row);
        }
    }

    HitTarget::Background
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_buttons() {
        assert_eq!(
            hit_test(Point::new(15.0, 10.0), 600.0, 0, 0, 0),
            HitTarget::PinButton
        );
        assert_eq!(
            hit_test(Point::new(60.0, 10.0), 600.0, 0, 0, 0),
            HitTarget::AddButton
        );
        assert_eq!(
            hit_test(Point::new(570.0, 10.0), 600.0, 0, 0, 0),
            HitTarget::CloseButton
        );
    }

    #[test]
    fn test_tab_and_tab_close() {
        let y = HEADER_HEIGHT + 10.0;
        assert_eq!(
            hit_test(Point::new(PANEL_PADDING + 5.0, y), 600.0, 2, 0, 0),
            HitTarget::Tab(0)
        );
        assert_eq!(
            hit_test(Point::new(PANEL_PADDING + TAB_WIDTH + 5.0, y), 600.0, 2, 0, 0),
            HitTarget::Tab(1)
        );
        assert_eq!(
            hit_test(Point::new(PANEL_PADDING + TAB_WIDTH - 5.0, y), 600.0, 2, 0, 0),
            HitTarget::TabClose(0)
        );
        // Past the last tab is background
        assert_eq!(
            hit_test(Point::new(PANEL_PADDING + TAB_WIDTH * 2.0 + 5.0, y), 600.0, 2, 0, 0),
            HitTarget::Background
        );
    }

    #[test]
    fn test_entry_rows_respect_scroll() {
        let y = list_top() + ROW_HEIGHT * 1.5;
        assert_eq!(
            hit_test(Point::new(100.0, y), 600.0, 1, 10, 0),
            HitTarget::EntryRow(1)
        );
        assert_eq!(
            hit_test(Point::new(100.0, y), 600.0, 1, 10, 3),
            HitTarget::EntryRow(4)
        );
        // Row index past the listing is background
        assert_eq!(
            hit_test(Point::new(100.0, y), 600.0, 1, 1, 3),
            HitTarget::Background
        );
    }

    #[test]
    fn test_visible_rows_never_negative() {
        assert_eq!(visible_rows(10.0), 0);
        assert!(visible_rows(400.0) > 0);
    }
}
