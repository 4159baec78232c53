//! Global pointer probe for the visibility samplers
//!
//! winit only reports cursor positions relative to our own window, but
//! the show trigger has to see the pointer while the panel is hidden.
//! The probe keeps the last window-observed absolute position and
//! integrates raw device motion deltas on top of it, clamped to the
//! primary display. Until a first absolute fix arrives the probe
//! reports `None` and the samplers skip their cycle, which is the
//! specified behavior for an unavailable platform query.

use crate::geometry::{Point, Rect};

/// Best-effort tracker of the pointer's absolute display position
#[derive(Debug, Default)]
pub struct PointerProbe {
    position: Option<Point>,
}

impl PointerProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absolute fix (logical display coordinates), e.g. a
    /// cursor event over our window translated by the window origin.
    pub fn observe_absolute(&mut self, position: Point) {
        self.position = Some(position);
    }

    /// Integrate a raw device motion delta (logical pixels). No-op
    /// until a first absolute fix exists; clamped to `display` when
    /// known so the estimate can't drift off-screen.
    pub fn observe_delta(&mut self, dx: f64, dy: f64, display: Option<Rect>) {
        let Some(position) = &mut self.position else {
            return;
        };
        position.x += dx;
        position.y += dy;

        if let Some(display) = display {
            position.x = position.x.clamp(display.x, display.x + display.width);
            position.y = position.y.clamp(display.y, display.y + display.height);
        }
    }

    /// Current estimate, if any
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_position_until_absolute_fix() {
        let mut probe = PointerProbe::new();
        probe.observe_delta(10.0, 10.0, None);
        assert_eq!(probe.position(), None);

        probe.observe_absolute(Point::new(100.0, 100.0));
        assert_eq!(probe.position(), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_delta_integration() {
        let mut probe = PointerProbe::new();
        probe.observe_absolute(Point::new(100.0, 100.0));
        probe.observe_delta(25.0, -50.0, None);
        assert_eq!(probe.position(), Some(Point::new(125.0, 50.0)));
    }

    #[test]
    fn test_delta_clamped_to_display() {
        let display = Some(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let mut probe = PointerProbe::new();
        probe.observe_absolute(Point::new(10.0, 10.0));
        probe.observe_delta(-100.0, -100.0, display);
        assert_eq!(probe.position(), Some(Point::new(0.0, 0.0)));
    }
}
