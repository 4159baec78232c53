//! Shared geometry primitives for the panel and the visibility samplers
//!
//! Everything here is in logical pixels and pure (no I/O, no platform
//! calls), so the visibility state machine and hit testing can be
//! exercised without a window.

/// A point in logical display coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in logical display coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Grow the rectangle by `margin` on every side.
    ///
    /// Used by the auto-hide sampler: the pointer must leave this
    /// expanded area before the panel hides, giving a grace band
    /// around the panel edge.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// Top-center anchor position for a panel of `(width, height)`
    /// placed inside this display rectangle.
    pub fn top_center_for(&self, width: f64, _height: f64) -> Point {
        Point::new(self.x + (self.width - width) / 2.0, self.y)
    }
}
