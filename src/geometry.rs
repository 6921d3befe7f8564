//! Geometry primitives shared by the selector and the scroller
//!
//! All values are CSS-pixel style `f64` offsets. Hosts may hand back
//! non-finite numbers (missing layout, detached nodes); `sanitize` folds
//! those to zero before they take part in any arithmetic.

/// Axis-aligned rectangle in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: sanitize(left),
            top: sanitize(top),
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when `other` lies entirely inside `self` (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// A reference point used for distance measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub left: f64,
    pub top: f64,
}

impl Point {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Manhattan distance to the top-left corner of `rect`
    pub fn manhattan_to(&self, rect: &Rect) -> f64 {
        (rect.left - self.left).abs() + (rect.top - self.top).abs()
    }
}

/// Scroll position of a container or the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left: sanitize(left),
            top: sanitize(top),
        }
    }
}

/// Visible content size of a container or the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

/// Replace NaN and infinities with zero
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
