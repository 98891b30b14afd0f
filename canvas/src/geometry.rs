//! Geometry primitives and the injected canvas frame.
//!
//! Pointer events arrive in screen space. The host tells the engine where the
//! canvas sits on screen through [`CanvasFrame`], so interaction math never has
//! to query a live UI tree. [`DragBounds`] is the clamp policy applied to drag
//! results once they are in canvas space.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{CANVAS_HEIGHT, CANVAS_MARGIN_X, CANVAS_MARGIN_Y, CANVAS_WIDTH};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// Where the canvas container sits in screen space.
///
/// Supplied by the host whenever layout or scroll changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasFrame {
    /// Screen-space position of the canvas container's top-left corner.
    pub origin: Point,
}

impl CanvasFrame {
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Convert a screen-space point to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        screen.sub(self.origin)
    }

    /// Convert a canvas-space point back to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point { x: canvas.x + self.origin.x, y: canvas.y + self.origin.y }
    }
}

/// Clamp policy applied to the top-left of a dragged element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragBounds {
    /// Only forbid negative coordinates.
    #[default]
    NonNegative,
    /// Also keep the element's origin inside a fixed-size canvas, leaving a
    /// margin on the right and bottom.
    Canvas {
        width: f64,
        height: f64,
        margin_x: f64,
        margin_y: f64,
    },
}

impl DragBounds {
    /// The 800 × 600 canvas with the 100 / 50 margins used by the builder.
    #[must_use]
    pub fn fixed_canvas() -> Self {
        Self::Canvas {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin_x: CANVAS_MARGIN_X,
            margin_y: CANVAS_MARGIN_Y,
        }
    }

    /// Clamp a canvas-space position according to this policy.
    ///
    /// The lower bound of zero always wins, so a canvas narrower than its
    /// margin pins elements to the origin instead of producing negatives.
    #[must_use]
    pub fn clamp(&self, pt: Point) -> Point {
        match *self {
            Self::NonNegative => Point { x: pt.x.max(0.0), y: pt.y.max(0.0) },
            Self::Canvas { width, height, margin_x, margin_y } => Point {
                x: pt.x.min(width - margin_x).max(0.0),
                y: pt.y.min(height - margin_y).max(0.0),
            },
        }
    }
}
