//! Hit-testing pointer positions against the elements of a page.
//!
//! Handles of the selected element are tested before any body so that a
//! resize can never start as a drag. Bodies are then tested topmost first
//! (last in draw order wins).

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::collections::HashMap;

use crate::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH, MIN_RESIZE_HEIGHT, MIN_RESIZE_WIDTH, RESIZE_HANDLE_PX};
use crate::doc::{Element, ElementId};
use crate::geometry::{Point, Rect, Size};

/// Which edge a resize handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    /// The right edge; changes width.
    Right,
    /// The bottom edge; changes height.
    Bottom,
}

impl ResizeDirection {
    /// The style key this direction writes.
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Self::Right => "width",
            Self::Bottom => "height",
        }
    }

    /// Cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Right => "ew-resize",
            Self::Bottom => "ns-resize",
        }
    }

    /// The active dimension after moving the pointer by `delta` from where
    /// the resize began, floored at the minimum size.
    #[must_use]
    pub fn resize(self, start: Size, delta: Point) -> f64 {
        match self {
            Self::Right => (start.width + delta.x).max(MIN_RESIZE_WIDTH),
            Self::Bottom => (start.height + delta.y).max(MIN_RESIZE_HEIGHT),
        }
    }
}

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeDirection),
}

impl HitPart {
    /// Hover cursor for this part.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Body => "grab",
            Self::ResizeHandle(direction) => direction.cursor(),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Bounding box of `element`, using the renderer's measurement when the
/// styles carry no explicit size.
#[must_use]
pub fn element_rect(element: &Element, measured: &HashMap<ElementId, Size>) -> Rect {
    element.rect(measured.get(&element.id).copied(), Size::new(FALLBACK_WIDTH, FALLBACK_HEIGHT))
}

/// Find the element under the canvas-space point `pt`.
#[must_use]
pub fn hit_test(
    pt: Point,
    elements: &[Element],
    selected: Option<ElementId>,
    measured: &HashMap<ElementId, Size>,
) -> Option<Hit> {
    if let Some(element) = selected.and_then(|id| elements.iter().find(|el| el.id == id)) {
        let rect = element_rect(element, measured);
        if element.kind.is_resizable() {
            if let Some(direction) = handle_at(pt, &rect) {
                return Some(Hit { element_id: element.id, part: HitPart::ResizeHandle(direction) });
            }
        }
    }

    elements
        .iter()
        .rev()
        .find(|el| element_rect(el, measured).contains(pt))
        .map(|el| Hit { element_id: el.id, part: HitPart::Body })
}

/// The handle strip under `pt`, if any. Each strip is centred on its edge
/// and spans the full length of that edge; the right strip wins the corner.
fn handle_at(pt: Point, rect: &Rect) -> Option<ResizeDirection> {
    let half = RESIZE_HANDLE_PX / 2.0;
    let right = rect.right();
    let bottom = rect.bottom();

    if (right - half..=right + half).contains(&pt.x) && (rect.y..=bottom).contains(&pt.y) {
        return Some(ResizeDirection::Right);
    }
    if (bottom - half..=bottom + half).contains(&pt.y) && (rect.x..=right).contains(&pt.x) {
        return Some(ResizeDirection::Bottom);
    }
    None
}
