//! Input model: modifier keys, mouse buttons, keys, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries what the engine needs to compute
//! live updates and either commit or revert on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ElementId, PartialElement, Position};
use crate::geometry::{Point, Size};
use crate::hit::ResizeDirection;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key, named as a browser reports it (`"Escape"`, `"Enter"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Case-insensitive comparison, so `"Z"` with Shift still matches `"z"`.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// The gesture in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving an element.
    Dragging {
        id: ElementId,
        /// Pointer position relative to the element's top-left, fixed for the drag.
        offset: Point,
        /// Position before the drag, restored on cancel.
        original: Position,
        /// Last position applied, `None` until the first move.
        last: Option<Position>,
    },
    /// Resizing an element along one edge.
    Resizing {
        id: ElementId,
        direction: ResizeDirection,
        /// Canvas-space pointer position at pointer-down.
        start: Point,
        start_size: Size,
        /// Pre-resize value of the active style key (absent keys captured as removals).
        original: PartialElement,
        /// Last dimension applied, `None` until the first move.
        last: Option<f64>,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The element the current gesture acts on.
    #[must_use]
    pub fn active_id(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }

    /// The fields that put the element back where the gesture found it.
    #[must_use]
    pub fn revert_fields(&self) -> Option<PartialElement> {
        match self {
            Self::Idle => None,
            Self::Dragging { original, .. } => Some(PartialElement::position(original.x, original.y)),
            Self::Resizing { original, .. } => Some(original.clone()),
        }
    }
}
