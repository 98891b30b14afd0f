//! Selection and inline-edit focus.
//!
//! At most one element is selected at a time. An element in inline-edit mode
//! is always the selected one; edit mode keeps the text as it was when
//! editing began so a cancel can put it back.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::{ElementId, ElementKind};

/// An in-progress inline text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Content before the edit began.
    pub original: String,
}

/// Selection state for the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ElementId>,
    editing: Option<EditSession>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected element, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Select `id`, replacing any previous selection. Returns `true` if the
    /// selection changed. Selecting a different element ends any edit.
    pub fn select(&mut self, id: ElementId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.editing = None;
        self.selected = Some(id);
        true
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.editing = None;
        self.selected.take().is_some()
    }

    /// Clear the selection only if it is `id`.
    pub fn forget(&mut self, id: &ElementId) -> bool {
        if self.is_selected(id) { self.clear() } else { false }
    }

    /// The active edit session, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    #[must_use]
    pub fn is_editing(&self, id: &ElementId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == *id)
    }

    /// Enter edit mode on `id`. Only inline-editable kinds qualify; the
    /// element becomes selected. Returns `true` if editing started.
    pub fn begin_edit(&mut self, id: ElementId, kind: ElementKind, original: String) -> bool {
        if !kind.is_inline_editable() {
            return false;
        }
        self.selected = Some(id);
        self.editing = Some(EditSession { id, kind, original });
        true
    }

    /// Leave edit mode, returning the session that ended.
    pub fn end_edit(&mut self) -> Option<EditSession> {
        self.editing.take()
    }
}
