//! Scene store: the pages of a project and every tracked mutation on them.
//!
//! DESIGN
//! ======
//! The store owns `Vec<Page>` plus the current-page cursor. Element
//! operations always target the current page. Every mutating operation saves
//! a history snapshot of the pre-mutation pages before it applies, so undo
//! restores the state immediately prior to that operation.
//!
//! Stale ids are no-ops: they return `false`/`None` and push no snapshot.
//! The store never lets the page list become empty and keeps the cursor on an
//! existing page, including after undo/redo restores an older page list.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::consts::{DUPLICATE_OFFSET, INITIAL_X, INITIAL_Y};
use crate::defaults::defaults_for;
use crate::doc::{Element, ElementId, ElementKind, Page, PageId, PartialElement, Position};
use crate::history::History;

/// Name given to the first page of a new project.
pub const DEFAULT_PAGE_NAME: &str = "Home";

/// Pages, cursor, and undo history.
#[derive(Debug, Clone)]
pub struct SceneStore {
    pages: Vec<Page>,
    current_page_id: PageId,
    history: History<Vec<Page>>,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStore {
    /// A store with a single empty page and unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pages(Vec::new(), None, None)
    }

    /// Build a store from existing pages.
    ///
    /// An empty page list gets a default page. A missing or unknown cursor
    /// falls back to the first page. `history_limit` caps the number of
    /// stored snapshots (`None` = unbounded).
    #[must_use]
    pub fn from_pages(mut pages: Vec<Page>, current_page_id: Option<PageId>, history_limit: Option<usize>) -> Self {
        if pages.is_empty() {
            pages.push(Page::new(DEFAULT_PAGE_NAME));
        }
        let first = pages[0].id;
        let current_page_id = current_page_id.filter(|id| pages.iter().any(|p| p.id == *id)).unwrap_or(first);
        let history = match history_limit {
            Some(limit) => History::with_limit(pages.clone(), limit),
            None => History::new(pages.clone()),
        };
        Self { pages, current_page_id, history }
    }

    // --- Queries ---

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn current_page_id(&self) -> PageId {
        self.current_page_id
    }

    #[must_use]
    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_index()]
    }

    /// Elements of the current page in draw order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.current_page().elements
    }

    /// Look up an element on the current page.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.current_page().element(id)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots currently held by the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn current_index(&self) -> usize {
        self.pages.iter().position(|p| p.id == self.current_page_id).unwrap_or(0)
    }

    fn current_page_mut(&mut self) -> &mut Page {
        let index = self.current_index();
        &mut self.pages[index]
    }

    fn snapshot(&mut self) {
        self.history.save_snapshot(&self.pages);
    }

    // --- Element operations ---

    /// Add a new element of `kind` with its defaults at the initial position.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let defaults = defaults_for(kind);
        let element = Element {
            id: Uuid::new_v4(),
            kind,
            content: defaults.content,
            styles: defaults.styles,
            position: Position::new(INITIAL_X, INITIAL_Y),
            link_to: None,
        };
        let id = element.id;
        self.snapshot();
        self.current_page_mut().elements.push(element);
        tracing::debug!(%id, kind = kind.as_str(), "element added");
        id
    }

    /// Merge `partial` into the element `id`. Returns `false` if no such
    /// element exists on the current page. An update that changes nothing is
    /// accepted without recording history.
    pub fn update_element(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        if element.is_unchanged_by(partial) {
            return true;
        }
        self.snapshot();
        self.update_element_untracked(id, partial)
    }

    /// Apply `partial` without touching history. Used for the live frames of
    /// a gesture, which is committed once at the end.
    pub fn update_element_untracked(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.current_page_mut().element_mut(id) else {
            return false;
        };
        element.apply_partial(partial);
        tracing::trace!(%id, "element updated");
        true
    }

    /// Commit a gesture as a single history entry.
    ///
    /// `original` holds the pre-gesture values of the fields the gesture
    /// touched (see [`Element::capture`]). The element is put back to those
    /// values untracked, then `final_fields` is applied through the tracked
    /// path so the snapshot holds the true pre-gesture state.
    ///
    /// Returns `true` only when a history entry was recorded. A gesture that
    /// ends where it started leaves the element at `original` and records
    /// nothing.
    pub fn commit_gesture(&mut self, id: &ElementId, original: &PartialElement, final_fields: &PartialElement) -> bool {
        if !self.update_element_untracked(id, original) {
            return false;
        }
        if self.element(id).is_none_or(|element| element.is_unchanged_by(final_fields)) {
            return false;
        }
        self.snapshot();
        self.update_element_untracked(id, final_fields)
    }

    /// Remove the element `id`. Returns `false` if it does not exist.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        if self.element(id).is_none() {
            return false;
        }
        self.snapshot();
        self.current_page_mut().elements.retain(|el| el.id != *id);
        tracing::debug!(%id, "element deleted");
        true
    }

    /// Clone the element `id` with a fresh id, offset so the copy is visible.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let mut copy = self.element(id)?.clone();
        copy.id = Uuid::new_v4();
        copy.position = Position::new(copy.position.x + DUPLICATE_OFFSET, copy.position.y + DUPLICATE_OFFSET);
        let new_id = copy.id;
        self.snapshot();
        self.current_page_mut().elements.push(copy);
        tracing::debug!(source = %id, %new_id, "element duplicated");
        Some(new_id)
    }

    // --- Page operations ---

    /// Append a page. A blank name becomes `"Page N"`.
    pub fn add_page(&mut self, name: Option<&str>) -> PageId {
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_owned(),
            _ => format!("Page {}", self.pages.len() + 1),
        };
        let page = Page::new(name);
        let id = page.id;
        self.snapshot();
        self.pages.push(page);
        tracing::debug!(%id, "page added");
        id
    }

    /// Delete a page. Refused for the last remaining page. Deleting the
    /// current page moves the cursor to the first remaining page.
    pub fn delete_page(&mut self, id: &PageId) -> bool {
        if self.pages.len() <= 1 || self.page(id).is_none() {
            return false;
        }
        self.snapshot();
        self.pages.retain(|p| p.id != *id);
        if self.current_page_id == *id {
            self.current_page_id = self.pages[0].id;
        }
        tracing::debug!(%id, "page deleted");
        true
    }

    /// Rename a page. A blank name leaves the page unchanged.
    pub fn rename_page(&mut self, id: &PageId, name: &str) -> bool {
        let name = name.trim();
        let Some(page) = self.page(id) else {
            return false;
        };
        if name.is_empty() || page.name == name {
            return true;
        }
        self.snapshot();
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == *id) {
            page.name = name.to_owned();
        }
        true
    }

    /// Move the cursor to `id`. Not a history event.
    pub fn set_current_page(&mut self, id: &PageId) -> bool {
        if self.page(id).is_none() {
            return false;
        }
        self.current_page_id = *id;
        true
    }

    // --- History ---

    /// Restore the pages as they were before the last tracked operation.
    pub fn undo(&mut self) -> bool {
        let Some(pages) = self.history.undo(&self.pages) else {
            return false;
        };
        self.restore(pages);
        true
    }

    /// Re-apply the last undone operation.
    pub fn redo(&mut self) -> bool {
        let Some(pages) = self.history.redo() else {
            return false;
        };
        self.restore(pages);
        true
    }

    fn restore(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        if self.pages.is_empty() {
            self.pages.push(Page::new(DEFAULT_PAGE_NAME));
        }
        if self.page(&self.current_page_id).is_none() {
            self.current_page_id = self.pages[0].id;
        }
    }
}
