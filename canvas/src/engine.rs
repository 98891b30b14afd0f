//! Engine facade: the scene store plus the interaction state around it.
//!
//! The host feeds raw pointer and key events in screen space and receives a
//! list of [`Action`]s describing what changed. Everything here is
//! synchronous and headless: canvas placement and element sizes the renderer
//! measured are pushed in by the host, never queried.
//!
//! Gestures (drag, resize, inline edit) update the element live without
//! history and commit once when they end, so each gesture is exactly one
//! undo step. Escape reverts a gesture without touching history.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::HashMap;

use crate::content::CompositeContent;
use crate::doc::{Element, ElementId, ElementKind, LinkTarget, Page, PageId, PartialElement, Position, format_px};
use crate::geometry::{CanvasFrame, DragBounds, Point, Size};
use crate::hit::{Hit, HitPart, element_rect, hit_test};
use crate::input::{Button, InputState, Key, Modifiers};
use crate::selection::{EditSession, Selection};
use crate::store::SceneStore;

/// Actions returned from engine calls for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementDeleted { id: ElementId },
    SelectionChanged(Option<ElementId>),
    /// Inline editing began; the host should focus an editor holding `text`.
    EditTextRequested { id: ElementId, text: String },
    /// The page list or the current page changed.
    PagesChanged { current_page_id: PageId },
    SetCursor(String),
    HistoryChanged { can_undo: bool, can_redo: bool },
    RenderNeeded,
}

/// Headless editing engine for one project.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    store: SceneStore,
    ui: Selection,
    input: InputState,
    frame: CanvasFrame,
    bounds: DragBounds,
    measured: HashMap<ElementId, Size>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store, e.g. one rebuilt from a saved project.
    #[must_use]
    pub fn from_store(store: SceneStore) -> Self {
        Self { store, ..Self::default() }
    }

    #[must_use]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> SceneStore {
        self.store
    }

    // --- Host inputs ---

    /// Where the canvas sits on screen.
    pub fn set_canvas_frame(&mut self, frame: CanvasFrame) {
        self.frame = frame;
    }

    /// Clamp policy for dragged elements.
    pub fn set_drag_bounds(&mut self, bounds: DragBounds) {
        self.bounds = bounds;
    }

    /// Rendered size of an element, used when its styles carry no explicit size.
    pub fn set_measured_size(&mut self, id: ElementId, size: Size) {
        self.measured.insert(id, size);
    }

    // --- Element operations ---

    /// Add an element of `kind` and select it.
    pub fn add_element(&mut self, kind: ElementKind) -> Vec<Action> {
        let mut actions = self.settle();
        let id = self.store.add_element(kind);
        if let Some(element) = self.store.element(&id) {
            actions.push(Action::ElementCreated(element.clone()));
        }
        self.select(id, &mut actions);
        self.finish_tracked(&mut actions);
        actions
    }

    /// Apply a partial update, as a properties panel would.
    pub fn update_element(&mut self, id: &ElementId, fields: &PartialElement) -> Vec<Action> {
        let mut actions = self.settle();
        if self.store.update_element(id, fields) {
            actions.push(Action::ElementUpdated { id: *id, fields: fields.clone() });
            self.finish_tracked(&mut actions);
        }
        actions
    }

    pub fn delete_element(&mut self, id: &ElementId) -> Vec<Action> {
        let mut actions = self.settle();
        if self.store.delete_element(id) {
            self.measured.remove(id);
            if self.ui.forget(id) {
                actions.push(Action::SelectionChanged(None));
            }
            actions.push(Action::ElementDeleted { id: *id });
            self.finish_tracked(&mut actions);
        }
        actions
    }

    /// Duplicate an element and select the copy.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Vec<Action> {
        let mut actions = self.settle();
        let Some(new_id) = self.store.duplicate_element(id) else {
            return actions;
        };
        if let Some(element) = self.store.element(&new_id) {
            actions.push(Action::ElementCreated(element.clone()));
        }
        self.select(new_id, &mut actions);
        self.finish_tracked(&mut actions);
        actions
    }

    /// Replace the records of a composite element. The payload kind must
    /// match the element kind.
    pub fn set_composite(&mut self, id: &ElementId, payload: &CompositeContent) -> Vec<Action> {
        if self.store.element(id).is_none_or(|element| element.kind != payload.kind()) {
            return Vec::new();
        }
        self.update_element(id, &PartialElement::content(payload.encode()))
    }

    /// Set or clear the navigation target of an element.
    ///
    /// Page targets must name another existing page; URL targets are trimmed
    /// and must not be blank. Invalid targets are ignored.
    pub fn set_link(&mut self, id: &ElementId, target: Option<LinkTarget>) -> Vec<Action> {
        let target = match target {
            None => None,
            Some(LinkTarget::Page(page_id)) => {
                if page_id == self.store.current_page_id() || self.store.page(&page_id).is_none() {
                    return Vec::new();
                }
                Some(LinkTarget::Page(page_id))
            }
            Some(LinkTarget::Url(url)) => {
                let url = url.trim();
                if url.is_empty() {
                    return Vec::new();
                }
                Some(LinkTarget::Url(url.to_owned()))
            }
        };
        self.update_element(id, &PartialElement::link(target))
    }

    // --- Page operations ---

    pub fn add_page(&mut self, name: Option<&str>) -> Vec<Action> {
        let mut actions = self.settle();
        self.store.add_page(name);
        self.finish_pages(&mut actions);
        actions
    }

    pub fn delete_page(&mut self, id: &PageId) -> Vec<Action> {
        let mut actions = self.settle();
        if self.store.delete_page(id) {
            self.prune_measured();
            self.drop_stale_selection(&mut actions);
            self.finish_pages(&mut actions);
        }
        actions
    }

    pub fn rename_page(&mut self, id: &PageId, name: &str) -> Vec<Action> {
        let mut actions = self.settle();
        if self.store.rename_page(id, name) {
            self.finish_pages(&mut actions);
        }
        actions
    }

    /// Switch pages. Clears the selection; not an undo step.
    pub fn set_current_page(&mut self, id: &PageId) -> Vec<Action> {
        if self.store.current_page_id() == *id {
            return Vec::new();
        }
        let mut actions = self.settle();
        if self.store.set_current_page(id) {
            if self.ui.clear() {
                actions.push(Action::SelectionChanged(None));
            }
            actions.push(Action::PagesChanged { current_page_id: *id });
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- History ---

    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = self.abort();
        if self.store.undo() {
            self.finish_restore(&mut actions);
        }
        actions
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let mut actions = self.abort();
        if self.store.redo() {
            self.finish_restore(&mut actions);
        }
        actions
    }

    // --- Inline editing ---

    /// Live text from the host editor. Not an undo step until committed.
    pub fn set_edit_text(&mut self, text: &str) -> Vec<Action> {
        let Some(id) = self.ui.editing().map(|session| session.id) else {
            return Vec::new();
        };
        self.apply_live(id, PartialElement::content(text))
    }

    /// Leave edit mode keeping the edited text as one undo step.
    pub fn commit_edit(&mut self) -> Vec<Action> {
        let Some(session) = self.ui.end_edit() else {
            return Vec::new();
        };
        let Some(text) = self.store.element(&session.id).map(|el| el.content.clone()) else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        self.commit(session.id, &PartialElement::content(session.original), PartialElement::content(text), &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Leave edit mode restoring the text from before the edit.
    pub fn cancel_edit(&mut self) -> Vec<Action> {
        let Some(session) = self.ui.end_edit() else {
            return Vec::new();
        };
        tracing::debug!(id = %session.id, "edit cancelled");
        self.apply_live(session.id, PartialElement::content(session.original))
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let pt = self.frame.screen_to_canvas(screen_pt);
        let mut hit = self.hit(pt);
        let mut actions = Vec::new();

        if let Some(session) = self.ui.editing() {
            if hit == Some(Hit { element_id: session.id, part: HitPart::Body }) {
                return actions;
            }
            actions.extend(self.commit_edit());
            hit = self.hit(pt);
        }

        match hit {
            None => {
                if self.ui.clear() {
                    actions.push(Action::SelectionChanged(None));
                }
                actions.push(Action::RenderNeeded);
            }
            Some(Hit { element_id, part: HitPart::ResizeHandle(direction) }) => {
                let Some(element) = self.store.element(&element_id) else {
                    return actions;
                };
                let rect = element_rect(element, &self.measured);
                let original = element.capture(&PartialElement::style(direction.style_key(), ""));
                self.input = InputState::Resizing {
                    id: element_id,
                    direction,
                    start: pt,
                    start_size: Size::new(rect.width, rect.height),
                    original,
                    last: None,
                };
                tracing::debug!(id = %element_id, ?direction, "resize started");
                actions.push(Action::SetCursor(direction.cursor().into()));
            }
            Some(Hit { element_id, part: HitPart::Body }) => {
                let Some(position) = self.store.element(&element_id).map(|el| el.position) else {
                    return actions;
                };
                self.select(element_id, &mut actions);
                self.input = InputState::Dragging {
                    id: element_id,
                    offset: pt.sub(Point::new(position.x, position.y)),
                    original: position,
                    last: None,
                };
                tracing::debug!(id = %element_id, "drag started");
                actions.push(Action::SetCursor("grabbing".into()));
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let pt = self.frame.screen_to_canvas(screen_pt);
        if self.input.is_idle() {
            let cursor = self.hit(pt).map_or("default", |hit| hit.part.cursor());
            return vec![Action::SetCursor(cursor.into())];
        }
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, offset, last, .. } => {
                let target = self.bounds.clamp(pt.sub(*offset));
                let position = Position::new(target.x, target.y);
                if *last == Some(position) {
                    return Vec::new();
                }
                *last = Some(position);
                let id = *id;
                self.apply_live(id, PartialElement { position: Some(position), ..Default::default() })
            }
            InputState::Resizing { id, direction, start, start_size, last, .. } => {
                let value = direction.resize(*start_size, pt.sub(*start));
                if last.is_some_and(|prev| (prev - value).abs() < f64::EPSILON) {
                    return Vec::new();
                }
                *last = Some(value);
                let (id, key) = (*id, direction.style_key());
                self.apply_live(id, PartialElement::style(key, format_px(value)))
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let mut actions = Vec::new();
        match std::mem::take(&mut self.input) {
            InputState::Idle => return actions,
            InputState::Dragging { id, original, last, .. } => {
                actions.push(Action::SetCursor("grab".into()));
                if let Some(position) = last {
                    let fields = PartialElement { position: Some(position), ..Default::default() };
                    self.commit(id, &PartialElement::position(original.x, original.y), fields, &mut actions);
                }
            }
            InputState::Resizing { id, direction, original, last, .. } => {
                actions.push(Action::SetCursor(direction.cursor().into()));
                if let Some(value) = last {
                    let fields = PartialElement::style(direction.style_key(), format_px(value));
                    self.commit(id, &original, fields, &mut actions);
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Enter inline edit mode on an editable element under the pointer.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let pt = self.frame.screen_to_canvas(screen_pt);
        let Some(Hit { element_id, part: HitPart::Body }) = self.hit(pt) else {
            return Vec::new();
        };
        if self.ui.is_editing(&element_id) {
            return Vec::new();
        }
        let mut actions = self.settle();
        let Some(element) = self.store.element(&element_id) else {
            return actions;
        };
        if !element.kind.is_inline_editable() {
            return actions;
        }
        let (kind, text) = (element.kind, element.content.clone());
        self.select(element_id, &mut actions);
        self.ui.begin_edit(element_id, kind, text.clone());
        tracing::debug!(id = %element_id, "edit started");
        actions.push(Action::EditTextRequested { id: element_id, text });
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is("Escape") {
            return self.cancel();
        }
        if key.is("Enter") {
            let single_line = self.ui.editing().is_some_and(|session| !session.kind.is_multiline());
            return if single_line { self.commit_edit() } else { Vec::new() };
        }
        if modifiers.command() {
            if key.is("z") {
                return if modifiers.shift { self.redo() } else { self.undo() };
            }
            if key.is("y") {
                return self.redo();
            }
            if key.is("d") {
                return match self.idle_selection() {
                    Some(id) => self.duplicate_element(&id),
                    None => Vec::new(),
                };
            }
            return Vec::new();
        }
        if key.is("Delete") || key.is("Backspace") {
            return match self.idle_selection() {
                Some(id) => self.delete_element(&id),
                None => Vec::new(),
            };
        }
        Vec::new()
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected()
    }

    #[must_use]
    pub fn is_editing(&self, id: &ElementId) -> bool {
        self.ui.is_editing(id)
    }

    #[must_use]
    pub fn editing(&self) -> Option<&EditSession> {
        self.ui.editing()
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Elements of the current page in draw order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.store.element(id)
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        self.store.pages()
    }

    #[must_use]
    pub fn current_page_id(&self) -> PageId {
        self.store.current_page_id()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    // --- Internals ---

    fn hit(&self, pt: Point) -> Option<Hit> {
        hit_test(pt, self.store.elements(), self.ui.selected(), &self.measured)
    }

    /// The selection, if nothing else is in progress.
    fn idle_selection(&self) -> Option<ElementId> {
        if !self.input.is_idle() || self.ui.editing().is_some() {
            return None;
        }
        self.ui.selected()
    }

    fn select(&mut self, id: ElementId, actions: &mut Vec<Action>) {
        if self.ui.select(id) {
            actions.push(Action::SelectionChanged(Some(id)));
        }
    }

    fn drop_stale_selection(&mut self, actions: &mut Vec<Action>) {
        if let Some(id) = self.ui.selected() {
            if self.store.element(&id).is_none() {
                self.ui.clear();
                actions.push(Action::SelectionChanged(None));
            }
        }
    }

    /// Forget measured sizes of elements that no longer exist on any page.
    fn prune_measured(&mut self) {
        let pages = self.store.pages();
        self.measured.retain(|id, _| pages.iter().any(|page| page.element(id).is_some()));
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.store.can_undo(), can_redo: self.store.can_redo() }
    }

    fn finish_tracked(&self, actions: &mut Vec<Action>) {
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
    }

    fn finish_pages(&self, actions: &mut Vec<Action>) {
        actions.push(Action::PagesChanged { current_page_id: self.store.current_page_id() });
        self.finish_tracked(actions);
    }

    fn finish_restore(&mut self, actions: &mut Vec<Action>) {
        self.prune_measured();
        self.drop_stale_selection(actions);
        actions.push(Action::PagesChanged { current_page_id: self.store.current_page_id() });
        self.finish_tracked(actions);
    }

    /// Apply a gesture frame without history. A stale target ends the gesture.
    fn apply_live(&mut self, id: ElementId, fields: PartialElement) -> Vec<Action> {
        if !self.store.update_element_untracked(&id, &fields) {
            self.input = InputState::Idle;
            return Vec::new();
        }
        vec![Action::ElementUpdated { id, fields }, Action::RenderNeeded]
    }

    fn commit(&mut self, id: ElementId, original: &PartialElement, fields: PartialElement, actions: &mut Vec<Action>) {
        if self.store.commit_gesture(&id, original, &fields) {
            tracing::debug!(%id, "gesture committed");
            actions.push(Action::ElementUpdated { id, fields });
            actions.push(self.history_changed());
        }
    }

    /// Revert the active gesture, if any.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let (Some(id), Some(fields)) = (state.active_id(), state.revert_fields()) else {
            return Vec::new();
        };
        tracing::debug!(%id, "gesture cancelled");
        let mut actions = self.apply_live(id, fields);
        actions.push(Action::SetCursor("default".into()));
        actions
    }

    /// Escape: cancel the gesture, or else the edit.
    fn cancel(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            return self.cancel_gesture();
        }
        self.cancel_edit()
    }

    /// Before a programmatic mutation: revert the gesture, keep the edit.
    fn settle(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        actions.extend(self.commit_edit());
        actions
    }

    /// Before undo/redo: revert both the gesture and the edit.
    fn abort(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        actions.extend(self.cancel_edit());
        actions
    }
}
