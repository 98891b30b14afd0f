//! Linear snapshot history for undo/redo.
//!
//! DESIGN
//! ======
//! History keeps an ordered list of deep-copied states and a pointer. The
//! entry at the pointer always stands for the live state: `save_snapshot`
//! refreshes it with the pre-mutation state before appending, and `undo`
//! refreshes it with the live state before stepping back, so `redo` returns
//! to exactly what was undone. Entries below the pointer are never touched.
//!
//! A new snapshot discards everything after the pointer. An optional depth
//! limit evicts the oldest entries once the list grows past it.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Snapshot history over a cloneable state.
#[derive(Debug, Clone)]
pub struct History<T: Clone> {
    entries: Vec<T>,
    pointer: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Start a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { entries: vec![initial], pointer: 0, limit: None }
    }

    /// Start a history that keeps at most `limit` entries. A limit below 2
    /// would make undo impossible and is raised to 2.
    #[must_use]
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self { entries: vec![initial], pointer: 0, limit: Some(limit.max(2)) }
    }

    /// Record `current` (the state about to be mutated) as an undo point.
    pub fn save_snapshot(&mut self, current: &T) {
        self.entries.truncate(self.pointer + 1);
        self.entries[self.pointer] = current.clone();
        self.entries.push(current.clone());
        self.pointer = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
                self.pointer -= excess;
            }
        }
        tracing::trace!(pointer = self.pointer, len = self.entries.len(), "history snapshot saved");
    }

    /// Step back. `live` is the current state, kept so that `redo` can return
    /// to it. Returns the state to restore, or `None` if nothing to undo.
    pub fn undo(&mut self, live: &T) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        self.entries[self.pointer] = live.clone();
        self.pointer -= 1;
        Some(self.entries[self.pointer].clone())
    }

    /// Step forward. Returns the state to restore, or `None` if nothing to redo.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        self.pointer += 1;
        Some(self.entries[self.pointer].clone())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Forget all history and start over from `state`.
    pub fn reset(&mut self, state: T) {
        self.entries.clear();
        self.entries.push(state);
        self.pointer = 0;
    }

    /// Current pointer position.
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
