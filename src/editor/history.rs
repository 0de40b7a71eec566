use std::collections::VecDeque;

use super::Document;

/// Maximum number of snapshots kept on each stack.
pub const HISTORY_LIMIT: usize = 100;

/// Undo/redo stacks of whole-document snapshots.
///
/// Each discrete edit calls [`History::snapshot`] once before mutating.
/// When a stack exceeds [`HISTORY_LIMIT`] the oldest entry is dropped.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Document>,
    redo: VecDeque<Document>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `doc` as the state to return to, and forget any redo states.
    pub fn snapshot(&mut self, doc: &Document) {
        push_bounded(&mut self.undo, doc.clone());
        self.redo.clear();
    }

    /// Restore the most recent snapshot into `doc`.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        push_bounded(&mut self.redo, std::mem::replace(doc, previous));
        true
    }

    /// Re-apply the most recently undone state into `doc`.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        let Some(next) = self.redo.pop_back() else {
            return false;
        };
        push_bounded(&mut self.undo, std::mem::replace(doc, next));
        true
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

fn push_bounded(stack: &mut VecDeque<Document>, doc: Document) {
    stack.push_back(doc);
    if stack.len() > HISTORY_LIMIT {
        stack.pop_front();
        tracing::trace!(limit = HISTORY_LIMIT, "evicted oldest history entry");
    }
}
