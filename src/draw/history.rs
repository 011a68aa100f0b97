//! Committed/redoable stroke stacks implementing linear undo/redo.

use super::stroke::Stroke;

/// Stroke history owned by a single drawing surface.
///
/// `committed` is in draw order (first = bottom layer). `redoable` holds
/// undone strokes with the most recently undone last. Both stacks only change
/// at their tails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    committed: Vec<Stroke>,
    redoable: Vec<Stroke>,
}

impl History {
    /// Creates an empty history.
    pub const fn new() -> Self {
        Self {
            committed: Vec::new(),
            redoable: Vec::new(),
        }
    }

    /// Appends a finished stroke. Any pending redo entries are dropped.
    pub(crate) fn commit(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
        self.redoable.clear();
    }

    /// Moves the newest committed stroke onto the redo stack.
    ///
    /// Returns `false` when there is nothing to undo.
    pub(crate) fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(stroke) => {
                self.redoable.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone stroke back onto the committed stack.
    ///
    /// Returns `false` when there is nothing to redo.
    pub(crate) fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(stroke) => {
                self.committed.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks.
    pub(crate) fn clear(&mut self) {
        self.committed.clear();
        self.redoable.clear();
    }

    /// Committed strokes in draw order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes, most recently undone last.
    pub fn redoable(&self) -> &[Stroke] {
        &self.redoable
    }

    /// Committed stroke at `index` (0 = oldest).
    pub fn stroke(&self, index: usize) -> Option<&Stroke> {
        self.committed.get(index)
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// True when neither stack holds a stroke, as after [`DrawingSurface::clear`].
    ///
    /// [`DrawingSurface::clear`]: super::DrawingSurface::clear
    pub fn is_cleared(&self) -> bool {
        self.committed.is_empty() && self.redoable.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }
}
