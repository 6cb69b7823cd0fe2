//! EditorSession: the undo/redo engine
//!
//! Owns the content buffer, the undo and redo stacks, and the history logs.
//! All mutation goes through [`EditorSession::append`],
//! [`EditorSession::undo`] and [`EditorSession::redo`].
//!
//! # Invariants
//!
//! 1. Appending a new word clears the undo stack, the redo stack and the redo
//!    log. The undo log is never cleared.
//! 2. Undo and redo move exactly one word per call, strict LIFO.
//! 3. Redo re-appends without the clearing side effects of (1), so older
//!    undone words stay redoable.
//! 4. The redo stack is a record of redone words; it never feeds back into
//!    the undo stack.
//!
//! ```text
//! append(x)  buffer [x]   undo []   redo []
//! undo       buffer []    undo [x]  redo []
//! redo       buffer [x]   undo []   redo [x]
//! append(y)  buffer [x y] undo []   redo []
//! ```

use crate::core::buffer::{ContentBuffer, Word};
use crate::core::container::{Container, Stack};
use crate::core::history::{HistoryAction, HistoryLog, HistorySnapshot};

/// Default bound on the undo stack
pub const DEFAULT_MAX_UNDO_DEPTH: usize = 10_000;

/// Result of an undo or redo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The word taken off the end of the buffer
    Undone(Word),
    /// The word put back at the end of the buffer
    Redone(Word),
    NothingToUndo,
    NothingToRedo,
}

/// Editing state for one session
#[derive(Debug, Clone)]
pub struct EditorSession {
    buffer: ContentBuffer,
    undo_stack: Stack<Word>,
    redo_stack: Stack<Word>,
    history: HistoryLog,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with the default undo depth
    pub fn new() -> Self {
        Self::with_max_undo_depth(DEFAULT_MAX_UNDO_DEPTH)
    }

    /// Create a session whose undo stack keeps at most `depth` words
    /// (0 = unbounded). The redo stack shares the bound.
    pub fn with_max_undo_depth(depth: usize) -> Self {
        Self {
            buffer: ContentBuffer::new(),
            undo_stack: Stack::bounded(depth),
            redo_stack: Stack::bounded(depth),
            history: HistoryLog::new(),
        }
    }

    /// Append a new word, foreclosing any pending redo
    pub fn append(&mut self, word: Word) {
        tracing::debug!(word = %word, "append");
        self.buffer.append(word);
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.history.clear_redo();
    }

    /// Take the last word off the buffer
    pub fn undo(&mut self) -> EditOutcome {
        // Empty buffer is reported, not an error
        let word = match self.buffer.remove_last() {
            Ok(word) => word,
            Err(_) => {
                tracing::debug!("nothing to undo");
                return EditOutcome::NothingToUndo;
            }
        };

        self.history.record(HistoryAction::Undo, &word);
        self.undo_stack.push(word.clone());
        tracing::debug!(word = %word, undo_depth = self.undo_stack.len(), "undo");
        EditOutcome::Undone(word)
    }

    /// Put the most recently undone word back
    pub fn redo(&mut self) -> EditOutcome {
        let word = match self.undo_stack.pop() {
            Ok(word) => word,
            Err(_) => {
                tracing::debug!("nothing to redo");
                return EditOutcome::NothingToRedo;
            }
        };

        // Restorative append: no clearing side effects
        self.buffer.append(word.clone());
        self.history.record(HistoryAction::Redo, &word);
        self.redo_stack.push(word.clone());
        tracing::debug!(word = %word, undo_depth = self.undo_stack.len(), "redo");
        EditOutcome::Redone(word)
    }

    /// Oldest-first copy of both history logs
    pub fn history(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    pub fn buffer(&self) -> &ContentBuffer {
        &self.buffer
    }

    /// Words that `redo` can restore, bottom to top
    pub fn undo_stack(&self) -> &Stack<Word> {
        &self.undo_stack
    }

    /// Words restored by `redo`, bottom to top
    pub fn redo_stack(&self) -> &Stack<Word> {
        &self.redo_stack
    }

    pub fn word_count(&self) -> usize {
        self.buffer.len()
    }
}
