//! Undo/Redo audit logs
//!
//! Two append-only FIFO logs of human-readable entries, one per action kind.
//! They are for display only and are never consulted to restore state.

use crate::core::buffer::Word;
use crate::core::container::{Container, Queue};

/// Which engine action produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl HistoryAction {
    pub fn label(self) -> &'static str {
        match self {
            HistoryAction::Undo => "Undo",
            HistoryAction::Redo => "Redo",
        }
    }
}

/// Format a log entry, e.g. `Undo: beta`
pub fn describe(action: HistoryAction, word: &Word) -> String {
    format!("{}: {}", action.label(), word)
}

/// Oldest-first copy of both logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub undo: Vec<String>,
    pub redo: Vec<String>,
}

/// The pair of audit logs owned by an editor session
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    undo: Queue<String>,
    redo: Queue<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful action
    pub fn record(&mut self, action: HistoryAction, word: &Word) {
        let entry = describe(action, word);
        match action {
            HistoryAction::Undo => self.undo.push(entry),
            HistoryAction::Redo => self.redo.push(entry),
        }
    }

    /// Forget the redo log. The undo log is never cleared.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            undo: self.undo.iter().cloned().collect(),
            redo: self.redo.iter().cloned().collect(),
        }
    }
}
