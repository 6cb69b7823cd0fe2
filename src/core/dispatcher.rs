use std::collections::HashMap;

use crate::core::buffer::Word;
use crate::core::commands::{self, CommandRegistry};
use crate::core::history::HistorySnapshot;
use crate::core::session::{EditOutcome, EditorSession};

/// Result of command dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// Token was not a command and was appended as a word
    Appended(Word),
    /// Last word removed
    Undone(Word),
    /// Last undone word restored
    Redone(Word),
    NothingToUndo,
    NothingToRedo,
    /// Snapshot of both history logs
    History(HistorySnapshot),
    /// Exit requested
    Exit,
    /// Token bound to a command that is not registered
    NotHandled,
}

impl From<EditOutcome> for DispatchResult {
    fn from(outcome: EditOutcome) -> Self {
        match outcome {
            EditOutcome::Undone(word) => DispatchResult::Undone(word),
            EditOutcome::Redone(word) => DispatchResult::Redone(word),
            EditOutcome::NothingToUndo => DispatchResult::NothingToUndo,
            EditOutcome::NothingToRedo => DispatchResult::NothingToRedo,
        }
    }
}

/// Maps input tokens to commands or word appends
///
/// Tokens found in `bindings` run the bound command from the registry.
/// Every other token is appended to the buffer as a word.
pub struct Dispatcher {
    registry: CommandRegistry,
    bindings: HashMap<String, String>,
}

impl Dispatcher {
    /// Create a dispatcher over the built-in commands
    pub fn new(bindings: HashMap<String, String>) -> Self {
        Self {
            registry: commands::register_all(),
            bindings,
        }
    }

    /// Dispatch one whitespace-free token against the session
    pub fn dispatch(&self, session: &mut EditorSession, token: &str) -> DispatchResult {
        if let Some(command_name) = self.bindings.get(token) {
            if let Some(command) = self.registry.get(command_name) {
                return command.execute(session);
            }
            tracing::warn!(token, command = %command_name, "command not found in registry");
            return DispatchResult::NotHandled;
        }

        match Word::new(token) {
            Some(word) => {
                session.append(word.clone());
                DispatchResult::Appended(word)
            }
            // Callers split on whitespace, so this only guards direct misuse
            None => DispatchResult::NotHandled,
        }
    }
}
