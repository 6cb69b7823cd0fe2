//! Command implementations for wedit
//!
//! - **undo**: Undo/redo of the last word
//! - **history**: Audit log display
//! - **control**: Session control (exit)
//!
//! All commands implement the [`Command`](crate::core::command::Command) trait.

/// Session control
pub mod control;
/// History display
pub mod history;
/// Undo/redo operations
pub mod undo;

use std::collections::HashMap;

use crate::core::command::Command;

/// Named commands available to the dispatcher
pub type CommandRegistry = HashMap<String, Box<dyn Command>>;

/// Build a registry holding every built-in command
pub fn register_all() -> CommandRegistry {
    use self::control::*;
    use self::history::*;
    use self::undo::*;

    let mut registry: CommandRegistry = HashMap::new();

    // Undo/Redo commands
    registry.insert("undo".to_string(), Box::new(Undo));
    registry.insert("redo".to_string(), Box::new(Redo));

    // History
    registry.insert("history".to_string(), Box::new(ShowHistory));

    // Control commands
    registry.insert("exit".to_string(), Box::new(Exit));

    registry
}
