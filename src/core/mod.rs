//! This module constitutes the core, headless editing engine of wedit.
//! It holds the word buffer, the undo/redo stacks and history logs, and the
//! command dispatch that drives them. Nothing here touches the terminal or
//! the filesystem.

pub mod buffer;
pub mod command;
pub mod commands;
pub mod container;
pub mod dispatcher;
pub mod history;
pub mod session;
