// wedit Configuration
// Edit this file to customize your editor, then rebuild.

use crate::config::{COLOR, Config, DEFAULT_FILENAME, MAX_UNDO_DEPTH, QUIET, VERBOSITY};
use crate::core::session::DEFAULT_MAX_UNDO_DEPTH;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Command tokens
    config.bind(":undo", "undo");
    config.bind(":redo", "redo");
    config.bind(":history", "history");
    config.bind(":exit", "exit");

    // Save step
    config.set(DEFAULT_FILENAME, "output.txt");

    // History
    config.set(MAX_UNDO_DEPTH, DEFAULT_MAX_UNDO_DEPTH as i64);

    // Display
    config.set(QUIET, false);
    config.set(COLOR, false);
    config.set(VERBOSITY, 0i64);
}
