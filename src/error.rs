//! Error types shared by the engine and the session driver.
//!
//! Empty-container errors are raised by the primitives in
//! [`crate::core::container`] and [`crate::core::buffer`]; the engine checks
//! emptiness before touching them, so they never surface from undo/redo.
//! [`SessionError`] covers the I/O boundary: reading tokens, rendering, and
//! the final save.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when the output file cannot be opened or written.
pub const EXIT_SAVE_FAILED: u8 = 1;

/// Exit status for command-line usage errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit status when the terminal itself cannot be written.
pub const EXIT_IO_FAILED: u8 = 3;

/// Attempted to take an element out of an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyError {
    #[error("buffer is empty")]
    Buffer,
    #[error("stack is empty")]
    Stack,
    #[error("queue is empty")]
    Queue,
}

/// Failures at the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The destination could not be opened or placed for writing.
    #[error("failed to open '{}' for writing: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or syncing the destination failed after it was opened.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination is not a regular file location.
    #[error("refusing to save to '{}': {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: &'static str },

    /// Reading the next line of input failed (distinct from end of input).
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::Input(_) | SessionError::Output(_) => EXIT_IO_FAILED,
            _ => EXIT_SAVE_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_messages() {
        assert_eq!(EmptyError::Buffer.to_string(), "buffer is empty");
        assert_eq!(EmptyError::Stack.to_string(), "stack is empty");
        assert_eq!(EmptyError::Queue.to_string(), "queue is empty");
    }

    #[test]
    fn test_file_open_message_names_path() {
        let err = SessionError::FileOpen {
            path: PathBuf::from("/nope/out.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/out.txt"));
        assert!(msg.contains("missing"));
        assert_eq!(err.exit_code(), EXIT_SAVE_FAILED);
    }
}
