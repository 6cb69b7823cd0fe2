//! Line-oriented rendering of session output
//!
//! Everything the user sees goes through [`Renderer`]: the banner, prompts,
//! one status line per command, the current text, and the history listing.
//! Colors are emitted with crossterm only when enabled, so piped output stays
//! plain.

use std::io::{self, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::config::Config;
use crate::core::buffer::ContentBuffer;
use crate::core::dispatcher::DispatchResult;
use crate::core::history::HistorySnapshot;

/// Writes session output to a terminal or any other sink
pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Greeting and command list
    pub fn banner(&mut self, config: &Config) -> io::Result<()> {
        writeln!(self.out, "Welcome to the Write-Only Text Editor")?;
        writeln!(self.out, "Start typing below.")?;

        let commands: Vec<String> = ["undo", "redo", "history", "exit"]
            .iter()
            .filter_map(|name| config.token_for(name))
            .map(|token| format!("'{}'", token))
            .collect();
        writeln!(self.out, "Commands: {}", commands.join(", "))?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Status line for a dispatched token, followed by the text when it changed
    pub fn result(&mut self, result: &DispatchResult, buffer: &ContentBuffer) -> io::Result<()> {
        match result {
            DispatchResult::Appended(word) => {
                self.status(Color::Green, &format!("Added: {}", word))?;
                self.text(buffer)?;
            }
            DispatchResult::Undone(word) => {
                self.status(Color::Yellow, &format!("Undid: {}", word))?;
                self.text(buffer)?;
            }
            DispatchResult::Redone(word) => {
                self.status(Color::Cyan, &format!("Redid: {}", word))?;
                self.text(buffer)?;
            }
            DispatchResult::NothingToUndo => self.status(Color::DarkGrey, "Nothing to undo.")?,
            DispatchResult::NothingToRedo => self.status(Color::DarkGrey, "Nothing to redo.")?,
            DispatchResult::History(snapshot) => self.history(snapshot)?,
            DispatchResult::Exit => {
                writeln!(self.out)?;
                self.status(Color::Blue, "Exit command received. Saving your work...")?;
            }
            DispatchResult::NotHandled => self.status(Color::Red, "Unknown command.")?,
        }
        self.out.flush()
    }

    fn text(&mut self, buffer: &ContentBuffer) -> io::Result<()> {
        writeln!(self.out, "Text: {}", buffer)
    }

    fn history(&mut self, snapshot: &HistorySnapshot) -> io::Result<()> {
        let sections = [
            ("Undo History:", &snapshot.undo),
            ("Redo History:", &snapshot.redo),
        ];
        for (title, entries) in sections {
            writeln!(self.out)?;
            writeln!(self.out, "{}", title)?;
            if entries.is_empty() {
                writeln!(self.out, "  (empty)")?;
            }
            for entry in entries {
                writeln!(self.out, "  {}", entry)?;
            }
        }
        writeln!(self.out)
    }

    /// Word count printed when the input loop ends
    pub fn summary(&mut self, word_count: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "You've written {} word(s).", word_count)?;
        self.out.flush()
    }

    pub fn save_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter filename to save: ")?;
        self.out.flush()
    }

    pub fn saved(&mut self, path: &Path) -> io::Result<()> {
        self.status(Color::Green, &format!("Saved to '{}'.", path.display()))?;
        self.out.flush()
    }

    /// Report a recoverable error without ending the session
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.status(Color::Red, message)?;
        self.out.flush()
    }

    fn status(&mut self, color: Color, message: &str) -> io::Result<()> {
        if self.color {
            queue!(
                self.out,
                SetForegroundColor(color),
                Print(message),
                ResetColor,
                Print("\n")
            )
        } else {
            writeln!(self.out, "{}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::Word;

    fn render(result: &DispatchResult, buffer: &ContentBuffer) -> String {
        let mut out: Vec<u8> = Vec::new();
        Renderer::new(&mut out, false).result(result, buffer).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_append_shows_text() {
        let mut buffer = ContentBuffer::new();
        let word = Word::new("alpha").unwrap();
        buffer.append(word.clone());
        let output = render(&DispatchResult::Appended(word), &buffer);
        assert_eq!(output, "Added: alpha\nText: alpha\n");
    }

    #[test]
    fn test_render_nothing_messages_differ() {
        let buffer = ContentBuffer::new();
        let undo = render(&DispatchResult::NothingToUndo, &buffer);
        let redo = render(&DispatchResult::NothingToRedo, &buffer);
        assert_eq!(undo, "Nothing to undo.\n");
        assert_eq!(redo, "Nothing to redo.\n");
    }

    #[test]
    fn test_render_history() {
        let snapshot = HistorySnapshot {
            undo: vec!["Undo: b".into()],
            redo: vec![],
        };
        let output = render(&DispatchResult::History(snapshot), &ContentBuffer::new());
        assert_eq!(
            output,
            "\nUndo History:\n  Undo: b\n\nRedo History:\n  (empty)\n\n"
        );
    }

    #[test]
    fn test_color_output_wraps_message() {
        let mut out: Vec<u8> = Vec::new();
        Renderer::new(&mut out, true)
            .result(&DispatchResult::NothingToUndo, &ContentBuffer::new())
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("\x1b["));
        assert!(output.contains("Nothing to undo."));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_banner_lists_bound_tokens() {
        let mut config = Config::default();
        crate::user_config::configure(&mut config);
        let mut out: Vec<u8> = Vec::new();
        Renderer::new(&mut out, false).banner(&config).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Commands: ':undo', ':redo', ':history', ':exit'"));
    }
}
