//! ContentBuffer: the ordered words that make up the document
//!
//! Words are only ever added at the end or taken off the end; there are no
//! mid-sequence edits. Rendering joins words with single spaces.

use std::fmt;

use crate::error::EmptyError;

/// A single whitespace-free, non-empty token. The atomic unit of editing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Build a word from a token.
    ///
    /// Returns `None` if the token is empty or contains whitespace, which
    /// cannot happen for tokens produced by `str::split_whitespace`.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of words representing the current document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffer {
    words: Vec<Word>,
}

impl ContentBuffer {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Push a word onto the end of the document
    pub fn append(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Pop the last word off the document
    pub fn remove_last(&mut self) -> Result<Word, EmptyError> {
        self.words.pop().ok_or(EmptyError::Buffer)
    }

    /// Number of words currently in the document
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Read-only view of the words, first to last
    pub fn snapshot(&self) -> &[Word] {
        &self.words
    }
}

impl fmt::Display for ContentBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words.iter();
        if let Some(first) = words.next() {
            write!(f, "{}", first)?;
            for word in words {
                write!(f, " {}", word)?;
            }
        }
        Ok(())
    }
}
