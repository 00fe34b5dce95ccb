//! Lexicon module - prefix trie for dictionary membership
//!
//! Each node maps a single character to an exclusively owned child node and
//! carries a terminal flag. A path from the root spelling `s` exists iff some
//! inserted word starts with `s`; the terminal flag at its end is set iff `s`
//! itself was inserted.
//!
//! The lexicon is built once (from a word list) before play starts and is only
//! read afterwards. Callers share it by reference.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::SEED_WORDS;

/// Errors produced while loading a word list from disk.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {path} contains no words")]
    Empty { path: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    children: HashMap<char, Node>,
    is_word: bool,
}

/// Prefix trie over case-normalized words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    root: Node,
    len: usize,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from already-normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Build a lexicon from newline-separated text.
    ///
    /// A leading byte order mark is ignored. Every line is trimmed and
    /// lowercased; blank lines are skipped.
    pub fn from_word_list(text: &str) -> Self {
        let mut lexicon = Self::new();
        for line in text.trim_start_matches('\u{feff}').lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            lexicon.insert(&word.to_lowercase());
        }
        lexicon
    }

    /// Load a newline-separated word list from disk.
    ///
    /// A file that yields no words is reported as [`LexiconError::Empty`] so the
    /// caller can fall back to [`Lexicon::seed`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::from_word_list(&text);
        if lexicon.is_empty() {
            return Err(LexiconError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), words = lexicon.len(), "word list loaded");
        Ok(lexicon)
    }

    /// The built-in fallback word list.
    pub fn seed() -> Self {
        Self::from_words(SEED_WORDS)
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Returns `true` if the word was not present before. The empty string is
    /// never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.len += 1;
        true
    }

    /// True iff `word` was inserted. Always false for the empty string.
    pub fn has_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.walk(word).is_some_and(|node| node.is_word)
    }

    /// True iff some inserted word starts with `prefix`.
    ///
    /// The empty prefix matches iff the lexicon holds at least one word.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.walk(prefix).is_some()
    }

    fn walk(&self, s: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in s.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
