//! Corpus loading and entry construction
//!
//! Parses a whitespace-delimited word list and builds the ordered entry
//! sequence the scan strategies traverse. Built once, never mutated.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::Entry;
use crate::error::ScanError;

/// The full ordered list of words loaded from the input source, one
/// precomputed [`Entry`] per word.
///
/// Held as a flat `Vec` with no auxiliary lookup structure; every search
/// is a full linear traversal. Duplicate words produce duplicate entries.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<Entry>,
}

impl Corpus {
    /// Parse a whitespace-delimited blob into entries.
    ///
    /// `split_whitespace` already yields non-empty, trimmed tokens, so
    /// runs of spaces, tabs, and newlines between words are all accepted.
    /// Insertion order is appearance order in the source.
    pub fn from_text(text: &str) -> Self {
        let entries = text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| Entry::new(word, i as u64))
            .collect();
        Self { entries }
    }

    /// Read a word file fully into memory and build the corpus.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScanError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_text(&text);
        debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// The word at a fixed offset into the parsed list.
    ///
    /// This is the benchmark's argument source; an offset beyond the
    /// corpus is an error rather than an empty result.
    pub fn query_word(&self, offset: usize) -> Result<&str, ScanError> {
        self.entries
            .get(offset)
            .map(|entry| entry.text.as_str())
            .ok_or(ScanError::OffsetOutOfRange {
                offset,
                len: self.entries.len(),
            })
    }

    /// The built entry sequence, in corpus order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
