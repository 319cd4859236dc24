//! Error types for grid validation, searching and corpus loading.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors reported by [`find_longest_word`](crate::find_longest_word) and the search engine.
///
/// Finding no word is not an error: the search returns an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid or the word collection is empty.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Which input was empty.
        reason: &'static str,
    },

    /// Grid rows have different lengths.
    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        /// Index of the first row whose length differs.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The configured time limit ran out before the search finished.
    #[error("search timed out after {elapsed:?} (best so far: {best_so_far:?})")]
    SearchTimedOut {
        /// Time spent before giving up.
        elapsed: Duration,
        /// Longest word found before the deadline. Not necessarily the answer.
        best_so_far: String,
    },
}

impl SearchError {
    pub(crate) fn empty_grid() -> Self {
        SearchError::InvalidInput {
            reason: "grid has no cells",
        }
    }

    pub(crate) fn empty_words() -> Self {
        SearchError::InvalidInput {
            reason: "word collection is empty",
        }
    }
}

/// Errors from loading a word corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be opened or read.
    #[error("failed to read corpus {}", path.display())]
    Io {
        /// The corpus file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from a non-file source failed.
    #[error("failed to read corpus stream")]
    Read(#[from] std::io::Error),
}
