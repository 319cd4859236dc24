use std::time::Duration;

use crate::grid::Cell;

/// Counters collected while walking the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// In-bounds cells entered.
    pub entered: u64,
    /// Entered cells whose letter continued no dictionary prefix.
    pub pruned: u64,
    /// Complete words reached, counting repeats.
    pub words_seen: u64,
    /// Longest path traced, in characters.
    pub deepest: usize,
}

impl SearchStats {
    /// Combines the counters of two independent walks.
    pub fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            entered: self.entered + other.entered,
            pruned: self.pruned + other.pruned,
            words_seen: self.words_seen + other.words_seen,
            deepest: self.deepest.max(other.deepest),
        }
    }
}

/// Outcome of a finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// The longest word found; empty if none.
    pub word: String,
    /// Cells spelling `word`, starting cell first. Consecutive cells are one
    /// knight move apart and may repeat.
    pub route: Vec<Cell>,
    /// Walk counters.
    pub stats: SearchStats,
    /// Wall-clock time of the search itself, trie construction excluded.
    pub elapsed: Duration,
}

impl SearchReport {
    pub(crate) fn empty() -> Self {
        SearchReport {
            word: String::new(),
            route: Vec::new(),
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// False when no dictionary word could be traced.
    pub fn is_match(&self) -> bool {
        !self.word.is_empty()
    }
}
