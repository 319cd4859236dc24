//! Exhaustive knight-move search over a [`Grid`], pruned by a [`Trie`].
//!
//! Every cell is a starting point. From there the walk advances a trie cursor
//! and a grid position in lock-step, one knight move at a time. Cells may be
//! revisited freely; the walk ends when the trie has no edge for the next
//! letter, so recursion depth never exceeds [`Trie::max_depth`].

/// Longest-word accumulator.
pub mod best;
/// Knight offsets and move helpers.
pub mod knight;
/// Search configuration.
pub mod options;
/// Search results and counters.
pub mod report;

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::grid::{Cell, Grid};
use crate::trie::{Node, Trie, WORD_INLINE};

pub use best::BestWord;
pub use knight::{is_knight_move, knight_steps, KNIGHT_OFFSETS};
pub use options::SearchOptions;
pub use report::{SearchReport, SearchStats};

/// How many recursion entries pass between two deadline checks.
const DEADLINE_STRIDE: u64 = 1024;

/// Returns the longest trie word traceable on `grid`, or an empty string.
///
/// Runs with default options, which cannot time out.
///
/// # Examples
///
/// ```
/// use knightword::grid::Grid;
/// use knightword::search::search;
/// use knightword::trie::Trie;
///
/// let grid = Grid::parse("c...\n..a.\nr..t").unwrap();
/// let trie: Trie = ["cat", "car"].into_iter().collect();
/// assert_eq!(search(&grid, &trie), "car");
/// ```
pub fn search(grid: &Grid, trie: &Trie<char>) -> String {
    // no time limit, so the search always completes
    KnightSearch::new(grid, trie)
        .run()
        .map(|report| report.word)
        .unwrap_or_default()
}

/// A configured search over one grid and one trie.
#[derive(Debug)]
pub struct KnightSearch<'a> {
    grid: &'a Grid,
    trie: &'a Trie<char>,
    options: SearchOptions,
}

impl<'a> KnightSearch<'a> {
    /// Creates a search with default options.
    pub fn new(grid: &'a Grid, trie: &'a Trie<char>) -> Self {
        KnightSearch {
            grid,
            trie,
            options: SearchOptions::default(),
        }
    }

    /// Replaces the search options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Searches from every starting cell and returns the longest word found.
    ///
    /// An empty grid or trie yields an empty report rather than an error.
    ///
    /// # Errors
    ///
    /// [`SearchError::SearchTimedOut`] if the configured time limit runs out.
    pub fn run(&self) -> Result<SearchReport, SearchError> {
        if self.grid.is_empty() || self.trie.is_empty() {
            debug!("nothing to search");
            return Ok(SearchReport::empty());
        }

        let started = Instant::now();
        let deadline = self
            .options
            .time_limit
            .and_then(|limit| started.checked_add(limit));

        let (best, stats) = if self.options.parallel {
            self.run_parallel(started, deadline)?
        } else {
            self.run_sequential(started, deadline)?
        };

        let elapsed = started.elapsed();
        let (word, route) = best.into_parts();
        debug!(
            word = %word,
            entered = stats.entered,
            pruned = stats.pruned,
            words_seen = stats.words_seen,
            deepest = stats.deepest,
            ?elapsed,
            "knight search finished"
        );
        Ok(SearchReport {
            word,
            route,
            stats,
            elapsed,
        })
    }

    fn run_sequential(
        &self,
        started: Instant,
        deadline: Option<Instant>,
    ) -> Result<(BestWord, SearchStats), SearchError> {
        let mut walker = Walker::new(self.grid, started, deadline);
        for (cell, _) in self.grid.cells() {
            walker.start(self.trie.root(), cell)?;
        }
        Ok((walker.best, walker.stats))
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        &self,
        started: Instant,
        deadline: Option<Instant>,
    ) -> Result<(BestWord, SearchStats), SearchError> {
        use rayon::prelude::*;

        let per_cell: Vec<CellOutcome> = self
            .grid
            .cells()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(cell, _)| {
                let mut walker = Walker::new(self.grid, started, deadline);
                let outcome = walker.start(self.trie.root(), cell);
                (outcome, walker.best, walker.stats)
            })
            .collect();

        reduce_cells(per_cell, started)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        &self,
        started: Instant,
        deadline: Option<Instant>,
    ) -> Result<(BestWord, SearchStats), SearchError> {
        tracing::warn!("parallel search requested but the `parallel` feature is disabled; searching sequentially");
        self.run_sequential(started, deadline)
    }
}

/// Result of walking from one starting cell, with whatever it found before
/// finishing or timing out.
#[cfg(feature = "parallel")]
type CellOutcome = (Result<(), SearchError>, BestWord, SearchStats);

/// Folds per-cell outcomes in starting-cell order, so ties resolve as in
/// [`KnightSearch::run_sequential`].
///
/// If any cell timed out, the error reports the best word over every cell,
/// finished or not.
#[cfg(feature = "parallel")]
fn reduce_cells(
    per_cell: Vec<CellOutcome>,
    started: Instant,
) -> Result<(BestWord, SearchStats), SearchError> {
    let mut best = BestWord::default();
    let mut stats = SearchStats::default();
    let mut failure = None;
    for (outcome, cell_best, cell_stats) in per_cell {
        best = best.merge(cell_best);
        stats = stats.merge(cell_stats);
        if let Err(err) = outcome {
            failure.get_or_insert(err);
        }
    }

    match failure {
        None => Ok((best, stats)),
        Some(SearchError::SearchTimedOut { .. }) => Err(SearchError::SearchTimedOut {
            elapsed: started.elapsed(),
            best_so_far: best.word().to_owned(),
        }),
        Some(err) => Err(err),
    }
}

/// Mutable state of one depth-first walk.
struct Walker<'g> {
    grid: &'g Grid,
    started: Instant,
    deadline: Option<Instant>,
    ticks: u64,
    path: SmallVec<[char; WORD_INLINE]>,
    route: SmallVec<[Cell; WORD_INLINE]>,
    best: BestWord,
    stats: SearchStats,
}

impl<'g> Walker<'g> {
    fn new(grid: &'g Grid, started: Instant, deadline: Option<Instant>) -> Self {
        Walker {
            grid,
            started,
            deadline,
            ticks: 0,
            path: SmallVec::new(),
            route: SmallVec::new(),
            best: BestWord::default(),
            stats: SearchStats::default(),
        }
    }

    fn start(&mut self, root: Node<'_, char>, cell: Cell) -> Result<(), SearchError> {
        debug_assert!(self.path.is_empty());
        self.descend(root, cell.row as isize, cell.col as isize)
    }

    fn descend(&mut self, node: Node<'_, char>, row: isize, col: isize) -> Result<(), SearchError> {
        self.check_deadline()?;

        let Some(letter) = self.grid.at(row, col) else {
            return Ok(());
        };
        self.stats.entered += 1;

        let Some(next) = node.get(letter) else {
            self.stats.pruned += 1;
            return Ok(());
        };

        // both coordinates are in bounds once `at` succeeded
        let cell = Cell::new(row as usize, col as usize);
        self.path.push(letter);
        self.route.push(cell);
        self.stats.deepest = self.stats.deepest.max(self.path.len());

        if next.is_word() {
            self.stats.words_seen += 1;
            if self.best.offer(&self.path, &self.route) {
                trace!(word = %self.best.word(), start = %self.route[0], "new longest word");
            }
        }

        for (row, col) in knight_steps(cell) {
            self.descend(next, row, col)?;
        }

        self.path.pop();
        self.route.pop();
        Ok(())
    }

    fn check_deadline(&mut self) -> Result<(), SearchError> {
        let Some(deadline) = self.deadline else {
            return Ok(());
        };
        let tick = self.ticks;
        self.ticks += 1;
        if tick % DEADLINE_STRIDE == 0 && Instant::now() >= deadline {
            return Err(SearchError::SearchTimedOut {
                elapsed: self.started.elapsed(),
                best_so_far: self.best.word().to_owned(),
            });
        }
        Ok(())
    }
}
