//! # knightword
//!
//! Finds the longest dictionary word that can be traced through a character grid by
//! chess-knight moves, where a cell may be used any number of times along the path.
//!
//! The dictionary is indexed into a prefix [`Trie`](trie::Trie). The search walks the
//! trie and the grid in lock-step and abandons a path as soon as it stops being a prefix
//! of any dictionary word, which is what keeps an otherwise exhaustive walk tractable.
//!
//! ## Quick Start
//!
//! ```
//! use knightword::find_longest_word;
//!
//! let grid = [
//!     ['q', 'w', 'e', 'r', 't', 'n', 'u', 'i'],
//!     ['o', 'p', 'a', 'a', 'd', 'f', 'g', 'h'],
//!     ['t', 'k', 'l', 'z', 'x', 'c', 'v', 'b'],
//!     ['n', 'm', 'r', 'w', 'f', 'r', 't', 'y'],
//!     ['u', 'i', 'o', 'p', 'a', 's', 'd', 'f'],
//!     ['g', 'h', 'j', 'o', 'l', 'z', 'x', 'c'],
//!     ['v', 'b', 'a', 'm', 'q', 'w', 'e', 'r'],
//!     ['t', 'y', 'u', 'i', 'o', 'p', 'a', 's'],
//! ];
//! let longest = find_longest_word(&grid, ["algol", "fortran", "simula"]).unwrap();
//! assert_eq!(longest, "fortran");
//! ```
//!
//! Invalid input is an error, while finding nothing is an empty string:
//!
//! ```
//! use knightword::{find_longest_word, SearchError};
//!
//! let grid = [['a', 'b']];
//! assert_eq!(find_longest_word(&grid, ["xyz"]).unwrap(), "");
//!
//! let no_words: [&str; 0] = [];
//! assert!(matches!(
//!     find_longest_word(&grid, no_words),
//!     Err(SearchError::InvalidInput { .. })
//! ));
//! ```
//!
//! ## Building Blocks
//!
//! - [`trie`]: the prefix trie, generic over the edge label type.
//! - [`grid`]: validated, lowercased character grid.
//! - [`search`]: the knight-move search, its options and report.
//! - [`corpus`]: turning free-form text into a word set.
//!
//! With the `parallel` feature the search can spread starting cells over the `rayon`
//! thread pool; see [`SearchOptions::parallel`](search::SearchOptions::parallel).

#![warn(missing_docs)]

/// Loading word collections from text.
pub mod corpus;
/// Error types.
pub mod error;
/// The character grid.
pub mod grid;
/// The knight-move search engine.
pub mod search;
/// The prefix trie.
pub mod trie;

use tracing::debug;

pub use error::{CorpusError, SearchError};
pub use grid::{Cell, Grid};
pub use search::{KnightSearch, SearchOptions, SearchReport};
pub use trie::Trie;

/// Case-folds a dictionary word the way grid cells are normalized.
///
/// Each character is lowercased on its own and keeps its original form when
/// the lowercase form is more than one character, so a word and the grid
/// cells spelling it fold to the same characters. Folding twice gives the
/// same result as folding once.
///
/// ```
/// use knightword::casefold;
///
/// assert_eq!(casefold("FORTRAN"), "fortran");
/// assert_eq!(casefold("İzmir"), "İzmir");
/// ```
pub fn casefold(word: &str) -> String {
    word.chars().map(grid::fold_char).collect()
}

/// Returns the longest word in `words` that can be traced on `grid` by knight moves.
///
/// Words and grid are case-folded first. An empty string means no word could be traced.
///
/// # Errors
///
/// - [`SearchError::InvalidInput`] if the grid has no cells or `words` is empty.
/// - [`SearchError::MalformedGrid`] if the grid rows differ in length.
pub fn find_longest_word<R, I, W>(grid: &[R], words: I) -> Result<String, SearchError>
where
    R: AsRef<[char]>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    find_longest_word_with(grid, words, &SearchOptions::default()).map(|report| report.word)
}

/// Like [`find_longest_word`], with search options and the full [`SearchReport`].
///
/// # Errors
///
/// As [`find_longest_word`], plus [`SearchError::SearchTimedOut`] when
/// `options.time_limit` runs out.
pub fn find_longest_word_with<R, I, W>(
    grid: &[R],
    words: I,
    options: &SearchOptions,
) -> Result<SearchReport, SearchError>
where
    R: AsRef<[char]>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut words = words.into_iter().peekable();
    if grid.is_empty() {
        return Err(SearchError::empty_grid());
    }
    if words.peek().is_none() {
        return Err(SearchError::empty_words());
    }

    let grid = Grid::from_rows(grid)?;
    if grid.is_empty() {
        return Err(SearchError::empty_grid());
    }

    let trie: Trie = words.map(|w| casefold(w.as_ref())).collect();
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        words = trie.len(),
        nodes = trie.node_count(),
        max_depth = trie.max_depth(),
        "built dictionary trie"
    );

    KnightSearch::new(&grid, &trie)
        .with_options(options.clone())
        .run()
}

#[cfg(test)]
mod test {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn words_and_grid_are_casefolded() {
        let grid = rows(&["AB..", "..C."]);
        assert_eq!(find_longest_word(&grid, ["Ac"]).unwrap(), "ac");
    }

    #[test]
    fn expanding_lowercase_chars_match_on_both_sides() {
        // (0,0) -> (1,2) is a knight move
        let grid = vec![vec!['İ', 'x', 'x'], vec!['x', 'x', 'a']];
        assert_eq!(find_longest_word(&grid, ["İa"]).unwrap(), "İa");
        assert_eq!(find_longest_word(&grid, ["İA"]).unwrap(), "İa");
        assert_eq!(casefold("İA"), "İa");
    }

    #[test]
    fn casefold_is_idempotent() {
        for word in ["Fortran", "ÅSA", "straße", "İstanbul", "already"] {
            let once = casefold(word);
            assert_eq!(casefold(&once), once);
        }
    }

    #[test]
    fn empty_grid_is_invalid() {
        let none: Vec<Vec<char>> = Vec::new();
        assert!(matches!(
            find_longest_word(&none, ["a"]),
            Err(SearchError::InvalidInput { .. })
        ));
        let blank = vec![Vec::<char>::new()];
        assert!(matches!(
            find_longest_word(&blank, ["a"]),
            Err(SearchError::InvalidInput { .. })
        ));
    }

    #[test]
    fn empty_words_are_invalid_even_with_ragged_grid() {
        let ragged = rows(&["abc", "a"]);
        let none: Vec<String> = Vec::new();
        assert_eq!(find_longest_word(&ragged, none), Err(SearchError::empty_words()));
    }

    #[test]
    fn ragged_grid_is_malformed() {
        let ragged = rows(&["abc", "a"]);
        assert!(matches!(
            find_longest_word(&ragged, ["a"]),
            Err(SearchError::MalformedGrid { row: 1, .. })
        ));
    }

    #[test]
    fn no_match_is_not_an_error() {
        let grid = rows(&["ab"]);
        assert_eq!(find_longest_word(&grid, ["xyz"]), Ok(String::new()));
    }

    #[test]
    fn report_carries_route() {
        let grid = rows(&["c...", "..a.", "r..t"]);
        let report =
            find_longest_word_with(&grid, ["cat", "car"], &SearchOptions::default()).unwrap();
        assert_eq!(report.word, "car");
        assert_eq!(report.route, vec![Cell::new(0, 0), Cell::new(1, 2), Cell::new(2, 0)]);
    }
}
