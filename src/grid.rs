//! Rectangular character grid the knight walks over.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::SearchError;

/// A grid coordinate, `row` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cell {
    /// Creates a cell at `row`, `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A `rows × cols` array of lowercase characters, stored row-major.
///
/// A grid is validated and normalized once on construction and never changes
/// afterwards.
///
/// # Examples
///
/// ```
/// use knightword::grid::{Cell, Grid};
///
/// let grid = Grid::new(vec![vec!['A', 'b'], vec!['C', 'd']]).unwrap();
/// assert_eq!(grid.get(Cell::new(1, 0)), Some('c'));
/// assert_eq!(grid.at(-1, 0), None);
///
/// assert!(Grid::new(vec![vec!['a', 'b'], vec!['c']]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from owned rows.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, SearchError> {
        Self::from_rows(&rows)
    }

    /// Builds a grid from borrowed rows, lowercasing every cell.
    ///
    /// Fails with [`SearchError::MalformedGrid`] naming the first row whose
    /// length differs from the first row's.
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, SearchError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(SearchError::MalformedGrid {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend(r.iter().copied().map(fold_char));
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parses a grid from text, one row per non-blank line.
    ///
    /// A row is either whitespace-separated single characters (`q w e r`)
    /// or a contiguous run of characters (`qwer`).
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns the character at `cell`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<char> {
        (cell.row < self.rows && cell.col < self.cols)
            .then(|| self.cells[cell.row * self.cols + cell.col])
    }

    /// Bounds-checked lookup on signed coordinates, as produced by knight steps.
    #[inline]
    pub fn at(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(Cell::new(row, col))
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Cell, char)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (Cell::new(i / cols, i % cols), ch))
    }

    /// The grid as rows of characters.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[char]>::to_vec).collect()
    }
}

/// Simple lowercase normalization of one character, shared by grid cells and
/// dictionary words.
///
/// Characters whose lowercase form is more than one character are kept
/// unchanged so that a cell always holds exactly one character.
pub(crate) fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

impl FromStr for Grid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish()
    }
}
