//! Knight displacements and the fixed order in which they are explored.

use crate::grid::Cell;

/// The eight knight displacements as `(row, col)` offsets.
///
/// The search explores neighbours in exactly this order, which together with
/// row-major starting cells decides which of two equally long words is
/// reported.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Signed coordinates of the knight steps out of `cell`, in exploration order.
///
/// Steps may land outside any grid; callers bounds-check them.
pub fn knight_steps(cell: Cell) -> impl Iterator<Item = (isize, isize)> {
    let (row, col) = (cell.row as isize, cell.col as isize);
    KNIGHT_OFFSETS
        .into_iter()
        .map(move |(dr, dc)| (row + dr, col + dc))
}

/// True if `to` is one knight move away from `from`.
pub fn is_knight_move(from: Cell, to: Cell) -> bool {
    let dr = from.row.abs_diff(to.row);
    let dc = from.col.abs_diff(to.col);
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}
