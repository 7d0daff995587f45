//! The life rule: neighbor counting and the per-tick transition.

use crate::grid::Coord;
use crate::history::ChangeList;

/// The 8 neighborhood offsets, in row-major order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the living cells among the 8 toroidal neighbors of
/// `(row, col)`.
///
/// Both dimensions wrap around, so every cell has exactly 8 neighbor
/// positions regardless of where it sits. On degenerate 1-row or
/// 1-column grids some of those positions wrap onto the cell itself or
/// coincide with each other; they are still counted once per offset
/// and never read out of bounds.
pub fn count_live_neighbors(
    cells: &[bool],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> u8 {
    debug_assert_eq!(cells.len(), rows * cols);
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = (row as isize + dr).rem_euclid(rows as isize) as usize;
        let c = (col as isize + dc).rem_euclid(cols as isize) as usize;
        if cells[r * cols + c] {
            count += 1;
        }
    }
    count
}

/// Applies one step of the rule, writing the next state into `dest`.
///
/// Returns the change-list: every coordinate whose liveness differs
/// between `src` and `dest`, in row-major visitation order. A cell
/// flips at most once per step, so the list is duplicate-free and
/// applying it to `src` as a toggle yields `dest` (and vice versa).
pub(crate) fn advance_into(
    src: &[bool],
    dest: &mut [bool],
    rows: usize,
    cols: usize,
) -> ChangeList {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dest.len(), rows * cols);

    let mut changes = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let index = row * cols + col;
            let alive = src[index];
            let neighbors = count_live_neighbors(src, rows, cols, row, col);

            // B3/S23: birth on exactly 3 neighbors, survival on 2 or 3.
            let next = neighbors == 3 || (alive && neighbors == 2);

            dest[index] = next;
            if next != alive {
                changes.push((row, col));
            }
        }
    }
    changes
}

/// Applies one step of the rule to `cells`.
///
/// Returns the next state and the change-list. Pure and total for any
/// `rows`, `cols` >= 1 and any buffer of matching size.
pub fn advance(cells: &[bool], rows: usize, cols: usize) -> (Vec<bool>, ChangeList) {
    let mut dest = vec![false; cells.len()];
    let changes = advance_into(cells, &mut dest, rows, cols);
    (dest, changes)
}
