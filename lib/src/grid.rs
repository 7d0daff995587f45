//! The toroidal grid: two flat buffers and the coordinate mapping.

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// The toroidal grid.
///
/// Owns two equally sized row-major boolean buffers. Exactly one of
/// them is current at any time; the other is scratch space for the
/// next full recompute and its contents are stale between ticks.
/// Replaying and undoing change-lists mutate the current buffer in
/// place and never swap.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// The two cell buffers.
    bufs: [Vec<bool>; 2],
    /// Which buffer in `bufs` is current.
    current: usize,
}

impl Grid {
    /// Creates an all-dead grid.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bufs: [vec![false; rows * cols], vec![false; rows * cols]],
            current: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The flat index of a coordinate.
    ///
    /// This mapping is the only way cells are addressed; there are no
    /// row views over the buffers.
    #[inline]
    pub fn index(&self, (row, col): Coord) -> usize {
        row * self.cols + col
    }

    /// The liveness of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> bool {
        self.bufs[self.current][self.index(coord)]
    }

    /// A view of the current buffer, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.bufs[self.current]
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells().iter().filter(|&&cell| cell).count()
    }

    /// Overwrites the current buffer with `cells`.
    ///
    /// Used when installing a fresh seed.
    pub(crate) fn fill(&mut self, cells: &[bool]) {
        debug_assert_eq!(cells.len(), self.rows * self.cols);
        self.bufs[self.current].copy_from_slice(cells);
    }

    /// The current buffer and the spare buffer, in that order.
    pub(crate) fn split_mut(&mut self) -> (&[bool], &mut [bool]) {
        let [first, second] = &mut self.bufs;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Exchanges which buffer is current.
    ///
    /// Only called right after a fresh recompute has filled the spare.
    pub(crate) fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Flips the liveness of every listed cell on the current buffer.
    ///
    /// This is how cached change-lists are replayed and undone. Every
    /// listed coordinate must be in bounds; a stray coordinate is a
    /// bug in the caller, not a runtime condition.
    pub(crate) fn toggle(&mut self, changes: &[Coord]) {
        for &coord in changes {
            let index = self.index(coord);
            debug_assert!(index < self.bufs[self.current].len(), "{coord:?} out of bounds");
            self.bufs[self.current][index] = !self.bufs[self.current][index];
        }
    }
}
