//! The history log: recorded change-lists and the replay cursor.

use crate::grid::{Coord, Grid};
use crate::rule;

/// The cells that flip during one step, in row-major order.
pub type ChangeList = Vec<Coord>;

/// An append-only log of per-step change-lists and a cursor into it.
///
/// `log[0]` is always the seed diff from the all-dead grid, and
/// `log[i]` transforms the state after step `i - 1` into the state
/// after step `i`. Because a cell flips at most once per step, every
/// change-list is its own inverse under toggling; that is what makes
/// stepping backward exact and recomputation-free.
///
/// The cursor is stored as `applied`, the number of log entries
/// currently applied to the grid, so it never needs to go negative.
#[derive(Clone, Debug, Default)]
pub struct History {
    /// All recorded change-lists, oldest first.
    log: Vec<ChangeList>,
    /// How many entries of `log` are applied to the grid.
    ///
    /// `0` means the all-dead state before the seed; it only occurs
    /// transiently before [`reset`](Self::reset) installs entry 0.
    applied: usize,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of recorded change-lists.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Number of applied change-lists.
    ///
    /// The next forward step replays `log[position()]` if it exists.
    pub fn position(&self) -> usize {
        self.applied
    }

    /// Whether a forward step would replay a cached change-list
    /// instead of recomputing.
    pub fn has_cached(&self) -> bool {
        self.applied < self.log.len()
    }

    /// Whether a backward step would do anything.
    pub fn can_undo(&self) -> bool {
        self.applied > 1
    }

    /// The change-list that produced the current grid state.
    ///
    /// # Panics
    ///
    /// Panics if the history has not been seeded yet.
    pub fn latest(&self) -> &[Coord] {
        &self.log[self.applied - 1]
    }

    /// Advances the grid by one step and returns the applied
    /// change-list.
    ///
    /// If a cached change-list exists past the cursor it is replayed
    /// as a toggle on the current buffer. Otherwise the rule is
    /// recomputed into the grid's spare buffer, the buffers are
    /// swapped, and the fresh change-list is appended to the log.
    pub(crate) fn step_forward(&mut self, grid: &mut Grid) -> &[Coord] {
        if self.applied < self.log.len() {
            log::trace!("replaying cached change-list {}", self.applied);
            grid.toggle(&self.log[self.applied]);
        } else {
            log::trace!("recomputing step {}", self.applied);
            let (rows, cols) = (grid.rows(), grid.cols());
            let changes = {
                let (src, dest) = grid.split_mut();
                rule::advance_into(src, dest, rows, cols)
            };
            grid.swap();
            self.log.push(changes);
        }
        self.applied += 1;
        &self.log[self.applied - 1]
    }

    /// Steps the grid backward by re-toggling the change-list at the
    /// cursor, and returns that change-list.
    ///
    /// The seed entry itself is never undone: at the seeded state this
    /// is a no-op returning `None`.
    pub(crate) fn step_backward(&mut self, grid: &mut Grid) -> Option<&[Coord]> {
        if self.applied <= 1 {
            return None;
        }
        self.applied -= 1;
        grid.toggle(&self.log[self.applied]);
        Some(&self.log[self.applied])
    }

    /// Discards the log and installs a fresh seed diff as entry 0.
    pub(crate) fn reset(&mut self, seed_changes: ChangeList) {
        self.log.clear();
        self.log.push(seed_changes);
        self.applied = 1;
    }
}
