//! The world: grid, history and RNG bundled together.

use crate::{
    config::Config,
    error::Error,
    grid::{Coord, Grid},
    history::History,
    seed,
};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Display, Formatter};

/// The simulation: a toroidal grid, its rewindable history, and the
/// RNG used for seeding.
///
/// All simulation state is owned here; command handlers take
/// `&mut World`. Stepping in either direction cannot fail — every
/// fallible check happens when the world is created.
pub struct World {
    /// World configuration.
    config: Config,
    /// The cell buffers.
    grid: Grid,
    /// The change-list log and cursor.
    history: History,
    /// RNG for random seeding.
    rng: StdRng,
}

impl World {
    /// Creates and seeds a new world from a configuration.
    pub(crate) fn new(config: Config) -> Result<Self, Error> {
        if let Some(path) = config.seed_file.clone() {
            let file = seed::load_file(path)?;
            let mut config = config;
            config.rows = file.rows;
            config.cols = file.cols;
            Self::from_live_cells(config, &file.live)
        } else {
            config.validate()?;
            let mut world = Self::unseeded(config);
            world.reseed();
            Ok(world)
        }
    }

    /// Creates a world whose initial population is exactly `live`.
    pub(crate) fn from_live_cells(config: Config, live: &[Coord]) -> Result<Self, Error> {
        config.validate()?;
        let (cells, changes) = seed::from_live_cells(config.rows, config.cols, live)?;
        let mut world = Self::unseeded(config);
        world.grid.fill(&cells);
        world.history.reset(changes);
        Ok(world)
    }

    /// An all-dead world with an empty history.
    ///
    /// Callers must seed it before handing it out.
    fn unseeded(config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::new(config.rows, config.cols);
        Self {
            config,
            grid,
            history: History::new(),
            rng,
        }
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The history log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The current cells, row-major. For full repaints.
    pub fn cells(&self) -> &[bool] {
        self.grid.cells()
    }

    /// The liveness of one cell.
    pub fn get(&self, coord: Coord) -> bool {
        self.grid.get(coord)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Number of steps taken since the seeded state.
    pub fn generation(&self) -> usize {
        self.history.position() - 1
    }

    /// Advances the simulation by one step.
    ///
    /// Replays a cached change-list when one exists past the cursor;
    /// recomputes the rule and extends the log otherwise. Returns the
    /// applied change-list, for incremental repaints.
    pub fn step(&mut self) -> &[Coord] {
        self.history.step_forward(&mut self.grid)
    }

    /// Steps the simulation backward.
    ///
    /// Returns the change-list that was undone, or `None` when the
    /// world is already at its seeded state (a no-op, not an error).
    pub fn step_back(&mut self) -> Option<&[Coord]> {
        self.history.step_backward(&mut self.grid)
    }

    /// Discards the history and seeds the grid afresh.
    ///
    /// The dimensions are kept; the population is re-randomized with
    /// the configured alive probability, even for worlds that were
    /// first seeded from a file. Returns the new seed change-list.
    pub fn reseed(&mut self) -> &[Coord] {
        log::debug!(
            "reseeding {}x{} world (p = {})",
            self.grid.rows(),
            self.grid.cols(),
            self.config.alive_probability
        );
        let (cells, changes) = seed::random(
            self.grid.rows(),
            self.grid.cols(),
            self.config.alive_probability,
            &mut self.rng,
        );
        self.grid.fill(&cells);
        self.history.reset(changes);
        self.history.latest()
    }
}

/// Plaintext rendering: one line per row, `█` for live cells and a
/// space for dead ones.
impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let glyph = if self.get((row, col)) { '█' } else { ' ' };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
