//! World configuration.

use crate::{error::Error, grid::Coord, world::World};
use derivative::Derivative;
use std::{path::PathBuf, time::Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world is generated from this configuration.
#[derive(Clone, Debug, Derivative, PartialEq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of rows.
    #[derivative(Default(value = "50"))]
    pub rows: usize,

    /// Number of columns.
    #[derivative(Default(value = "180"))]
    pub cols: usize,

    /// Probability that a seeded cell starts alive.
    ///
    /// Must lie within (0, 1]. A value outside that range is a
    /// configuration error, never clamped.
    #[derivative(Default(value = "1.0 / 3.0"))]
    pub alive_probability: f64,

    /// Seed file to load the initial population from.
    ///
    /// When set, the file's header determines the dimensions,
    /// overriding `rows` and `cols`.
    pub seed_file: Option<PathBuf>,

    /// Time between ticks while the simulation is running.
    ///
    /// Pure pacing for the frontend; it has no effect on the
    /// simulation itself.
    #[derivative(Default(value = "Duration::from_millis(100)"))]
    pub tick_interval: Duration,

    /// Seed for the random number generator.
    ///
    /// `None` seeds from entropy; setting a value makes random
    /// seeding reproducible.
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Config {
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the alive probability.
    pub fn set_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    /// Sets the seed file.
    pub fn set_seed_file(mut self, seed_file: Option<PathBuf>) -> Self {
        self.seed_file = seed_file;
        self
    }

    /// Sets the tick interval.
    pub fn set_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Sets the RNG seed.
    pub fn set_rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Checks that the dimensions and the alive probability are
    /// usable.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::NonPositiveError);
        }
        if !(self.alive_probability > 0.0 && self.alive_probability <= 1.0) {
            return Err(Error::ProbabilityError(self.alive_probability));
        }
        Ok(())
    }

    /// Creates and seeds a new world from the configuration.
    ///
    /// When `seed_file` is set, the file determines the dimensions and
    /// the initial population; otherwise the grid is seeded randomly
    /// with `alive_probability`.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self.clone())
    }

    /// Creates a world whose initial population is exactly `live`.
    ///
    /// `seed_file` is ignored; `alive_probability` is still validated
    /// because reseeding uses it.
    pub fn world_from_cells(&self, live: &[Coord]) -> Result<World, Error> {
        World::from_live_cells(self.clone(), live)
    }
}
