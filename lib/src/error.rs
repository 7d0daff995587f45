//! All kinds of errors in this crate.

use crate::grid::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every variant is a configuration error surfaced when the world is
/// created; once a world exists, stepping in either direction cannot
/// fail.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Rows / columns should be positive.
    NonPositiveError,
    /// Invalid alive probability: {0}. It should be within (0, 1].
    ProbabilityError(f64),
    /// Unable to read the seed file: {0}.
    SeedFileError(String),
    /// Malformed line {0} in the seed file: {1:?}.
    SeedLineError(usize, String),
    /// Seeded cell at {0:?} is outside a {1}x{2} world.
    SeedOutOfBoundsError(Coord, usize, usize),
}
