//! A toroidal Game of Life engine with a rewindable history.
//!
//! Every tick records exactly which cells changed. Stepping forward
//! over ground already covered replays the recorded change-list as a
//! cheap toggle instead of recomputing the rule, and stepping backward
//! re-toggles the same change-list, so any visited state can be
//! revisited bit for bit.
//!
//! # Example
//!
//! ```
//! use rewindlife_lib::Config;
//!
//! let mut world = Config::new(24, 80).set_rng_seed(Some(1)).world()?;
//! let seeded = world.cells().to_vec();
//! world.step();
//! world.step_back();
//! assert_eq!(world.cells(), &seeded[..]);
//! # Ok::<(), rewindlife_lib::Error>(())
//! ```

mod config;
mod error;
mod grid;
mod history;
mod world;

pub mod rule;
pub mod seed;

pub use config::Config;
pub use error::Error;
pub use grid::{Coord, Grid};
pub use history::{ChangeList, History};
pub use world::World;
