//! Parsing command-line arguments.

use clap::error::ErrorKind;
use clap::{command, value_parser, Arg, ArgAction, Error as ClapError};
use rewindlife_lib::{Config, World};
use std::path::PathBuf;
use std::time::Duration;

/// A struct to store the parse results.
pub struct Args {
    /// The seeded world.
    pub world: World,
    /// Whether to print to stdout instead of entering the TUI.
    pub no_tui: bool,
    /// Number of steps to run in batch mode.
    pub steps: usize,
}

/// Parses the command-line arguments and builds the world from them.
///
/// Configuration errors (bad probability, unreadable seed file, ...)
/// are reported through clap like any other argument error.
pub fn parse() -> Result<Args, ClapError> {
    let mut cmd = command!()
        .long_about(
            "A toroidal Game of Life simulator that can step backwards in time.\n\
             \n\
             Every tick records which cells changed, so stepping backwards \n\
             replays history exactly instead of recomputing it.\n\
             \n\
             Keys inside the TUI:\n\
             * [space]      run / pause\n\
             * [right], [n] advance one step\n\
             * [left], [p]  step backwards\n\
             * [r]          reseed the grid\n\
             * [+] / [-]    faster / slower ticks\n\
             * [q]          quit\n",
        )
        .arg(
            Arg::new("ROWS")
                .help("Number of rows of the world")
                .index(1)
                .default_value("50")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns of the world")
                .index(2)
                .default_value("180")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("PROBABILITY")
                .help("Probability that a seeded cell starts alive, within (0, 1]")
                .short('p')
                .long("probability")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("SEEDFILE")
                .help("Seed file to load the initial population from")
                .long_help(
                    "Seed file to load the initial population from\n\
                     The first line is `ROWS COLS`; every following line is \
                     `ROW COL`, marking one live cell. The file's dimensions \
                     override the ROWS and COLS arguments.\n",
                )
                .short('f')
                .long("seed-file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("TICK")
                .help("Milliseconds between ticks while running")
                .short('t')
                .long("tick")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for the random number generator")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("STEPS")
                .help("Number of steps to run in batch mode")
                .long("steps")
                .default_value("100")
                .value_parser(value_parser!(usize))
                .requires("NOTUI"),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Prints the grid to stdout instead of entering the TUI")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        );

    let matches = cmd.try_get_matches_from_mut(std::env::args_os())?;

    let rows = *matches.get_one::<usize>("ROWS").unwrap();
    let cols = *matches.get_one::<usize>("COLS").unwrap();
    let tick = *matches.get_one::<u64>("TICK").unwrap();
    let steps = *matches.get_one::<usize>("STEPS").unwrap();
    let no_tui = matches.get_flag("NOTUI");

    let mut config = Config::new(rows, cols)
        .set_tick_interval(Duration::from_millis(tick))
        .set_seed_file(matches.get_one::<PathBuf>("SEEDFILE").cloned())
        .set_rng_seed(matches.get_one::<u64>("SEED").copied());
    if let Some(p) = matches.get_one::<f64>("PROBABILITY") {
        config = config.set_alive_probability(*p);
    }

    let world = config
        .world()
        .map_err(|e| cmd.error(ErrorKind::InvalidValue, e.to_string()))?;

    Ok(Args {
        world,
        no_tui,
        steps,
    })
}
