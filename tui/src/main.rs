mod args;
mod tui;

fn main() {
    env_logger::init();
    let args = args::parse().unwrap_or_else(|e| e.exit());
    log::info!(
        "{}x{} world, tick interval {:?}",
        args.world.rows(),
        args.world.cols(),
        args.world.config().tick_interval
    );

    if args.no_tui {
        batch(args);
    } else if let Err(e) = tui::run(args.world) {
        eprintln!("terminal error: {e}");
        std::process::exit(1);
    }
}

/// Prints the seeded grid, runs the requested number of steps, and
/// prints the result.
fn batch(mut args: args::Args) {
    println!("{}", args.world);
    for _ in 0..args.steps {
        args.world.step();
    }
    println!("{}", args.world);
}
