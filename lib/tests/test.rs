use rewindlife_lib::{rule, Config, Error, World};
use std::error::Error as StdError;
use std::path::PathBuf;

/// A 5x5 world holding a horizontal blinker at row 2, columns 1-3.
fn blinker() -> Result<World, Error> {
    Config::new(5, 5).world_from_cells(&[(2, 1), (2, 2), (2, 3)])
}

#[test]
fn default_config() -> Result<(), Box<dyn StdError>> {
    let world = Config::default().set_rng_seed(Some(1)).world()?;
    assert_eq!(world.rows(), 50);
    assert_eq!(world.cols(), 180);
    assert_eq!(world.generation(), 0);
    assert_eq!(world.history().len(), 1);
    assert!(world.population() > 0);
    Ok(())
}

#[test]
fn lone_cell_dies() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(3, 3).world_from_cells(&[(1, 1)])?;
    let changes = world.step().to_vec();
    assert_eq!(changes, vec![(1, 1)]);
    assert_eq!(world.population(), 0);
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn StdError>> {
    let mut world = blinker()?;

    world.step();
    for row in 0..5 {
        for col in 0..5 {
            let expected = col == 2 && (1..=3).contains(&row);
            assert_eq!(world.get((row, col)), expected, "({row}, {col}) after 1 step");
        }
    }

    world.step();
    for row in 0..5 {
        for col in 0..5 {
            let expected = row == 2 && (1..=3).contains(&col);
            assert_eq!(world.get((row, col)), expected, "({row}, {col}) after 2 steps");
        }
    }
    Ok(())
}

#[test]
fn blinker_change_list() -> Result<(), Box<dyn StdError>> {
    let mut world = blinker()?;
    // Horizontal to vertical: the ends die and the cells above and
    // below the center are born.
    let changes = world.step().to_vec();
    assert_eq!(changes, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    Ok(())
}

#[test]
fn undo_restores_bitwise() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(20, 20).set_rng_seed(Some(42)).world()?;
    let seeded = world.cells().to_vec();

    for _ in 0..16 {
        world.step();
    }
    assert!(world.history().can_undo());
    for _ in 0..16 {
        assert!(world.step_back().is_some());
    }
    assert_eq!(world.cells(), &seeded[..]);

    // The seed entry is never undone.
    assert!(!world.history().can_undo());
    assert!(world.step_back().is_none());
    assert_eq!(world.cells(), &seeded[..]);
    Ok(())
}

#[test]
fn replay_equivalence() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(16, 16).set_rng_seed(Some(7)).world()?;

    let first_changes = world.step().to_vec();
    let first_cells = world.cells().to_vec();

    world.step_back().ok_or("nothing to undo")?;
    assert!(world.history().has_cached());

    let replayed = world.step().to_vec();
    assert_eq!(replayed, first_changes);
    assert_eq!(world.cells(), &first_cells[..]);
    // The replay reused the cached entry instead of appending.
    assert_eq!(world.history().len(), 2);
    Ok(())
}

#[test]
fn reseed_resets_history() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(10, 10).set_rng_seed(Some(3)).world()?;
    for _ in 0..5 {
        world.step();
    }
    world.reseed();
    assert_eq!(world.generation(), 0);
    assert_eq!(world.history().len(), 1);
    assert!(world.step_back().is_none());
    Ok(())
}

#[test]
fn deterministic_seeding() -> Result<(), Box<dyn StdError>> {
    let a = Config::new(12, 34).set_rng_seed(Some(99)).world()?;
    let b = Config::new(12, 34).set_rng_seed(Some(99)).world()?;
    assert_eq!(a.cells(), b.cells());
    Ok(())
}

#[test]
fn degenerate_single_row() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(1, 8).set_rng_seed(Some(5)).world()?;
    let seeded = world.cells().to_vec();
    world.step();
    world.step_back();
    assert_eq!(world.cells(), &seeded[..]);
    Ok(())
}

#[test]
fn change_list_is_exact_diff() -> Result<(), Box<dyn StdError>> {
    for seed in 0..8 {
        let world = Config::new(17, 20).set_rng_seed(Some(seed)).world()?;
        let (next, changes) = rule::advance(world.cells(), 17, 20);
        let expected: Vec<_> = (0..17 * 20)
            .filter(|&i| world.cells()[i] != next[i])
            .map(|i| (i / 20, i % 20))
            .collect();
        assert_eq!(changes, expected, "seed {seed}");
    }
    Ok(())
}

#[test]
fn invalid_probability() {
    for p in [0.0, -0.5, 1.5] {
        let result = Config::new(5, 5).set_alive_probability(p).world();
        assert_eq!(result.err(), Some(Error::ProbabilityError(p)));
    }
}

#[test]
fn zero_dimensions() {
    assert_eq!(Config::new(0, 5).world().err(), Some(Error::NonPositiveError));
    assert_eq!(Config::new(5, 0).world().err(), Some(Error::NonPositiveError));
}

#[test]
fn seed_file() -> Result<(), Box<dyn StdError>> {
    let path = std::env::temp_dir().join("rewindlife_seed_ok.txt");
    std::fs::write(&path, "4 6\n0 0\n1 2\n3 5\n")?;
    let world = Config::default().set_seed_file(Some(path.clone())).world();
    std::fs::remove_file(&path)?;

    let world = world?;
    assert_eq!(world.rows(), 4);
    assert_eq!(world.cols(), 6);
    assert_eq!(world.population(), 3);
    assert!(world.get((0, 0)));
    assert!(world.get((1, 2)));
    assert!(world.get((3, 5)));
    Ok(())
}

#[test]
fn seed_file_malformed_line() -> Result<(), Box<dyn StdError>> {
    let path = std::env::temp_dir().join("rewindlife_seed_bad.txt");
    std::fs::write(&path, "4 6\n0 0\nnot a cell\n")?;
    let result = Config::default().set_seed_file(Some(path.clone())).world();
    std::fs::remove_file(&path)?;

    assert_eq!(
        result.err(),
        Some(Error::SeedLineError(3, String::from("not a cell")))
    );
    Ok(())
}

#[test]
fn seed_file_out_of_bounds() -> Result<(), Box<dyn StdError>> {
    let path = std::env::temp_dir().join("rewindlife_seed_oob.txt");
    std::fs::write(&path, "2 2\n5 0\n")?;
    let result = Config::default().set_seed_file(Some(path.clone())).world();
    std::fs::remove_file(&path)?;

    assert_eq!(result.err(), Some(Error::SeedOutOfBoundsError((5, 0), 2, 2)));
    Ok(())
}

#[test]
fn seed_file_missing() {
    let path = PathBuf::from("no_such_rewindlife_seed_file");
    let result = Config::default().set_seed_file(Some(path)).world();
    assert!(matches!(result.err(), Some(Error::SeedFileError(_))));
}
