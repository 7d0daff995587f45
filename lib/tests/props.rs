use proptest::collection::vec;
use proptest::prelude::*;
use rewindlife_lib::{rule, Config};

/// Random dimensions up to `max` in each direction, with a matching
/// random buffer.
fn grid_strategy(max: usize) -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (1..=max, 1..=max).prop_flat_map(|(rows, cols)| {
        vec(any::<bool>(), rows * cols).prop_map(move |cells| (rows, cols, cells))
    })
}

proptest! {
    #[test]
    fn neighbor_counts_in_range((rows, cols, cells) in grid_strategy(16)) {
        for row in 0..rows {
            for col in 0..cols {
                let n = rule::count_live_neighbors(&cells, rows, cols, row, col);
                prop_assert!(n <= 8, "({row}, {col}) counted {n}");
            }
        }
    }

    #[test]
    fn change_list_is_self_inverse((rows, cols, cells) in grid_strategy(12)) {
        let (next, changes) = rule::advance(&cells, rows, cols);

        let mut toggled = cells.clone();
        for &(row, col) in &changes {
            let i = row * cols + col;
            toggled[i] = !toggled[i];
        }
        prop_assert_eq!(&toggled, &next);

        for &(row, col) in &changes {
            let i = row * cols + col;
            toggled[i] = !toggled[i];
        }
        prop_assert_eq!(&toggled, &cells);
    }

    #[test]
    fn change_list_matches_diff((rows, cols, cells) in grid_strategy(20)) {
        let (next, changes) = rule::advance(&cells, rows, cols);
        let expected: Vec<_> = (0..rows * cols)
            .filter(|&i| cells[i] != next[i])
            .map(|i| (i / cols, i % cols))
            .collect();
        prop_assert_eq!(changes, expected);
    }

    #[test]
    fn rewind_roundtrip(seed in any::<u64>(), steps in 1usize..12) {
        let mut world = Config::new(9, 11)
            .set_rng_seed(Some(seed))
            .world()
            .unwrap();
        let seeded = world.cells().to_vec();
        for _ in 0..steps {
            world.step();
        }
        for _ in 0..steps {
            prop_assert!(world.step_back().is_some());
        }
        prop_assert_eq!(world.cells(), &seeded[..]);
    }
}
