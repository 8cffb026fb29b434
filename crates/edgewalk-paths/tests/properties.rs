use std::collections::HashSet;

use edgewalk_core::{Facing, Point};
use edgewalk_paths::{
    MoveType, PathConfig, PathState, Passability, Registration, find_path, optimize_moves,
};
use edgewalk_terrain::{TerrainGen, TerrainMap};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

struct Case {
    map: TerrainMap,
    start: Point,
    dest: Point,
}

fn random_case(seed: u64, w: i32, h: i32, density: f64, threat: bool) -> Case {
    let mut g = TerrainGen::with_map(TerrainMap::new(w, h), StdRng::seed_from_u64(seed));
    g.scatter(MoveType::No, density);
    g.scatter(MoveType::Destroyable, density / 4.0);
    g.scatter(MoveType::Temporary, density / 4.0);
    let start = Point::new(g.rng.random_range(0..w), g.rng.random_range(0..h));
    let dest = Point::new(g.rng.random_range(0..w), g.rng.random_range(0..h));
    g.clear(&[start]);
    if threat {
        for p in g.map.range() {
            let t = g.rng.random_range(0..8);
            g.map.set_threat(p, t);
        }
        g.map.set_risk(Some(4));
    }
    Case {
        map: g.into_map(),
        start,
        dest,
    }
}

fn threshold_of(i: usize) -> MoveType {
    MoveType::ALL[i % MoveType::ALL.len()]
}

/// The invariants every route must hold between operations.
fn check_state(path: &PathState) -> Result<(), TestCaseError> {
    prop_assert_eq!(path.commands().len(), path.length() + 1);
    prop_assert_eq!(path.commands().last(), Some(&Facing::None));
    prop_assert!(path.length() < path.capacity());
    prop_assert_eq!(path.cost(), path.step_costs().iter().sum::<i32>());

    let mut expected: HashSet<Point> = path.cells().collect();
    prop_assert_eq!(expected.len(), path.length(), "route crosses itself");
    expected.insert(path.start());
    let marked: HashSet<Point> = path.overlap().iter().collect();
    prop_assert_eq!(marked, expected);
    prop_assert_eq!(path.cells().last().unwrap_or(path.start()), path.end());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn planned_routes_are_consistent(
        seed in any::<u64>(),
        w in 2i32..24, h in 2i32..16,
        density in 0.0f64..0.45,
        threshold in 0usize..6,
        max_length in 1usize..160,
        threat in any::<bool>(),
    ) {
        let Case { map, start, dest } = random_case(seed, w, h, density, threat);
        let threshold = threshold_of(threshold);
        let path = find_path(&map, start, dest, max_length, threshold).unwrap();

        check_state(&path)?;
        prop_assert!(path.length() < max_length);
        prop_assert_eq!(path.start(), start);

        // Stored costs are what the map charges, and nothing free is entered.
        let config = PathConfig::default();
        let pass = Passability::new(&map, &config, dest, threshold);
        for ((cell, &f), &cost) in path.cells().zip(path.moves()).zip(path.step_costs()) {
            prop_assert_eq!(pass.cost(cell, f, None), cost);
            prop_assert!(cost > 0, "route enters {} which cannot be entered", cell);
        }

        // Same query, same answer.
        let again = find_path(&map, start, dest, max_length, threshold).unwrap();
        prop_assert_eq!(again.moves(), path.moves());
        prop_assert_eq!(again.cost(), path.cost());

        // Smoothing a smoothed route changes nothing.
        let mut smoothed = path.clone();
        optimize_moves(&mut smoothed, &pass);
        prop_assert_eq!(smoothed.moves(), path.moves());
        prop_assert_eq!(smoothed.cost(), path.cost());
    }

    #[test]
    fn registration_keeps_state_consistent(
        x in 0i32..10, y in 0i32..10,
        capacity in 1usize..24,
        steps in prop::collection::vec(0usize..8, 0..80),
    ) {
        let map = TerrainMap::new(10, 10);
        let start = Point::new(x, y);
        let mut path = PathState::new(start, map.range(), capacity);
        for s in steps {
            let f = Facing::ALL[s];
            let cell = path.end().step(f);
            if !map.range().contains(cell) {
                continue;
            }
            let before = path.length();
            match path.register_cell(cell, f, 1 + s as i32) {
                Registration::Appended => prop_assert_eq!(path.length(), before + 1),
                Registration::Retreated => prop_assert_eq!(path.length(), before - 1),
                Registration::Truncated => prop_assert!(path.length() < before),
                Registration::Looping | Registration::Full => {
                    prop_assert_eq!(path.length(), before)
                }
            }
            check_state(&path)?;
        }
    }
}
