//! Random map generation.
//!
//! - **Scatter**: independent per-cell obstacles at a given density.
//! - **Cellular automata cave**: random walls smoothed by neighbor-count
//!   rules into connected caverns.
//!
//! Generation is fully determined by the supplied RNG, so a seeded RNG
//! reproduces the same map.

use edgewalk_core::Point;
use edgewalk_paths::MoveType;
use rand::{Rng, RngExt};

use crate::map::TerrainMap;

/// One smoothing rule for [`TerrainGen::cellular_automata_cave`].
#[derive(Debug, Clone)]
pub struct CaveRule {
    /// A cell with at least this many walls among its 8 neighbors becomes a
    /// wall.
    pub w_cutoff1: i32,
    /// A cell with at most this many walls within distance 2 also becomes a
    /// wall, which breaks up large open areas.
    pub w_cutoff2: i32,
    /// Whether cells past the map edge count as walls.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CaveRule {
    fn default() -> Self {
        Self {
            w_cutoff1: 5,
            w_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Map generator writing into a [`TerrainMap`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub map: TerrainMap,
}

impl<R: Rng> TerrainGen<R> {
    pub fn with_map(map: TerrainMap, rng: R) -> Self {
        Self { rng, map }
    }

    /// Turn each cell into `mv` with probability `density` (0.0–1.0).
    ///
    /// Returns the number of cells changed.
    pub fn scatter(&mut self, mv: MoveType, density: f64) -> usize {
        let mut changed = 0;
        for p in self.map.range() {
            let r: f64 = self.rng.random();
            if r < density && self.map.at(p) != Some(mv) {
                self.map.set(p, mv);
                changed += 1;
            }
        }
        changed
    }

    /// Generate a cave of `wall` cells and open ground.
    ///
    /// 1. Each cell is `wall` with probability `wall_init_pct`.
    /// 2. Each rule in `rules` is applied for its repetitions.
    ///
    /// Returns the number of open cells left.
    pub fn cellular_automata_cave(
        &mut self,
        wall: MoveType,
        wall_init_pct: f64,
        rules: &[CaveRule],
    ) -> usize {
        let bounds = self.map.range();
        for p in bounds {
            let r: f64 = self.rng.random();
            let mv = if r < wall_init_pct { wall } else { MoveType::Ok };
            self.map.set(p, mv);
        }

        let mut scratch = vec![MoveType::Ok; bounds.len()];
        for rule in rules {
            for _ in 0..rule.reps {
                for (idx, p) in bounds.iter().enumerate() {
                    let walls1 = self.count_walls(p, 1, wall, rule.walls_out_of_range);
                    let walls2 = self.count_walls(p, 2, wall, rule.walls_out_of_range);
                    scratch[idx] = if walls1 >= rule.w_cutoff1 || walls2 <= rule.w_cutoff2 {
                        wall
                    } else {
                        MoveType::Ok
                    };
                }
                for (idx, p) in bounds.iter().enumerate() {
                    self.map.set(p, scratch[idx]);
                }
            }
        }

        self.map.count(MoveType::Ok)
    }

    /// Force the given cells open, e.g. a route's start and destination.
    pub fn clear(&mut self, points: &[Point]) {
        for &p in points {
            self.map.set(p, MoveType::Ok);
        }
    }

    /// A uniformly random open cell, or `None` if the map has none.
    pub fn random_open(&mut self) -> Option<Point> {
        let open: Vec<Point> = self
            .map
            .range()
            .iter()
            .filter(|&p| self.map.at(p) == Some(MoveType::Ok))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }

    /// Count `wall` cells within Chebyshev distance `radius` of `center`.
    fn count_walls(
        &self,
        center: Point,
        radius: i32,
        wall: MoveType,
        walls_out_of_range: bool,
    ) -> i32 {
        let mut count = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                match self.map.at(center.shift(dx, dy)) {
                    Some(c) if c == wall => count += 1,
                    Some(_) => {}
                    None if walls_out_of_range => count += 1,
                    None => {}
                }
            }
        }
        count
    }

    /// Finish generation and take the map.
    pub fn into_map(self) -> TerrainMap {
        self.map
    }
}
