use edgewalk_core::{Facing, Point, Range};

use crate::config::PathConfig;
use crate::movetype::MoveType;
use crate::traits::MovePather;

/// Admission and cost of entering cells during one path query.
///
/// Bundles the map with the query's destination and baseline threshold, so
/// every component of the search asks the same question the same way.
pub struct Passability<'a, M: MovePather + ?Sized> {
    map: &'a M,
    config: &'a PathConfig,
    range: Range,
    destination: Point,
    threshold: MoveType,
}

impl<'a, M: MovePather + ?Sized> Passability<'a, M> {
    pub fn new(map: &'a M, config: &'a PathConfig, destination: Point, threshold: MoveType) -> Self {
        Self {
            map,
            config,
            range: map.range(),
            destination,
            threshold,
        }
    }

    #[inline]
    pub fn map(&self) -> &'a M {
        self.map
    }

    #[inline]
    pub fn config(&self) -> &'a PathConfig {
        self.config
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }

    #[inline]
    pub fn threshold(&self) -> MoveType {
        self.threshold
    }

    /// Cost of entering `p` along `from`, or 0 if it cannot be entered.
    ///
    /// `tolerance` is the highest acceptable threat, `None` to ignore threat.
    /// Far from the destination the threshold is capped at
    /// [`MoveType::MovingBlock`]; near it, threat never blocks.
    pub fn cost(&self, p: Point, from: Facing, tolerance: Option<i32>) -> i32 {
        if !self.range.contains(p) {
            return 0;
        }
        let mv = self.map.can_enter(p, from);
        if mv == MoveType::No {
            return 0;
        }

        let mut threshold = self.threshold;
        if mv >= MoveType::MovingBlock
            && self.map.distance(p, self.destination) > self.config.far_cutoff
        {
            threshold = threshold.min(MoveType::MovingBlock);
        }
        if mv > threshold {
            return 0;
        }

        if !self.config.scripted {
            if let Some(tolerance) = tolerance {
                if self.map.distance(p, self.destination) > self.config.threat_radius
                    && self.map.threat_at(p) > tolerance
                {
                    return 0;
                }
            }
        }

        mv.cost()
    }

    /// Whether `p` can be entered along `from`.
    #[inline]
    pub fn admits(&self, p: Point, from: Facing, tolerance: Option<i32>) -> bool {
        self.cost(p, from, tolerance) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testmap::TestMap;

    #[test]
    fn walls_and_edges_are_impassable() {
        let map = TestMap::parse(
            "
            ..#
            ...
            ",
        );
        let cfg = PathConfig::default();
        let pass = Passability::new(&map, &cfg, Point::new(0, 1), MoveType::Temporary);
        assert_eq!(pass.cost(Point::new(0, 0), Facing::N, None), 1);
        assert_eq!(pass.cost(Point::new(2, 0), Facing::E, None), 0);
        assert_eq!(pass.cost(Point::new(3, 0), Facing::E, None), 0);
        assert_eq!(pass.cost(Point::new(0, -1), Facing::N, None), 0);
    }

    #[test]
    fn threshold_limits_blockers() {
        let map = TestMap::parse("mdt");
        let cfg = PathConfig::default();
        // Destination adjacent to everything: no far-cutoff tightening.
        let dest = Point::new(1, 0);
        let strict = Passability::new(&map, &cfg, dest, MoveType::Cloak);
        assert_eq!(strict.cost(Point::new(0, 0), Facing::None, None), 0);

        let lenient = Passability::new(&map, &cfg, dest, MoveType::Temporary);
        assert_eq!(lenient.cost(Point::new(0, 0), Facing::None, None), 3);
        assert_eq!(lenient.cost(Point::new(1, 0), Facing::None, None), 8);
        assert_eq!(lenient.cost(Point::new(2, 0), Facing::None, None), 10);
    }

    #[test]
    fn far_blockers_are_capped_at_moving_block() {
        let map = TestMap::parse("d..m.....");
        let cfg = PathConfig::default();
        let pass = Passability::new(&map, &cfg, Point::new(8, 0), MoveType::Temporary);
        // Destroyable eight cells away: tightened to MovingBlock and rejected.
        assert_eq!(pass.cost(Point::new(0, 0), Facing::None, None), 0);
        // MovingBlock itself still fits the tightened threshold.
        assert_eq!(pass.cost(Point::new(3, 0), Facing::None, None), 3);

        let near = Passability::new(&map, &cfg, Point::new(1, 0), MoveType::Temporary);
        assert_eq!(near.cost(Point::new(0, 0), Facing::None, None), 8);
    }

    #[test]
    fn threat_blocks_only_away_from_destination() {
        let mut map = TestMap::open(12, 1);
        map.set_threat(Point::new(2, 0), 7);
        map.set_threat(Point::new(9, 0), 7);
        let cfg = PathConfig::default();
        let pass = Passability::new(&map, &cfg, Point::new(11, 0), MoveType::Ok);

        assert_eq!(pass.cost(Point::new(2, 0), Facing::E, Some(5)), 0);
        assert_eq!(pass.cost(Point::new(2, 0), Facing::E, Some(7)), 1);
        assert_eq!(pass.cost(Point::new(2, 0), Facing::E, None), 1);
        // Two cells from the destination: inside the threat radius.
        assert_eq!(pass.cost(Point::new(9, 0), Facing::E, Some(0)), 1);
    }

    #[test]
    fn scripted_sessions_skip_threat() {
        let mut map = TestMap::open(12, 1);
        map.set_threat(Point::new(1, 0), 50);
        let cfg = PathConfig {
            scripted: true,
            ..PathConfig::default()
        };
        let pass = Passability::new(&map, &cfg, Point::new(11, 0), MoveType::Ok);
        assert!(pass.admits(Point::new(1, 0), Facing::E, Some(0)));
    }
}
