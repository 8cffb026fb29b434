//! Boundary walking around an obstruction.

use edgewalk_core::{Facing, Point, Rotation, side_of_line};

use crate::passable::Passability;
use crate::state::{PathState, Registration};
use crate::traits::MovePather;

/// One obstruction to get around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Detour {
    /// Cell the route currently ends on, next to the obstruction.
    pub start: Point,
    /// First admissible cell beyond the obstruction.
    pub target: Point,
    /// Facing from `start` that ran into the obstruction.
    pub blocked: Facing,
}

/// Walk the obstruction's edge from `detour.start` toward `detour.target`,
/// turning in the `search` direction, registering every step on `path`.
///
/// Returns `true` when the target was reached. The target may have been
/// adjacent but not enterable, in which case the route ends next to it.
/// On `false` the contents of `path` are meaningless.
pub fn follow_edge<M: MovePather + ?Sized>(
    pass: &Passability<'_, M>,
    path: &mut PathState,
    detour: &Detour,
    search: Rotation,
    tolerance: Option<i32>,
) -> bool {
    let Detour {
        start,
        target,
        blocked,
    } = *detour;
    let turn = search.sign();
    let max_cells = pass.config().max_edge_follow;

    path.reset_markers();

    let mut olddir = blocked;
    let mut oldcell = start;
    // Side of the start→target line the walk last stood on.
    let mut online = true;
    let mut side = 0i64;
    let mut cellcount = 0;
    let mut first: Option<(Point, Facing)> = None;

    while path.length() + 1 < path.capacity() {
        let mut newdir = olddir;
        let mut reached_blocked = false;
        let (mut newcell, cost) = loop {
            newdir = newdir.rotate(turn);
            let mut forcefail = false;

            if newdir.is_diagonal() {
                // The target may sit just past the corner being rounded.
                let corner_dir = newdir.rotate(turn);
                let corner = oldcell.step(corner_dir);
                if corner == target {
                    let cost = pass.cost(corner, corner_dir, tolerance);
                    if cost > 0 {
                        newdir = corner_dir;
                        break (corner, cost);
                    }
                }

                // Never cut diagonally across the reference line.
                let val = side_of_line(oldcell.step(newdir), start, target);
                if val != 0 && !online {
                    forcefail = (val < 0) != (side < 0);
                }
                if forcefail && path.last_move() == Some(newdir.opposite()) {
                    forcefail = false;
                }
            }

            if newdir == olddir {
                log::trace!("edge follow {search:?}: enclosed at {oldcell}");
                return false;
            }

            let newcell = oldcell.step(newdir);
            if !forcefail {
                let cost = pass.cost(newcell, newdir, tolerance);
                if cost > 0 {
                    break (newcell, cost);
                }
            }
            if newcell == target {
                reached_blocked = true;
                break (newcell, 0);
            }
        };

        if !reached_blocked {
            match path.register_cell(newcell, newdir, cost) {
                Registration::Appended | Registration::Retreated | Registration::Truncated => {}
                Registration::Looping => {
                    let Some((cell, entered)) = path.unravel_loop(start, target) else {
                        return false;
                    };
                    // Pretend the fixup cell was entered turned further out.
                    newcell = cell;
                    newdir = entered.rotate(turn * 2);
                }
                Registration::Full => return false,
            }

            let val = side_of_line(newcell, start, target);
            online = val == 0;
            if !online {
                side = val;
            }

            cellcount += 1;
            if cellcount >= max_cells {
                return false;
            }
        }

        if newcell == target {
            return true;
        }

        // Back where the walk began: the target is not on this boundary.
        if first == Some((newcell, newdir)) {
            return false;
        }
        if first.is_none() {
            first = Some((newcell, newdir));
        }

        // Face back toward the edge, a little past it, so corners are turned.
        olddir = newdir.rotate(-turn * 3);
        oldcell = newcell;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathConfig;
    use crate::distance::chebyshev;
    use crate::movetype::MoveType;
    use crate::testmap::TestMap;

    fn walk_around(
        map: &TestMap,
        start: Point,
        target: Point,
        blocked: Facing,
        search: Rotation,
    ) -> Option<PathState> {
        let cfg = PathConfig::default();
        let pass = Passability::new(map, &cfg, target, MoveType::Ok);
        let mut path = PathState::new(start, map.range(), 64);
        let detour = Detour {
            start,
            target,
            blocked,
        };
        follow_edge(&pass, &mut path, &detour, search, None).then_some(path)
    }

    fn replay(path: &PathState) -> Vec<Point> {
        path.cells().collect()
    }

    #[test]
    fn rounds_a_single_block_both_ways() {
        let map = TestMap::parse(
            "
            .....
            .....
            ..#..
            .....
            .....
            ",
        );
        let start = Point::new(1, 2);
        let target = Point::new(3, 2);
        for search in [Rotation::Clockwise, Rotation::Counterclockwise] {
            let path = walk_around(&map, start, target, Facing::E, search).expect("detour");
            assert_eq!(path.end(), target);
            assert!(!replay(&path).contains(&Point::new(2, 2)));
            assert!(path.length() >= 2);
        }
    }

    #[test]
    fn clockwise_goes_south_of_a_wall_segment() {
        let map = TestMap::parse(
            "
            ......
            ..#...
            ..#...
            ..#...
            ......
            ",
        );
        let start = Point::new(1, 2);
        let target = Point::new(3, 2);
        let cw = walk_around(&map, start, target, Facing::E, Rotation::Clockwise).expect("cw");
        assert!(replay(&cw).iter().any(|p| p.y == 4));
        let ccw =
            walk_around(&map, start, target, Facing::E, Rotation::Counterclockwise).expect("ccw");
        assert!(replay(&ccw).iter().any(|p| p.y == 0));
        for path in [&cw, &ccw] {
            assert!(replay(path).iter().all(|p| p.x != 2 || p.y == 0 || p.y == 4));
            assert_eq!(path.end(), target);
        }
    }

    #[test]
    fn enclosed_start_fails() {
        let map = TestMap::parse(
            "
            ###..
            #.#..
            ###..
            ",
        );
        let start = Point::new(1, 1);
        let got = walk_around(&map, start, Point::new(4, 1), Facing::E, Rotation::Clockwise);
        assert!(got.is_none());
    }

    #[test]
    fn blocked_target_next_to_route_counts_as_reached() {
        // The target itself cannot be entered; ending beside it is success.
        let mut map = TestMap::open(5, 3);
        map.set(Point::new(2, 1), MoveType::No);
        map.set(Point::new(3, 1), MoveType::No);
        let start = Point::new(1, 1);
        let target = Point::new(3, 1);
        let path =
            walk_around(&map, start, target, Facing::E, Rotation::Clockwise).expect("adjacent");
        assert_ne!(path.end(), target);
        assert_eq!(chebyshev(path.end(), target), 1);
    }

    #[test]
    fn unreachable_target_fails_without_overrunning() {
        // Target is an open pocket sealed off from the start.
        let map = TestMap::parse(
            "
            .......
            ...###.
            ...#.#.
            ...###.
            .......
            ",
        );
        let got = walk_around(
            &map,
            Point::new(2, 2),
            Point::new(4, 2),
            Facing::E,
            Rotation::Clockwise,
        );
        assert!(got.is_none());
    }

    #[test]
    fn repeated_loop_is_unravelled_then_abandoned() {
        // The start's pocket is walled off from the target. Clockwise, the
        // walk closes a loop through the start twice: the first time it
        // backs up to the diagonal step at (0, 0) and turns outward, the
        // second time that fixup is spent and the walk gives up.
        let map = TestMap::parse(
            "
            ..#.#.
            #.#.##
            ..#.#.
            ..#...
            ",
        );
        let start = Point::new(1, 1);
        let target = Point::new(3, 3);
        let cfg = PathConfig::default();
        let pass = Passability::new(&map, &cfg, target, MoveType::Ok);
        let detour = Detour {
            start,
            target,
            blocked: Facing::SE,
        };
        for search in [Rotation::Clockwise, Rotation::Counterclockwise] {
            let mut path = PathState::new(start, map.range(), 64);
            assert!(!follow_edge(&pass, &mut path, &detour, search, None));

            // Unravelling only pops steps, so the route stays consistent.
            assert_eq!(path.cost(), path.step_costs().iter().sum::<i32>());
            assert_eq!(path.commands().len(), path.length() + 1);
            let mut marked: Vec<Point> = path.overlap().iter().collect();
            let mut expected: Vec<Point> = path.cells().collect();
            expected.push(start);
            marked.sort();
            expected.sort();
            assert_eq!(marked, expected);
            assert_eq!(path.cells().last().unwrap_or(start), path.end());
        }
    }

    #[test]
    fn edge_follow_respects_command_budget() {
        let map = TestMap::parse(
            "
            ........
            ...#....
            ...#....
            ...#....
            ...#....
            ...#....
            ........
            ",
        );
        let cfg = PathConfig::default();
        let target = Point::new(4, 3);
        let pass = Passability::new(&map, &cfg, target, MoveType::Ok);
        let mut path = PathState::new(Point::new(2, 3), map.range(), 3);
        let detour = Detour {
            start: Point::new(2, 3),
            target,
            blocked: Facing::E,
        };
        assert!(!follow_edge(&pass, &mut path, &detour, Rotation::Clockwise, None));
        assert!(path.length() < 3);
    }
}
