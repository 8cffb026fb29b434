use edgewalk_core::{Facing, Point};

use crate::movetype::MoveType;
use crate::traits::MovePather;

/// First freely enterable cell at a distance from `dst`, on the side that
/// faces `src`.
///
/// Scans square rings of radius `start..max` around `dst`, only the part of
/// each ring turned toward `src`, and returns the first cell that can be
/// entered without any obstruction at all. A unit at `src` backing off from
/// a threat at `dst` uses this to pick where to stop.
pub fn safety_point<M: MovePather + ?Sized>(
    map: &M,
    src: Point,
    dst: Point,
    start: i32,
    max: i32,
) -> Option<Point> {
    let range = map.range();
    let free = |p: Point| range.contains(p) && map.can_enter(p, Facing::None) == MoveType::Ok;
    let back = Facing::toward(src, dst).opposite().rotate(-1);

    for dist in start.max(0)..max {
        let mut next = dst;
        for _ in 0..dist {
            next = next.step(back);
        }

        if back.is_diagonal() {
            // One side as long as two.
            for _ in 0..dist * 2 {
                next = next.step(back.rotate(3));
                if free(next) {
                    return Some(next);
                }
            }
        } else {
            // Two sides meeting at a corner.
            for _ in 0..dist {
                next = next.step(back.rotate(2));
                if free(next) {
                    return Some(next);
                }
            }
            for _ in 0..dist {
                next = next.step(back.rotate(4));
                if free(next) {
                    return Some(next);
                }
            }
        }
    }
    None
}
