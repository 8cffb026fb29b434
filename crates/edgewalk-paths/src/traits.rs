use edgewalk_core::{Facing, Point, Range};

use crate::distance;
use crate::movetype::MoveType;

/// The planner's view of the map and of the unit being routed.
///
/// Every method must be deterministic for a given map state: lockstep
/// simulations compare the resulting command lists bit for bit.
pub trait MovePather {
    /// Extent of the map. Cells outside it are never enterable.
    fn range(&self) -> Range;

    /// How hard it is for the unit to enter `p` when arriving along `from`.
    ///
    /// `from` is [`Facing::None`] when no particular direction applies.
    fn can_enter(&self, p: Point, from: Facing) -> MoveType;

    /// Danger rating of `p` for the unit's owner.
    fn threat_at(&self, _p: Point) -> i32 {
        0
    }

    /// Distance between two cells, in [`CELL_SPAN`](crate::CELL_SPAN) units.
    fn distance(&self, a: Point, b: Point) -> i32 {
        distance::approx(a, b)
    }

    /// The unit's risk scalar, or `None` if it never avoids threats.
    fn risk(&self) -> Option<i32> {
        None
    }
}
