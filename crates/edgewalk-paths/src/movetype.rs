use std::fmt;

/// How hard it is for a mobile unit to enter a cell.
///
/// Ordered from easiest to impossible; the planner compares against a
/// caller-supplied threshold, and anything above it (or [`MoveType::No`]) is
/// impassable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveType {
    /// Nothing in the way.
    #[default]
    Ok,
    /// Occupied by a cloaked unit the mover cannot see.
    Cloak,
    /// Occupied by a unit that is itself moving.
    MovingBlock,
    /// Blocked by something the mover could destroy.
    Destroyable,
    /// Temporarily blocked.
    Temporary,
    /// Never enterable.
    No,
}

impl MoveType {
    /// All move types in ascending order.
    pub const ALL: [MoveType; 6] = [
        MoveType::Ok,
        MoveType::Cloak,
        MoveType::MovingBlock,
        MoveType::Destroyable,
        MoveType::Temporary,
        MoveType::No,
    ];

    /// Traversal cost of entering a cell of this type. Zero for [`MoveType::No`].
    #[inline]
    pub const fn cost(self) -> i32 {
        match self {
            MoveType::Ok | MoveType::Cloak => 1,
            MoveType::MovingBlock => 3,
            MoveType::Destroyable => 8,
            MoveType::Temporary => 10,
            MoveType::No => 0,
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveType::Ok => "ok",
            MoveType::Cloak => "cloak",
            MoveType::MovingBlock => "moving-block",
            MoveType::Destroyable => "destroyable",
            MoveType::Temporary => "temporary",
            MoveType::No => "no",
        };
        f.write_str(s)
    }
}
