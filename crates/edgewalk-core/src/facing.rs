//! The 8-way [`Facing`] model.
//!
//! Facings are numbered clockwise from north, so rotating by `k` is plain
//! modular arithmetic on the discriminant. North is toward smaller `y`.

use std::fmt;

use crate::geom::Point;

/// One of the eight compass directions, or the `None` terminator.
///
/// `None` ends a command list and stands for "no particular direction" when
/// asking whether a cell can be entered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Facing {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
    None = 8,
}

impl Facing {
    /// All eight real facings in clockwise order starting at north.
    pub const ALL: [Facing; 8] = [
        Facing::N,
        Facing::NE,
        Facing::E,
        Facing::SE,
        Facing::S,
        Facing::SW,
        Facing::W,
        Facing::NW,
    ];

    /// Facing for a clockwise index; only the low three bits are used.
    #[inline]
    pub const fn from_index(i: usize) -> Facing {
        Self::ALL[i & 7]
    }

    /// Clockwise index 0..8, or `None` for the terminator.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Facing::None => None,
            f => Some(f as usize),
        }
    }

    /// Whether this is a real direction rather than the terminator.
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Facing::None)
    }

    /// The facing pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Facing {
        self.rotate(4)
    }

    /// Rotate by `k` eighth-turns; positive is clockwise.
    #[inline]
    pub const fn rotate(self, k: i32) -> Facing {
        match self {
            Facing::None => Facing::None,
            f => Self::ALL[(f as i32 + k).rem_euclid(8) as usize],
        }
    }

    /// Whether the facing moves along both axes at once.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        match self {
            Facing::None => false,
            f => (f as u8) & 1 == 1,
        }
    }

    /// Clockwise distance from `self` to `other`, in 0..8.
    ///
    /// Returns 0 if either facing is the terminator.
    #[inline]
    pub const fn turn_to(self, other: Facing) -> i32 {
        match (self, other) {
            (Facing::None, _) | (_, Facing::None) => 0,
            (a, b) => (b as i32 - a as i32).rem_euclid(8),
        }
    }

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Facing::N => Point::new(0, -1),
            Facing::NE => Point::new(1, -1),
            Facing::E => Point::new(1, 0),
            Facing::SE => Point::new(1, 1),
            Facing::S => Point::new(0, 1),
            Facing::SW => Point::new(-1, 1),
            Facing::W => Point::new(-1, 0),
            Facing::NW => Point::new(-1, -1),
            Facing::None => Point::ZERO,
        }
    }

    /// The facing that most directly closes the offset from `from` to `to`.
    ///
    /// The lesser axis difference turns the result diagonal once it reaches
    /// half of the greater one (rounded up); otherwise the greater axis wins
    /// outright. Equal points yield `NE`, which callers never rely on.
    pub fn toward(from: Point, to: Point) -> Facing {
        // Index bits: south, west, y-major, lesser axis near zero.
        const TABLE: [Facing; 16] = [
            Facing::NE,
            Facing::E,
            Facing::NE,
            Facing::N,
            Facing::NW,
            Facing::W,
            Facing::NW,
            Facing::N,
            Facing::SE,
            Facing::E,
            Facing::SE,
            Facing::S,
            Facing::SW,
            Facing::W,
            Facing::SW,
            Facing::S,
        ];

        let dy = from.y - to.y;
        let dx = to.x - from.x;
        let (ady, adx) = (dy.unsigned_abs(), dx.unsigned_abs());

        let mut idx = usize::from(dy < 0);
        idx = (idx << 1) | usize::from(dx < 0);
        let y_major = adx < ady;
        idx = (idx << 1) | usize::from(y_major);
        let (minor, major) = if y_major { (adx, ady) } else { (ady, adx) };
        idx = (idx << 1) | usize::from(minor < (major + 1) / 2);
        TABLE[idx]
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Facing::N => "N",
            Facing::NE => "NE",
            Facing::E => "E",
            Facing::SE => "SE",
            Facing::S => "S",
            Facing::SW => "SW",
            Facing::W => "W",
            Facing::NW => "NW",
            Facing::None => "-",
        };
        f.write_str(s)
    }
}

/// Direction an edge search turns in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl Rotation {
    /// +1 for clockwise, -1 for counterclockwise.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Rotation::Clockwise => 1,
            Rotation::Counterclockwise => -1,
        }
    }
}

impl Point {
    /// The adjacent point one step along `facing`.
    #[inline]
    pub fn step(self, facing: Facing) -> Point {
        self + facing.offset()
    }
}
