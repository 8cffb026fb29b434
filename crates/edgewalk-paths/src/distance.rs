use edgewalk_core::Point;

/// Sub-cell units per cell used by [`approx`].
pub const CELL_SPAN: i32 = 256;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Integer approximation of the Euclidean distance, in [`CELL_SPAN`] units.
///
/// Greater axis plus half the lesser axis. Never uses floating point.
#[inline]
pub fn approx(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs() * CELL_SPAN;
    let dy = (a.y - b.y).abs() * CELL_SPAN;
    if dx > dy { dx + dy / 2 } else { dy + dx / 2 }
}
