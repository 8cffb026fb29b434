//! Per-path visited-cell bitmap.

use edgewalk_core::{Point, Range};

/// One bit per map cell, set while the cell is part of a route.
///
/// Points outside the range are never members: setting or clearing them is
/// a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlap {
    range: Range,
    bits: Vec<u64>,
}

impl Overlap {
    /// An empty bitmap covering `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            bits: vec![0; range.len().div_ceil(64)],
        }
    }

    /// The covered range.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    fn slot(&self, p: Point) -> Option<(usize, u64)> {
        let i = self.range.index_of(p)?;
        Some((i / 64, 1u64 << (i % 64)))
    }

    /// Mark `p`.
    #[inline]
    pub fn set(&mut self, p: Point) {
        if let Some((w, mask)) = self.slot(p) {
            self.bits[w] |= mask;
        }
    }

    /// Unmark `p`.
    #[inline]
    pub fn clear(&mut self, p: Point) {
        if let Some((w, mask)) = self.slot(p) {
            self.bits[w] &= !mask;
        }
    }

    /// Whether `p` is marked.
    #[inline]
    pub fn test(&self, p: Point) -> bool {
        self.slot(p).is_some_and(|(w, mask)| self.bits[w] & mask != 0)
    }

    /// Unmark every cell.
    pub fn reset(&mut self) {
        self.bits.fill(0);
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Marked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.range.iter().filter(|&p| self.test(p))
    }
}
