//! A concrete grid map implementing [`MovePather`].
//!
//! Maps can be built programmatically or parsed from ASCII art, one
//! character per cell:
//!
//! | char | cell |
//! |------|------|
//! | `.`  | [`MoveType::Ok`] |
//! | `c`  | [`MoveType::Cloak`] |
//! | `m`  | [`MoveType::MovingBlock`] |
//! | `d`  | [`MoveType::Destroyable`] |
//! | `t`  | [`MoveType::Temporary`] |
//! | `#`  | [`MoveType::No`] |
//! | `S`  | start marker (open ground) |
//! | `D`  | destination marker (open ground) |

use std::fmt;

use edgewalk_core::{Facing, Point, Range};
use edgewalk_paths::{MoveType, MovePather};

/// Errors from [`TerrainMap::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    #[error("terrain: map text is empty")]
    Empty,
    #[error("terrain: line {line} has width {width}, expected {expected}")]
    InconsistentSize {
        line: usize,
        width: usize,
        expected: usize,
    },
    #[error("terrain: invalid char {ch:?} at {pos}")]
    InvalidRune { ch: char, pos: Point },
    #[error("terrain: more than one {ch:?} marker (second at {pos})")]
    DuplicateMarker { ch: char, pos: Point },
}

/// A rectangular map of [`MoveType`] cells with an optional threat layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainMap {
    range: Range,
    cells: Vec<MoveType>,
    threat: Vec<i32>,
    risk: Option<i32>,
}

/// Result of [`TerrainMap::parse`]: the map plus any `S` / `D` markers.
#[derive(Debug, Clone)]
pub struct ParsedMap {
    pub map: TerrainMap,
    pub start: Option<Point>,
    pub destination: Option<Point>,
}

impl TerrainMap {
    /// An open `w` × `h` map with no threat.
    pub fn new(w: i32, h: i32) -> Self {
        let range = Range::new(0, 0, w.max(0), h.max(0));
        let len = range.len();
        Self {
            range,
            cells: vec![MoveType::Ok; len],
            threat: vec![0; len],
            risk: None,
        }
    }

    /// Parse ASCII art. Leading and trailing blank space around the whole
    /// text is ignored, as is indentation common to every line.
    pub fn parse(s: &str) -> Result<ParsedMap, TerrainError> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if rows.iter().all(|r| r.is_empty()) {
            return Err(TerrainError::Empty);
        }
        let expected = rows[0].chars().count();
        let mut map = TerrainMap::new(expected as i32, rows.len() as i32);
        let mut start = None;
        let mut destination = None;

        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != expected {
                return Err(TerrainError::InconsistentSize {
                    line: y,
                    width,
                    expected,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let mv = match ch {
                    '.' => MoveType::Ok,
                    'c' => MoveType::Cloak,
                    'm' => MoveType::MovingBlock,
                    'd' => MoveType::Destroyable,
                    't' => MoveType::Temporary,
                    '#' => MoveType::No,
                    'S' | 'D' => {
                        let slot = if ch == 'S' { &mut start } else { &mut destination };
                        if slot.replace(pos).is_some() {
                            return Err(TerrainError::DuplicateMarker { ch, pos });
                        }
                        MoveType::Ok
                    }
                    _ => return Err(TerrainError::InvalidRune { ch, pos }),
                };
                map.set(pos, mv);
            }
        }

        Ok(ParsedMap {
            map,
            start,
            destination,
        })
    }

    /// The map's extent.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Cell type at `p`, or `None` outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<MoveType> {
        self.range.index_of(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) outside the map.
    pub fn set(&mut self, p: Point, mv: MoveType) -> bool {
        match self.range.index_of(p) {
            Some(i) => {
                self.cells[i] = mv;
                true
            }
            None => false,
        }
    }

    /// Set every cell of `r` that lies on the map.
    pub fn fill_rect(&mut self, r: Range, mv: MoveType) {
        for p in r {
            self.set(p, mv);
        }
    }

    /// Threat rating at `p`; zero outside the map.
    #[inline]
    pub fn threat(&self, p: Point) -> i32 {
        self.range.index_of(p).map_or(0, |i| self.threat[i])
    }

    /// Set the threat rating at `p`. Returns `false` outside the map.
    pub fn set_threat(&mut self, p: Point, threat: i32) -> bool {
        match self.range.index_of(p) {
            Some(i) => {
                self.threat[i] = threat;
                true
            }
            None => false,
        }
    }

    /// Route as a threat-aware unit with the given risk.
    pub fn with_risk(mut self, risk: i32) -> Self {
        self.risk = Some(risk);
        self
    }

    pub fn set_risk(&mut self, risk: Option<i32>) {
        self.risk = risk;
    }

    /// Number of cells of type `mv`.
    pub fn count(&self, mv: MoveType) -> usize {
        self.cells.iter().filter(|&&c| c == mv).count()
    }

    /// Map character for a cell type.
    pub fn glyph(mv: MoveType) -> char {
        match mv {
            MoveType::Ok => '.',
            MoveType::Cloak => 'c',
            MoveType::MovingBlock => 'm',
            MoveType::Destroyable => 'd',
            MoveType::Temporary => 't',
            MoveType::No => '#',
        }
    }
}

impl MovePather for TerrainMap {
    fn range(&self) -> Range {
        self.range
    }

    fn can_enter(&self, p: Point, _from: Facing) -> MoveType {
        self.at(p).unwrap_or(MoveType::No)
    }

    fn threat_at(&self, p: Point) -> i32 {
        self.threat(p)
    }

    fn risk(&self) -> Option<i32> {
        self.risk
    }
}

impl fmt::Display for TerrainMap {
    /// The map as ASCII art, in the format [`TerrainMap::parse`] reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.range.width().max(1) as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &mv in row {
                write!(f, "{}", TerrainMap::glyph(mv))?;
            }
        }
        Ok(())
    }
}
