//! Minimal map for unit tests.

use edgewalk_core::{Facing, Point, Range};

use crate::movetype::MoveType;
use crate::traits::MovePather;

pub(crate) struct TestMap {
    range: Range,
    cells: Vec<MoveType>,
    threat: Vec<i32>,
    risk: Option<i32>,
}

impl TestMap {
    /// `.` open, `#` wall, `m` moving unit, `d` destroyable, `t` temporary.
    pub(crate) fn parse(s: &str) -> Self {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let w = rows[0].len() as i32;
        let h = rows.len() as i32;
        let mut cells = Vec::with_capacity((w * h) as usize);
        for row in &rows {
            assert_eq!(row.len() as i32, w, "ragged test map");
            cells.extend(row.chars().map(|ch| match ch {
                '#' => MoveType::No,
                'm' => MoveType::MovingBlock,
                'd' => MoveType::Destroyable,
                't' => MoveType::Temporary,
                _ => MoveType::Ok,
            }));
        }
        Self {
            range: Range::new(0, 0, w, h),
            threat: vec![0; cells.len()],
            cells,
            risk: None,
        }
    }

    pub(crate) fn open(w: i32, h: i32) -> Self {
        let len = (w * h) as usize;
        Self {
            range: Range::new(0, 0, w, h),
            cells: vec![MoveType::Ok; len],
            threat: vec![0; len],
            risk: None,
        }
    }

    pub(crate) fn set(&mut self, p: Point, mv: MoveType) {
        let i = self.range.index_of(p).expect("point in test map");
        self.cells[i] = mv;
    }

    pub(crate) fn set_threat(&mut self, p: Point, threat: i32) {
        let i = self.range.index_of(p).expect("point in test map");
        self.threat[i] = threat;
    }

    pub(crate) fn with_risk(mut self, risk: i32) -> Self {
        self.risk = Some(risk);
        self
    }
}

impl MovePather for TestMap {
    fn range(&self) -> Range {
        self.range
    }

    fn can_enter(&self, p: Point, _from: Facing) -> MoveType {
        self.range
            .index_of(p)
            .map_or(MoveType::No, |i| self.cells[i])
    }

    fn threat_at(&self, p: Point) -> i32 {
        self.range.index_of(p).map_or(0, |i| self.threat[i])
    }

    fn risk(&self) -> Option<i32> {
        self.risk
    }
}
