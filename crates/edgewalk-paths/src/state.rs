//! The mutable route record and its registration rules.

use edgewalk_core::{Facing, Point, Range, side_of_line};

use crate::overlap::Overlap;

/// What [`PathState::register_cell`] did with a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Registration {
    /// The step was new and is now the last command.
    Appended,
    /// The step undid the previous command, which was popped.
    Retreated,
    /// The step closed a loop; the path was cut back to the repeated cell.
    Truncated,
    /// The same loop was hit twice in a row; the path is unchanged and the
    /// caller must unravel or give up.
    Looping,
    /// The command buffer has no room left; the path is unchanged.
    Full,
}

/// An in-progress or completed route.
///
/// Invariants held across every mutation:
/// - a cell is marked in [`overlap`](Self::overlap) iff it is the start or is
///   entered by one of the committed commands;
/// - [`length`](Self::length) stays below [`capacity`](Self::capacity), which
///   reserves a slot for the terminator;
/// - [`cost`](Self::cost) is the sum of the per-step costs recorded when each
///   step was registered.
#[derive(Clone, Debug)]
pub struct PathState {
    start: Point,
    end: Point,
    cost: i32,
    /// Committed commands followed by a single `Facing::None`.
    commands: Vec<Facing>,
    step_costs: Vec<i32>,
    capacity: usize,
    overlap: Overlap,
    last_overlap: Option<Point>,
    last_fixup: Option<Point>,
}

impl PathState {
    /// An empty route at `start` over the map `range`.
    ///
    /// `capacity` counts the terminator, so at most `capacity - 1` commands
    /// can be committed.
    pub fn new(start: Point, range: Range, capacity: usize) -> Self {
        let mut overlap = Overlap::new(range);
        overlap.set(start);
        let mut commands = Vec::with_capacity(capacity.max(1));
        commands.push(Facing::None);
        Self {
            start,
            end: start,
            cost: 0,
            commands,
            step_costs: Vec::with_capacity(capacity),
            capacity,
            overlap,
            last_overlap: None,
            last_fixup: None,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Cell reached by applying every committed command.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Number of committed commands.
    #[inline]
    pub fn length(&self) -> usize {
        self.step_costs.len()
    }

    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Committed commands followed by the [`Facing::None`] terminator.
    #[inline]
    pub fn commands(&self) -> &[Facing] {
        &self.commands
    }

    /// Committed commands only.
    #[inline]
    pub fn moves(&self) -> &[Facing] {
        &self.commands[..self.length()]
    }

    /// Cost recorded for each committed command.
    #[inline]
    pub fn step_costs(&self) -> &[i32] {
        &self.step_costs
    }

    #[inline]
    pub fn overlap(&self) -> &Overlap {
        &self.overlap
    }

    #[inline]
    pub fn last_overlap(&self) -> Option<Point> {
        self.last_overlap
    }

    #[inline]
    pub fn last_fixup(&self) -> Option<Point> {
        self.last_fixup
    }

    /// The most recent committed command.
    #[inline]
    pub fn last_move(&self) -> Option<Facing> {
        self.moves().last().copied()
    }

    /// Whether the route ends on `destination`.
    #[inline]
    pub fn is_complete(&self, destination: Point) -> bool {
        self.end == destination
    }

    /// Cells entered by each committed command, in order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.moves().iter().scan(self.start, |pos, &f| {
            *pos = pos.step(f);
            Some(*pos)
        })
    }

    /// An independent copy for probing a detour, with its own command budget.
    pub fn snapshot(&self, capacity: usize) -> PathState {
        let mut copy = self.clone();
        copy.capacity = capacity.max(self.length() + 1);
        copy
    }

    /// Replace this route with `other`, keeping this route's budget.
    ///
    /// A longer `other` is cut to fit first. Returns whether it fit whole.
    pub fn adopt(&mut self, mut other: PathState) -> bool {
        let budget = self.capacity.saturating_sub(1);
        let fits = other.length() <= budget;
        if !fits {
            other.truncate(budget);
        }
        other.capacity = self.capacity;
        other.last_overlap = None;
        other.last_fixup = None;
        *self = other;
        fits
    }

    fn push_step(&mut self, cell: Point, facing: Facing, cost: i32) {
        let n = self.length();
        self.commands[n] = facing;
        self.commands.push(Facing::None);
        self.step_costs.push(cost);
        self.cost += cost;
        self.overlap.set(cell);
        self.end = cell;
    }

    fn pop_step(&mut self) -> Option<Facing> {
        let cost = self.step_costs.pop()?;
        let n = self.length();
        let facing = self.commands[n];
        self.commands.truncate(n);
        self.commands.push(Facing::None);
        self.cost -= cost;
        self.overlap.clear(self.end);
        self.end = self.end.step(facing.opposite());
        Some(facing)
    }

    /// Drop commands past `len`, unmarking their cells and refunding their
    /// recorded costs.
    pub fn truncate(&mut self, len: usize) {
        while self.length() > len {
            self.pop_step();
        }
    }

    /// Append a step entering `cell` along `facing` at `cost`.
    ///
    /// Re-entering a cell already on the route is resolved here: a one-step
    /// reversal pops the previous command, any other revisit cuts the route
    /// back to where it first reached `cell`. Hitting the same revisit twice
    /// in a row reports [`Registration::Looping`].
    pub fn register_cell(&mut self, cell: Point, facing: Facing, cost: i32) -> Registration {
        if self.overlap.test(cell) {
            if self.last_move() == Some(facing.opposite()) {
                self.pop_step();
                return Registration::Retreated;
            }

            if self.last_overlap == Some(cell) {
                return Registration::Looping;
            }
            self.last_overlap = Some(cell);

            let keep = if cell == self.start {
                0
            } else {
                self.cells()
                    .position(|c| c == cell)
                    .map_or(self.length(), |i| i + 1)
            };
            self.truncate(keep);
            return Registration::Truncated;
        }

        if self.length() + 1 >= self.capacity {
            return Registration::Full;
        }
        self.push_step(cell, facing, cost);
        Registration::Appended
    }

    /// Back the route up to a cell where an edge follow can turn harder.
    ///
    /// Walks backward from the end, undoing steps, until it stands on a cell
    /// that lies on the line `from`→`to` (or directly precedes one that did),
    /// was entered diagonally, and is not the previous fixup point. Returns
    /// that cell and the facing it was entered by; `None` if the whole route
    /// was undone without finding one.
    pub fn unravel_loop(&mut self, from: Point, to: Point) -> Option<(Point, Facing)> {
        let mut last_was_line = false;
        while let Some(entering) = self.last_move() {
            let pos = self.end;
            if side_of_line(pos, from, to) == 0 || last_was_line {
                if entering.is_diagonal() && self.last_fixup != Some(pos) {
                    self.last_fixup = Some(pos);
                    return Some((pos, entering));
                }
                last_was_line = !last_was_line;
            }
            self.pop_step();
        }
        None
    }

    /// Forget the loop and fixup markers before a fresh edge follow.
    pub(crate) fn reset_markers(&mut self) {
        self.last_overlap = None;
        self.last_fixup = None;
    }

    /// Replace the committed commands wholesale, re-marking the overlap map.
    pub(crate) fn rebuild(&mut self, moves: &[Facing], costs: &[i32]) {
        debug_assert_eq!(moves.len(), costs.len());
        self.commands.clear();
        self.commands.extend_from_slice(moves);
        self.commands.push(Facing::None);
        self.step_costs.clear();
        self.step_costs.extend_from_slice(costs);
        self.cost = costs.iter().sum();
        self.overlap.reset();
        self.overlap.set(self.start);
        let mut pos = self.start;
        for &f in moves {
            pos = pos.step(f);
            self.overlap.set(pos);
        }
        self.end = pos;
    }
}
