//! Smoothing of a finished command list.

use edgewalk_core::{Facing, Point};

use crate::passable::Passability;
use crate::state::PathState;
use crate::traits::MovePather;

/// What to do with a pair of consecutive commands, keyed by the clockwise
/// turn from the first to the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PairFix {
    Keep,
    /// The second command undoes the first.
    Backtrack,
    /// Turn the first command by this many eighths toward the second.
    Adjust(i32),
}

const PAIR_FIX: [PairFix; 8] = [
    PairFix::Keep,
    PairFix::Keep,
    PairFix::Adjust(1),
    PairFix::Adjust(2),
    PairFix::Backtrack,
    PairFix::Adjust(-2),
    PairFix::Adjust(-1),
    PairFix::Keep,
];

/// Straighten and shorten the committed commands of `path` in place.
///
/// Backtracking pairs are removed, pairs that turn by 90 or 135 degrees are
/// merged into one step, and two diagonals at right angles become two
/// straight steps when the cell between them can be entered. Passes repeat
/// until nothing changes, so optimizing twice equals optimizing once. A turn
/// straightened by one pass can pair with its neighbor in the next, so the
/// result may be shorter than a single pass leaves it. The cost is then
/// recomputed from the map, threat ignored, and the overlap bitmap rebuilt.
/// Returns the new number of commands.
pub fn optimize_moves<M: MovePather + ?Sized>(
    path: &mut PathState,
    pass: &Passability<'_, M>,
) -> usize {
    let start = path.start();
    let mut moves = path.moves().to_vec();
    while let Some(next) = optimize_pass(&moves, start, pass) {
        moves = next;
    }

    let mut costs = Vec::with_capacity(moves.len());
    let mut cell = start;
    for &f in &moves {
        cell = cell.step(f);
        costs.push(pass.cost(cell, f, None));
    }
    path.rebuild(&moves, &costs);
    path.length()
}

/// One forward pass; `None` when it changed nothing.
fn optimize_pass<M: MovePather + ?Sized>(
    moves: &[Facing],
    start: Point,
    pass: &Passability<'_, M>,
) -> Option<Vec<Facing>> {
    let mut cmds: Vec<Option<Facing>> = moves.iter().copied().map(Some).collect();
    let mut changed = false;
    // Cell the command at `i1` starts from.
    let mut cell = start;
    let mut i2 = 1;

    while i2 < cmds.len() {
        let Some(i1) = (0..i2).rev().find(|&i| cmds[i].is_some()) else {
            i2 += 1;
            continue;
        };
        let (Some(c1), Some(c2)) = (cmds[i1], cmds[i2]) else {
            i2 += 1;
            continue;
        };

        match PAIR_FIX[c1.turn_to(c2) as usize] {
            PairFix::Keep => {
                cell = cell.step(c1);
                i2 += 1;
            }
            PairFix::Backtrack => {
                cmds[i1] = None;
                cmds[i2] = None;
                changed = true;
                i2 += 1;
                cell = back_up(&cmds, i1, cell, start);
            }
            PairFix::Adjust(k) if c1.is_diagonal() && k.abs() == 1 => {
                // Same length either way; go straight if the corner is open.
                let straight = c1.rotate(k);
                let mut first = c1;
                if pass.admits(cell.step(straight), straight, None) {
                    cmds[i1] = Some(straight);
                    cmds[i2] = Some(straight);
                    first = straight;
                    changed = true;
                }
                cell = cell.step(first);
                i2 += 1;
            }
            PairFix::Adjust(k) => {
                let merged = if c1.is_diagonal() {
                    c1.rotate(k.signum())
                } else {
                    c1.rotate(k)
                };
                cmds[i1] = None;
                cmds[i2] = Some(merged);
                changed = true;
                cell = back_up(&cmds, i1, cell, start);
            }
        }
    }

    changed.then(|| cmds.into_iter().flatten().collect())
}

/// After removing the command at `removed`, the cell the nearest earlier
/// command starts from.
fn back_up(cmds: &[Option<Facing>], removed: usize, cell: Point, start: Point) -> Point {
    match cmds[..removed].iter().rev().find_map(|c| *c) {
        Some(prev) => cell.step(prev.opposite()),
        None => start,
    }
}
