//! The direct-line walker: the planner's entry point.

use edgewalk_core::{Facing, Point, Rotation};

use crate::config::PathConfig;
use crate::edge::{Detour, follow_edge};
use crate::error::PathError;
use crate::movetype::MoveType;
use crate::optimize::optimize_moves;
use crate::passable::Passability;
use crate::state::{PathState, Registration};
use crate::threat::ThreatStage;
use crate::traits::MovePather;

/// Plans routes with a fixed [`PathConfig`].
///
/// Holds no per-query state, so one finder can serve any number of units.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: PathConfig,
}

/// How the walk ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Reached,
    Exhausted,
    Blocked,
}

impl PathFinder {
    /// A finder using `config`, rejected if any limit is unusable.
    pub fn new(config: PathConfig) -> Result<Self, PathError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Plan a route from `start` toward `destination`.
    ///
    /// `max_length` bounds the returned command list including its
    /// [`Facing::None`] terminator. `threshold` is the worst [`MoveType`] the
    /// unit will accept entering.
    ///
    /// Not reaching the destination is not an error: the returned state holds
    /// whatever progress was made, and [`PathState::is_complete`] tells the
    /// caller whether to query again later.
    pub fn find_path<M: MovePather + ?Sized>(
        &self,
        map: &M,
        start: Point,
        destination: Point,
        max_length: usize,
        threshold: MoveType,
    ) -> Result<PathState, PathError> {
        if max_length == 0 {
            return Err(PathError::ZeroCapacity);
        }
        let range = map.range();
        for point in [start, destination] {
            if !range.contains(point) {
                return Err(PathError::OutOfRange { point, range });
            }
        }

        let pass = Passability::new(map, &self.config, destination, threshold);
        let risk = map.risk();
        let mut stage = ThreatStage::initial(risk);
        let mut path = PathState::new(start, range, max_length);
        let budget = max_length - 1;

        let outcome = 'walk: loop {
            if path.length() >= budget {
                break Outcome::Exhausted;
            }
            let current = path.end();
            if current == destination {
                break Outcome::Reached;
            }
            let tolerance = stage.tolerance(risk.unwrap_or(0));

            let direction = Facing::toward(current, destination);
            let mut next = current.step(direction);
            let cost = pass.cost(next, direction, tolerance);
            if cost > 0 {
                match path.register_cell(next, direction, cost) {
                    Registration::Appended | Registration::Retreated | Registration::Truncated => {
                        continue;
                    }
                    Registration::Looping => break Outcome::Blocked,
                    Registration::Full => break Outcome::Exhausted,
                }
            }
            if next == destination {
                // Standing next to an unenterable destination is close enough.
                break Outcome::Reached;
            }

            let mut chosen = None;
            for _ in 0..self.config.doughnut_retries {
                // Push through the obstruction to the first admissible cell.
                loop {
                    next = next.step(Facing::toward(next, destination));
                    if pass.admits(next, Facing::None, tolerance) {
                        break;
                    }
                    if next == destination {
                        match stage.next() {
                            Some(relaxed) => {
                                log::trace!("no safe route at {current}, relaxing to {relaxed:?}");
                                stage = relaxed;
                                continue 'walk;
                            }
                            None => break 'walk Outcome::Blocked,
                        }
                    }
                }

                let detour = Detour {
                    start: current,
                    target: next,
                    blocked: direction,
                };
                chosen = self.shorter_detour(&pass, &path, &detour, tolerance);
                if chosen.is_some() {
                    break;
                }

                // An island cut off from this edge; look for the next one.
                log::trace!("no edge from {current} reaches {next}, scanning past it");
                loop {
                    if next == destination {
                        match stage.next() {
                            Some(relaxed) => {
                                log::trace!("no safe route at {current}, relaxing to {relaxed:?}");
                                stage = relaxed;
                                continue 'walk;
                            }
                            None => break 'walk Outcome::Blocked,
                        }
                    }
                    let newdir = Facing::toward(next, destination);
                    next = next.step(newdir);
                    if !pass.admits(next, newdir, tolerance) {
                        break;
                    }
                }
            }

            let Some(detour) = chosen else {
                break Outcome::Blocked;
            };
            if !path.adopt(detour) {
                break Outcome::Exhausted;
            }
            if path.end() != next {
                break Outcome::Blocked;
            }
        };

        optimize_moves(&mut path, &pass);
        log::debug!(
            "path {start} -> {destination}: {outcome:?}, {} moves, cost {}",
            path.length(),
            path.cost()
        );
        Ok(path)
    }

    /// Follow the obstruction both ways and keep the shorter route.
    ///
    /// Equal lengths take the clockwise route.
    fn shorter_detour<M: MovePather + ?Sized>(
        &self,
        pass: &Passability<'_, M>,
        path: &PathState,
        detour: &Detour,
        tolerance: Option<i32>,
    ) -> Option<PathState> {
        let capacity = path.length() + self.config.max_detour_len + 1;

        let mut left = path.snapshot(capacity);
        let left_ok = follow_edge(pass, &mut left, detour, Rotation::Counterclockwise, tolerance);
        let mut right = path.snapshot(capacity);
        let right_ok = follow_edge(pass, &mut right, detour, Rotation::Clockwise, tolerance);

        let pick = match (left_ok, right_ok) {
            (true, true) if left.length() < right.length() => Some(left),
            (true, false) => Some(left),
            (_, true) => Some(right),
            (false, false) => None,
        };
        if let Some(p) = &pick {
            log::trace!(
                "detour {} -> {}: left {}, right {}, took {} moves",
                detour.start,
                detour.target,
                if left_ok { "ok" } else { "failed" },
                if right_ok { "ok" } else { "failed" },
                p.length()
            );
        }
        pick
    }
}

/// [`PathFinder::find_path`] with the default configuration.
pub fn find_path<M: MovePather + ?Sized>(
    map: &M,
    start: Point,
    destination: Point,
    max_length: usize,
    threshold: MoveType,
) -> Result<PathState, PathError> {
    PathFinder::default().find_path(map, start, destination, max_length, threshold)
}
