//! Deterministic path planning on tile grids.
//!
//! The planner walks a straight line toward the destination and, whenever an
//! obstruction blocks the way, follows the obstruction's edge in both
//! rotational directions and keeps the shorter detour. A finished command list
//! is then smoothed by [`optimize_moves`]. Every bound is an iteration or step
//! count, never a clock, so identical inputs produce identical command lists
//! on every machine.
//!
//! - [`find_path`] / [`PathFinder::find_path`]: the entry point.
//! - [`PathState`]: the route being built (commands, cost, visited bitmap).
//! - [`Passability`]: admission and cost of entering a cell.
//! - [`follow_edge`], [`optimize_moves`], [`safety_point`]: the building
//!   blocks, exposed for callers that drive the search themselves.
//!
//! The map is supplied through the [`MovePather`] trait.

mod config;
mod distance;
mod edge;
mod error;
mod finder;
mod movetype;
mod optimize;
mod overlap;
mod passable;
mod safety;
mod state;
mod threat;
mod traits;

#[cfg(test)]
mod testmap;

pub use config::PathConfig;
pub use distance::{CELL_SPAN, approx, chebyshev, manhattan};
pub use edge::{Detour, follow_edge};
pub use error::PathError;
pub use finder::{PathFinder, find_path};
pub use movetype::MoveType;
pub use optimize::optimize_moves;
pub use overlap::Overlap;
pub use passable::Passability;
pub use safety::safety_point;
pub use state::{PathState, Registration};
pub use threat::ThreatStage;
pub use traits::MovePather;
