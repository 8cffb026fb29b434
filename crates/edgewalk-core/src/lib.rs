//! **edgewalk-core**: grid geometry and facings for the edgewalk planner.
//!
//! This crate provides the foundational types shared across the *edgewalk*
//! workspace: integer grid points, half-open ranges with row-major cell
//! indexing, and the 8-way [`Facing`] model used to encode movement commands.

pub mod facing;
pub mod geom;

pub use facing::{Facing, Rotation};
pub use geom::{Point, Range, side_of_line};
