//! Tile maps for the edgewalk planner: ASCII parsing, random generation and
//! text rendering of planned routes.

pub mod map;
pub mod mapgen;
pub mod render;

pub use map::{ParsedMap, TerrainError, TerrainMap};
pub use mapgen::{CaveRule, TerrainGen};
pub use render::render_path;
