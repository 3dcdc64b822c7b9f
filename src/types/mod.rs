//! Core domain types for tmm.
//!
//! - `TileSize` - uniform cell size, the bounding box of all tiles
//! - `TilesetSize` - pixel size of the assembled canvas
//! - `GridCell` - where a tile lands in the grid
//! - `RowPolicy` - how tile and column counts become a row count

mod size;

pub use size::{GridCell, RowPolicy, TileSize, TilesetSize};
