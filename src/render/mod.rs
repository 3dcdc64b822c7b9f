//! Tileset rendering.
//!
//! Sizing, padding and grid compositing. Nothing here knows about file
//! formats; decoding and encoding go through `crate::codec`.

mod grid;
mod pad;
mod sizing;

pub use grid::{crop_cell, generate_tileset, MergeOptions};
pub use pad::center_pad;
pub use sizing::{determine_tile_size, determine_tileset_size, determine_tileset_size_with};
