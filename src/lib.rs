//! tmm - Tilemap manager
//!
//! Merges individual tile images into a single tileset image laid out on a
//! fixed-column grid. Every tile is centred, unscaled, in a cell the size of
//! the largest input.

pub mod cli;
pub mod codec;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod output;
pub mod render;
pub mod types;

pub use codec::{decode, read_dimensions, write_tileset, DecodeOptions, SourceImage, TileSource};
pub use error::{Result, TmmError};
pub use manifest::Manifest;
pub use merge::merge_tiles;
pub use output::Printer;
pub use render::{
    center_pad, crop_cell, determine_tile_size, determine_tileset_size,
    determine_tileset_size_with, generate_tileset, MergeOptions,
};
pub use types::{GridCell, RowPolicy, TileSize, TilesetSize};
