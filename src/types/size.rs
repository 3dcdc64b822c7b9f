//! Tile and tileset geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Uniform cell size shared by every tile in a tileset.
///
/// Always the bounding box of all source images, so every source fits
/// inside one cell without scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grid placement of the tile at `index` in row-major order.
    pub fn cell(&self, index: usize, columns: u32) -> GridCell {
        let columns = columns.max(1) as usize;
        let column = (index % columns) as u32;
        let row = (index / columns) as u32;
        GridCell {
            index,
            column,
            row,
            x: column * self.width,
            y: row * self.height,
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel dimensions of the assembled tileset canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilesetSize {
    pub width: u32,
    pub height: u32,
}

impl TilesetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether a cell lies entirely inside the canvas.
    pub fn contains(&self, cell: &GridCell, tile: TileSize) -> bool {
        cell.x as u64 + tile.width as u64 <= self.width as u64
            && cell.y as u64 + tile.height as u64 <= self.height as u64
    }
}

impl fmt::Display for TilesetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Position of one tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub column: u32,
    pub row: u32,
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
}

/// How the number of grid rows is derived from tile and column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// `max(1, tiles / columns)`. A trailing partial row gets no space of
    /// its own once there is at least one full row.
    #[default]
    Floor,
    /// `max(1, ceil(tiles / columns))`. Every tile gets a cell.
    Ceil,
}

impl RowPolicy {
    pub fn rows(self, tile_count: usize, columns: u32) -> u32 {
        let columns = columns.max(1) as usize;
        let rows = match self {
            RowPolicy::Floor => tile_count / columns,
            RowPolicy::Ceil => tile_count.div_ceil(columns),
        };
        rows.max(1) as u32
    }
}
