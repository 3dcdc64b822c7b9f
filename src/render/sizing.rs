//! Tile and tileset sizing.

use crate::error::{Result, TmmError};
use crate::types::{RowPolicy, TileSize, TilesetSize};

/// Compute the smallest box that fits every tile.
///
/// `sizes` is consumed lazily, so callers can feed it straight from a pass
/// over files without holding decoded images. The first error stops the
/// pass and is returned as is.
pub fn determine_tile_size<I>(sizes: I) -> Result<TileSize>
where
    I: IntoIterator<Item = Result<(u32, u32)>>,
{
    let mut tile: Option<TileSize> = None;

    for size in sizes {
        let (w, h) = size?;
        tile = Some(match tile {
            Some(t) => TileSize::new(t.width.max(w), t.height.max(h)),
            None => TileSize::new(w, h),
        });
    }

    tile.ok_or(TmmError::EmptyInput)
}

/// Compute the canvas size using the historical floor row count.
pub fn determine_tileset_size(
    tile: TileSize,
    columns: u32,
    tile_count: usize,
) -> Result<TilesetSize> {
    determine_tileset_size_with(tile, columns, tile_count, RowPolicy::Floor)
}

/// Compute the canvas size with an explicit row policy.
///
/// Width never exceeds what the tiles need: a single short row is only as
/// wide as its tiles.
pub fn determine_tileset_size_with(
    tile: TileSize,
    columns: u32,
    tile_count: usize,
    rows: RowPolicy,
) -> Result<TilesetSize> {
    if columns == 0 {
        return Err(TmmError::InvalidConfiguration {
            message: format!("column count must be at least 1, got {}", columns),
        });
    }

    let used_columns = tile_count.min(columns as usize) as u32;
    let row_count = rows.rows(tile_count, columns);

    let width = tile.width.checked_mul(used_columns);
    let height = tile.height.checked_mul(row_count);
    match (width, height) {
        (Some(width), Some(height)) => Ok(TilesetSize::new(width, height)),
        _ => Err(TmmError::InvalidConfiguration {
            message: format!(
                "tileset of {} tiles at {} with {} columns is too large",
                tile_count, tile, columns
            ),
        }),
    }
}
