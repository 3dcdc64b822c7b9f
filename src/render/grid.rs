//! Grid compositor.
//!
//! Lays tiles out left to right, top to bottom, each centred in a cell of
//! the common tile size. Files are read in two passes: the first only
//! probes headers to size the grid, the second decodes one tile at a time
//! and pastes it into the canvas.

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::codec::{self, DecodeOptions, TileSource};
use crate::error::{Result, TmmError};
use crate::output::{display_path, plural, Printer};
use crate::types::{RowPolicy, TileSize, TilesetSize};

use super::pad::{center_pad, TRANSPARENT};
use super::sizing::{determine_tile_size, determine_tileset_size_with};

/// Settings for one merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Cells per row.
    pub columns: u32,
    pub decode: DecodeOptions,
    pub rows: RowPolicy,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            columns: 4,
            decode: DecodeOptions::default(),
            rows: RowPolicy::Floor,
        }
    }
}

impl MergeOptions {
    pub fn with_columns(columns: u32) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }
}

/// Build the tileset image for `paths` in the given order.
pub fn generate_tileset<P: AsRef<Path>>(
    paths: &[P],
    options: &MergeOptions,
    printer: &Printer,
) -> Result<RgbaImage> {
    if options.columns == 0 {
        return Err(TmmError::InvalidConfiguration {
            message: "column count must be at least 1, got 0".to_string(),
        });
    }

    let sources = paths
        .iter()
        .map(TileSource::resolve)
        .collect::<Result<Vec<_>>>()?;

    printer.status("Measuring", &plural(sources.len(), "tile", "tiles"));
    let tile = determine_tile_size(sources.iter().map(codec::read_dimensions))?;
    let size = determine_tileset_size_with(tile, options.columns, sources.len(), options.rows)?;
    printer.info("Measured", &format!("{} tiles, {} canvas", tile, size));

    let mut canvas = RgbaImage::from_pixel(size.width, size.height, TRANSPARENT);

    printer.status("Compositing", &format!("{} columns", options.columns));
    for (index, source) in sources.iter().enumerate() {
        let cell = tile.cell(index, options.columns);

        let image = codec::decode(source, &options.decode)?;
        if image.truncated {
            printer.warning(
                "Warning",
                &format!(
                    "{} is truncated; using recovered pixels",
                    display_path(&source.given)
                ),
            );
        }

        if !size.contains(&cell, tile) {
            printer.warning(
                "Warning",
                &format!(
                    "{} (tile {}) falls outside the {} canvas and was dropped; use --fit-rows to keep it",
                    display_path(&source.given),
                    index,
                    size
                ),
            );
            continue;
        }

        paste_tile(&mut canvas, &image.pixels, tile, cell.x, cell.y);
        printer.verbose(
            "Placed",
            &format!(
                "{} at column {}, row {}",
                display_path(&source.given),
                cell.column,
                cell.row
            ),
        );
    }

    Ok(canvas)
}

/// Centre `image` in a tile and write it over the canvas at `(x, y)`.
fn paste_tile(canvas: &mut RgbaImage, image: &RgbaImage, tile: TileSize, x: u32, y: u32) {
    let padded = center_pad(image, tile);
    imageops::replace(canvas, &padded, x as i64, y as i64);
}

/// Cut the cell at `index` back out of a finished tileset.
pub fn crop_cell(
    tileset: &RgbaImage,
    tile: TileSize,
    columns: u32,
    index: usize,
) -> Result<RgbaImage> {
    let cell = tile.cell(index, columns);
    let size = TilesetSize::new(tileset.width(), tileset.height());
    if !size.contains(&cell, tile) {
        return Err(TmmError::InvalidConfiguration {
            message: format!(
                "cell {} at ({}, {}) is outside the {} tileset",
                index, cell.x, cell.y, size
            ),
        });
    }
    Ok(imageops::crop_imm(tileset, cell.x, cell.y, tile.width, tile.height).to_image())
}
