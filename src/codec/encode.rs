//! Tileset output.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Result, TmmError};

/// Write the tileset canvas to `path`.
///
/// The encoder is picked from the file extension. The image is encoded in
/// memory first, so `path` is untouched (and any existing file kept) when
/// the format cannot hold the canvas.
pub fn write_tileset(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| TmmError::Encode {
        path: path.to_path_buf(),
        message: format!("Unsupported output format: {}", e),
    })?;

    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| TmmError::Encode {
            path: path.to_path_buf(),
            message: format!("Failed to encode image: {}", e),
        })?;

    fs::write(path, bytes).map_err(|e| TmmError::Encode {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}
