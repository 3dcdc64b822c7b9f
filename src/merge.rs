//! Merge entry point: tiles in, one tileset file out.

use std::path::Path;

use crate::codec::write_tileset;
use crate::error::{Result, TmmError};
use crate::output::{display_path, Printer};
use crate::render::{generate_tileset, MergeOptions};

/// Merge `files` into a grid tileset written to `out`.
///
/// Arguments are checked before any file is opened (the column count by
/// `generate_tileset`). The output file is only created once every tile
/// has been decoded and placed.
pub fn merge_tiles<P: AsRef<Path>>(
    files: &[P],
    out: &Path,
    options: &MergeOptions,
    printer: &Printer,
) -> Result<()> {
    if files.is_empty() {
        return Err(TmmError::EmptyInput);
    }

    let tileset = generate_tileset(files, options, printer)?;

    printer.status("Writing", &display_path(out));
    write_tileset(&tileset, out)?;
    printer.status(
        "Finished",
        &format!(
            "{} ({}x{})",
            display_path(out),
            tileset.width(),
            tileset.height()
        ),
    );

    Ok(())
}
