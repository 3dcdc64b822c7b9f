//! Source image decoding.
//!
//! Tiles are read twice: once for their header dimensions and once for their
//! pixels. Both reads open the file fresh so no decoded image outlives the
//! pass that needed it.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::error::{Result, TmmError};

use super::lossy_png;

/// Decoder behaviour for one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept truncated or checksum-damaged data, keeping whatever pixels
    /// could be recovered instead of failing.
    pub allow_truncated: bool,
}

impl DecodeOptions {
    pub fn tolerant() -> Self {
        Self {
            allow_truncated: true,
        }
    }
}

/// A tile input path, as given and as resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    /// The path as the caller wrote it. Used in error messages.
    pub given: PathBuf,
    /// Absolute path used for every open.
    pub resolved: PathBuf,
}

impl TileSource {
    /// Resolve `path` against the current working directory.
    ///
    /// The file is not required to exist; resolution is lexical only.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let given = path.as_ref().to_path_buf();
        let resolved = std::path::absolute(&given).map_err(|e| TmmError::Io {
            path: given.clone(),
            message: format!("Failed to resolve path: {}", e),
        })?;
        Ok(Self { given, resolved })
    }
}

/// A decoded tile held for the duration of a single paste.
#[derive(Debug)]
pub struct SourceImage {
    pub pixels: RgbaImage,
    /// Set when the lossy decoder gave up before the end of the data.
    pub truncated: bool,
}

/// Read a tile's dimensions from its header without decoding pixels.
pub fn read_dimensions(source: &TileSource) -> Result<(u32, u32)> {
    let reader = open_reader(source)?;
    reader
        .into_dimensions()
        .map_err(|e| decode_error(source, e))
}

/// Fully decode a tile to RGBA8.
pub fn decode(source: &TileSource, options: &DecodeOptions) -> Result<SourceImage> {
    let reader = open_reader(source)?;

    if options.allow_truncated && reader.format() == Some(ImageFormat::Png) {
        return lossy_png::decode(reader.into_inner()).map_err(|e| decode_error(source, e));
    }

    let pixels = reader
        .decode()
        .map_err(|e| decode_error(source, e))?
        .to_rgba8();

    Ok(SourceImage {
        pixels,
        truncated: false,
    })
}

fn open_file(source: &TileSource) -> Result<File> {
    File::open(&source.resolved).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TmmError::FileNotFound {
            path: source.given.clone(),
        },
        _ => TmmError::Io {
            path: source.given.clone(),
            message: format!("Failed to open file: {}", e),
        },
    })
}

fn open_reader(source: &TileSource) -> Result<ImageReader<BufReader<File>>> {
    let file = open_file(source)?;
    let mut reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| decode_error(source, e))?;

    // Content sniffing failed; let the extension decide.
    if reader.format().is_none() {
        if let Ok(format) = ImageFormat::from_path(&source.resolved) {
            reader.set_format(format);
        }
    }

    Ok(reader)
}

fn decode_error(source: &TileSource, err: impl std::fmt::Display) -> TmmError {
    TmmError::Decode {
        path: source.given.clone(),
        message: err.to_string(),
    }
}
