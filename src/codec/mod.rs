//! Image codec boundary.
//!
//! Everything that touches encoded bytes lives here: header probing,
//! strict and best-effort decoding, and writing the finished tileset.

mod decode;
mod encode;
mod lossy_png;

pub use decode::{decode, read_dimensions, DecodeOptions, SourceImage, TileSource};
pub use encode::write_tileset;
