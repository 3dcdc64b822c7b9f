//! Canvas padding without resampling.

use image::{imageops, Rgba, RgbaImage};

use crate::types::TileSize;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Offset that centres `inner` inside `outer` along one axis.
///
/// Odd leftovers go to the far side (right or bottom).
fn centre_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Copy `image` unscaled into the middle of a transparent tile.
pub fn center_pad(image: &RgbaImage, target: TileSize) -> RgbaImage {
    let mut tile = RgbaImage::from_pixel(target.width, target.height, TRANSPARENT);
    let x = centre_offset(target.width, image.width());
    let y = centre_offset(target.height, image.height());
    imageops::replace(&mut tile, image, x as i64, y as i64);
    tile
}
