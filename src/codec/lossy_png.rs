//! Best-effort PNG decoding for damaged inputs.
//!
//! Checksum failures (chunk CRC, zlib Adler-32) are ignored. When the image
//! data ends early, the rows decoded so far are kept and the rest of the
//! buffer stays zeroed: transparent for formats with alpha, black otherwise.

use std::io::Read;

use image::RgbaImage;

use super::decode::SourceImage;

pub(crate) fn decode<R: Read>(input: R) -> Result<SourceImage, String> {
    let mut options = png::DecodeOptions::default();
    options.set_ignore_crc(true);
    options.set_ignore_adler32(true);

    let mut decoder = png::Decoder::new_with_options(input, options);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    // Without a complete header there is nothing to recover.
    let mut reader = decoder.read_info().map_err(|e| e.to_string())?;
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(format!("unsupported output bit depth {:?}", bit_depth));
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let truncated = reader.next_frame(&mut buf).is_err();

    let rgba = expand_to_rgba(&buf, color_type)?;
    let pixels = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| format!("decoded buffer does not match {}x{}", width, height))?;

    Ok(SourceImage { pixels, truncated })
}

fn expand_to_rgba(buf: &[u8], color_type: png::ColorType) -> Result<Vec<u8>, String> {
    let rgba = match color_type {
        png::ColorType::Rgba => buf.to_vec(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err("indexed colour was not expanded".to_string());
        }
    };
    Ok(rgba)
}
