// Bridges between encoded image bytes (uploads, captures, files) and the
// engine's `Frame` raster. Decoding always lands on RGBA so the rest of the
// engine sees one layout per source.

use crate::core_modules::frame::{Frame, RGBA_CHANNELS, RGB_CHANNELS};
use crate::error::SenseError;
use image::ImageEncoder;
use std::path::Path;

/// Decodes encoded image bytes (PNG, JPEG, ...) into an RGBA `Frame`.
pub fn decode(bytes: &[u8]) -> Result<Frame, SenseError> {
    let dynamic = image::load_from_memory(bytes).map_err(SenseError::Decode)?;
    let rgba = dynamic.to_rgba8();
    let (width, height) = rgba.dimensions();
    Frame::from_raw(width, height, RGBA_CHANNELS, rgba.into_raw()).ok_or(
        SenseError::LayoutMismatch {
            width,
            height,
            channels: RGBA_CHANNELS,
        },
    )
}

/// Reads and decodes an image file into an RGBA `Frame`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Frame, SenseError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Encodes a `Frame` as PNG bytes.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, SenseError> {
    let color_type = match frame.channels() {
        c if c == RGB_CHANNELS => image::ExtendedColorType::Rgb8,
        c if c == RGBA_CHANNELS => image::ExtendedColorType::Rgba8,
        c => return Err(SenseError::UnsupportedLayout(c)),
    };
    let mut buffer = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(frame.data(), frame.width(), frame.height(), color_type)
        .map_err(SenseError::Encode)?;
    Ok(buffer)
}

/// Encodes a `Frame` as PNG and writes it to `path`.
pub fn save_png<P: AsRef<Path>>(path: P, frame: &Frame) -> Result<(), SenseError> {
    let bytes = encode_png(frame)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::frame::Pixel;

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let frame = Frame::solid(5, 4, RGBA_CHANNELS, Pixel::new(12, 34, 56, 255)).unwrap();
        let bytes = encode_png(&frame).expect("encode failed");
        let decoded = decode(&bytes).expect("decode failed");
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 4);
        assert_eq!(decoded.pixel(4, 3), Some(Pixel::new(12, 34, 56, 255)));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode(&[0u8; 16]).is_err());
    }
}
