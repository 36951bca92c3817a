// THEORY:
// The `Frame` module is the fixed-layout raster that every other module consumes.
// It replaces loosely-typed byte soup with an explicit (width, height, channels)
// contract so that all pixel math downstream can reason about bounds and strides.
//
// Key architectural principles:
// 1.  **Ownership-exclusive rasters**: A `Frame` owns its buffer outright. Source
//     frames are read through `&Frame` and never mutated; derived frames (resized,
//     annotated, simulated) are new owned values. Annotate-in-place is forbidden
//     by construction — drawing methods exist only on `&mut Frame`, and the
//     analysis layer only calls them on copies it created itself.
// 2.  **Bounds-checked access**: `pixel` and `set_pixel` validate coordinates and
//     return `Option`/`bool` instead of panicking. Raw `data`/`data_mut` views
//     exist for the per-pixel transform hot path, which walks the buffer in
//     `channels`-sized steps and never computes an index by hand.
// 3.  **Dumb data container**: Like the rest of the core, `Pixel` holds channel
//     values and nothing else. Interpretation (hue, saturation, buckets) lives in
//     the classifier.

use std::fmt;

pub type Channel = u8;

/// Supported interleaved layouts: RGB (3 channels) or RGBA (4 channels).
pub const RGB_CHANNELS: u8 = 3;
pub const RGBA_CHANNELS: u8 = 4;

/// A "dumb" data container representing a single pixel sample.
/// Frames with 3 channels read back with an opaque alpha of 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// The red channel value (0-255).
    pub red: Channel,
    /// The green channel value (0-255).
    pub green: Channel,
    /// The blue channel value (0-255).
    pub blue: Channel,
    /// The alpha (transparency) channel value (0-255).
    pub alpha: Channel,
}

impl Pixel {
    pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// A fully opaque pixel from an RGB triple.
    pub fn opaque(red: Channel, green: Channel, blue: Channel) -> Self {
        Self::new(red, green, blue, 255)
    }
}

/// An owned, fixed-layout raster: `width * height` pixels of `channels`
/// interleaved bytes each, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

impl Frame {
    /// Creates a zero-filled frame. `channels` must be 3 (RGB) or 4 (RGBA).
    pub fn new(width: u32, height: u32, channels: u8) -> Option<Self> {
        if channels != RGB_CHANNELS && channels != RGBA_CHANNELS {
            return None;
        }
        let len = width as usize * height as usize * channels as usize;
        Some(Self {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    /// Wraps an existing buffer. Returns `None` when the buffer length does not
    /// match `width * height * channels` or the channel count is unsupported.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Option<Self> {
        if channels != RGB_CHANNELS && channels != RGBA_CHANNELS {
            return None;
        }
        if data.len() != width as usize * height as usize * channels as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A frame filled with a single pixel value. Convenient for fixtures.
    pub fn solid(width: u32, height: u32, channels: u8, pixel: Pixel) -> Option<Self> {
        let mut frame = Self::new(width, height, channels)?;
        let step = channels as usize;
        for sample in frame.data.chunks_exact_mut(step) {
            sample[0] = pixel.red;
            sample[1] = pixel.green;
            sample[2] = pixel.blue;
            if step == RGBA_CHANNELS as usize {
                sample[3] = pixel.alpha;
            }
        }
        Some(frame)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the raw bytes for buffer-walking transforms.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * self.channels as usize)
    }

    /// Bounds-checked pixel read. 3-channel frames report alpha 255.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        let start = self.offset(x, y)?;
        let alpha = if self.channels == RGBA_CHANNELS {
            self.data[start + 3]
        } else {
            255
        };
        Some(Pixel::new(
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            alpha,
        ))
    }

    /// Bounds-checked pixel write. Returns `false` when (x, y) is outside the
    /// frame. Alpha is ignored on 3-channel frames.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> bool {
        let Some(start) = self.offset(x, y) else {
            return false;
        };
        self.data[start] = pixel.red;
        self.data[start + 1] = pixel.green;
        self.data[start + 2] = pixel.blue;
        if self.channels == RGBA_CHANNELS {
            self.data[start + 3] = pixel.alpha;
        }
        true
    }

    /// Returns a new frame resampled to `new_width` x `new_height` with
    /// nearest-neighbor mapping. Nearest-neighbor keeps the working copy
    /// deterministic; the dominant-color vote only needs coarse color content.
    pub fn resized(&self, new_width: u32, new_height: u32) -> Frame {
        let step = self.channels as usize;
        let len = new_width as usize * new_height as usize * step;
        let mut data = vec![0u8; len];

        if self.width > 0 && self.height > 0 {
            for y in 0..new_height {
                let src_y = (y as u64 * self.height as u64 / new_height.max(1) as u64) as u32;
                let src_y = src_y.min(self.height - 1);
                for x in 0..new_width {
                    let src_x = (x as u64 * self.width as u64 / new_width.max(1) as u64) as u32;
                    let src_x = src_x.min(self.width - 1);
                    let src_start =
                        (src_y as usize * self.width as usize + src_x as usize) * step;
                    let dst_start = (y as usize * new_width as usize + x as usize) * step;
                    data[dst_start..dst_start + step]
                        .copy_from_slice(&self.data[src_start..src_start + step]);
                }
            }
        }

        Frame {
            width: new_width,
            height: new_height,
            channels: self.channels,
            data,
        }
    }

    /// Draws a rectangle outline with inclusive corners (x0, y0) and (x1, y1).
    /// The stroke is `thickness` pixels wide and runs inward from the border,
    /// clipped to the frame bounds. Alpha of painted pixels becomes opaque.
    pub fn draw_rect_outline(
        &mut self,
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
        thickness: u32,
        pixel: Pixel,
    ) {
        if self.width == 0 || self.height == 0 || x1 < x0 || y1 < y0 || thickness == 0 {
            return;
        }
        let clip_x1 = x1.min(self.width - 1);
        let clip_y1 = y1.min(self.height - 1);
        for y in y0..=clip_y1 {
            for x in x0..=clip_x1 {
                let near_left = x < x0.saturating_add(thickness);
                let near_right = x as u64 + thickness as u64 > x1 as u64;
                let near_top = y < y0.saturating_add(thickness);
                let near_bottom = y as u64 + thickness as u64 > y1 as u64;
                if near_left || near_right || near_top || near_bottom {
                    self.set_pixel(x, y, pixel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_reject_out_of_bounds() {
        let mut frame = Frame::new(4, 3, RGBA_CHANNELS).unwrap();
        assert!(frame.pixel(4, 0).is_none());
        assert!(frame.pixel(0, 3).is_none());
        assert!(!frame.set_pixel(4, 0, Pixel::opaque(1, 2, 3)));
        assert!(frame.set_pixel(3, 2, Pixel::opaque(1, 2, 3)));
        assert_eq!(frame.pixel(3, 2), Some(Pixel::opaque(1, 2, 3)));
    }

    #[test]
    fn three_channel_frames_read_opaque_alpha() {
        let frame = Frame::solid(2, 2, RGB_CHANNELS, Pixel::opaque(10, 20, 30)).unwrap();
        let pixel = frame.pixel(1, 1).unwrap();
        assert_eq!(pixel.alpha, 255);
        assert_eq!(frame.data().len(), 2 * 2 * 3);
    }

    #[test]
    fn from_raw_validates_layout() {
        assert!(Frame::from_raw(2, 2, RGB_CHANNELS, vec![0u8; 12]).is_some());
        assert!(Frame::from_raw(2, 2, RGB_CHANNELS, vec![0u8; 11]).is_none());
        assert!(Frame::from_raw(2, 2, 2, vec![0u8; 8]).is_none());
    }

    #[test]
    fn resize_of_solid_frame_stays_solid() {
        let frame = Frame::solid(200, 120, RGBA_CHANNELS, Pixel::opaque(200, 10, 10)).unwrap();
        let small = frame.resized(100, 100);
        assert_eq!(small.width(), 100);
        assert_eq!(small.height(), 100);
        for y in 0..100 {
            for x in 0..100 {
                assert_eq!(small.pixel(x, y), Some(Pixel::opaque(200, 10, 10)));
            }
        }
    }

    #[test]
    fn rect_outline_paints_border_not_interior() {
        let mut frame = Frame::new(100, 100, RGBA_CHANNELS).unwrap();
        let red = Pixel::opaque(255, 0, 0);
        frame.draw_rect_outline(30, 30, 70, 70, 8, red);

        // Corner and edge samples inside the 8-pixel stroke.
        assert_eq!(frame.pixel(30, 30), Some(red));
        assert_eq!(frame.pixel(37, 50), Some(red));
        assert_eq!(frame.pixel(70, 70), Some(red));
        // The interior stays untouched.
        assert_eq!(frame.pixel(50, 50), Some(Pixel::new(0, 0, 0, 0)));
        // Outside the rectangle stays untouched.
        assert_eq!(frame.pixel(29, 50), Some(Pixel::new(0, 0, 0, 0)));
    }

    #[test]
    fn rect_outline_clips_to_frame() {
        let mut frame = Frame::new(10, 10, RGB_CHANNELS).unwrap();
        frame.draw_rect_outline(5, 5, 40, 40, 8, Pixel::opaque(1, 1, 1));
        assert_eq!(frame.pixel(9, 9), Some(Pixel::opaque(1, 1, 1)));
    }
}
