//! # The page that glyphs are drawn onto

use image::{Rgba, RgbaImage};

/// Opaque white
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
/// Opaque black
pub const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// Coverage at which a pixel is treated as ink
pub const THRESHOLD: u8 = 128;

/// A coverage map, as produced by a rasterizer
///
/// Every byte is the coverage of one pixel, in rows of `width` bytes.
#[derive(Debug, Copy, Clone)]
pub struct Coverage<'a> {
    /// The width in pixels
    pub width: usize,
    /// The height in pixels
    pub height: usize,
    /// The coverage values
    pub data: &'a [u8],
}

/// A fixed-size RGBA page
///
/// Anything drawn outside of the page is clipped.
#[derive(Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a new page filled with `background`
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint the pixels of `coverage` that reach [`THRESHOLD`] with `color`,
    /// with the top left corner at (`left`, `top`).
    ///
    /// Returns the number of pixels that were painted.
    pub fn paint(
        &mut self,
        left: i32,
        top: i32,
        coverage: Coverage<'_>,
        color: Rgba<u8>,
    ) -> usize {
        let mut painted = 0;
        let rows = coverage.data.chunks_exact(coverage.width.max(1));
        for (dy, row) in rows.take(coverage.height).enumerate() {
            let y = i64::from(top) + dy as i64;
            if y < 0 || y >= i64::from(self.height()) {
                continue;
            }
            for (dx, &value) in row.iter().enumerate() {
                let x = i64::from(left) + dx as i64;
                if x < 0 || x >= i64::from(self.width()) || value < THRESHOLD {
                    continue;
                }
                self.image.put_pixel(x as u32, y as u32, color);
                painted += 1;
            }
        }
        painted
    }

    /// The underlying image
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
