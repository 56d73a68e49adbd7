//! # Drawing the text
//!
//! Positions are kept in 26.6 fixed point, i.e. in 1/64th of a pixel, so
//! that the baseline advances by exactly the same amount for every line.

use std::collections::HashMap;

use fontdue::{Font, Metrics};
use image::Rgba;
use log::{debug, info};

use crate::{
    canvas::{Canvas, Coverage, BLACK, WHITE},
    font::{points_to_fixed, points_to_pixels},
    layout::{Layout, PAGE_HEIGHT, PAGE_WIDTH},
    Error,
};

/// Distance of the text block from the left and top edge, in pixels
pub const MARGIN: i32 = 50;

/// A point in 26.6 fixed point pixels
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    /// The horizontal offset
    pub x: i32,
    /// The vertical offset of the baseline
    pub y: i32,
}

impl Point {
    /// Create a point from whole pixels
    pub fn pt(x: i32, y: i32) -> Self {
        Self { x: x << 6, y: y << 6 }
    }
}

/// Draws text with a single font and size
pub struct Context<'f> {
    font: &'f Font,
    px: f32,
    foreground: Rgba<u8>,
    glyphs: HashMap<char, (Metrics, Vec<u8>)>,
}

impl<'f> Context<'f> {
    /// Create a context for drawing `font` at `size` points in black
    pub fn new(font: &'f Font, size: f32) -> Self {
        Self {
            font,
            px: points_to_pixels(size),
            foreground: BLACK,
            glyphs: HashMap::new(),
        }
    }

    /// The size of the font in pixels
    pub fn pixel_size(&self) -> f32 {
        self.px
    }

    /// Draw a single line of text with the baseline starting at `pen`.
    ///
    /// Control characters are skipped. `line` is only used for error reporting.
    /// Returns the pen position after the last glyph.
    pub fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        pen: Point,
        line: usize,
    ) -> Result<Point, Error> {
        let baseline = pen.y >> 6;
        let mut x = pen.x as f32 / 64.0;
        let mut prev = None;
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            if !self.font.has_glyph(ch) {
                return Err(Error::MissingGlyph { ch, line });
            }
            if let Some(left) = prev {
                x += self.font.horizontal_kern(left, ch, self.px).unwrap_or(0.0);
            }

            let (font, px) = (self.font, self.px);
            let (metrics, bitmap) = self
                .glyphs
                .entry(ch)
                .or_insert_with(|| font.rasterize(ch, px));
            let left = x.round() as i32 + metrics.xmin;
            let top = baseline - metrics.ymin - metrics.height as i32;
            let coverage = Coverage {
                width: metrics.width,
                height: metrics.height,
                data: bitmap.as_slice(),
            };
            canvas.paint(left, top, coverage, self.foreground);

            x += metrics.advance_width;
            prev = Some(ch);
        }
        Ok(Point {
            x: (x * 64.0).round() as i32,
            y: pen.y,
        })
    }
}

/// Render the lines onto a blank page
pub fn render<S: AsRef<str>>(
    font: &Font,
    lines: &[S],
    layout: &Layout,
) -> Result<Canvas, Error> {
    let mut canvas = Canvas::new(PAGE_WIDTH, PAGE_HEIGHT, WHITE);
    let size = match layout.font_size {
        Some(size) => size,
        None => return Ok(canvas),
    };

    let mut ctx = Context::new(font, size);
    let step = points_to_fixed(size);
    debug!("{}px per line ({}/64)", ctx.pixel_size(), step);

    let mut pen = Point::pt(MARGIN, MARGIN + (step >> 6));
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        debug!("Line {} at y={}", index + 1, pen.y >> 6);
        ctx.draw_line(&mut canvas, line, pen, index + 1)?;
        pen.y += step;
    }
    info!("Rendered {} lines", lines.len());
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use crate::{
        canvas::{Canvas, BLACK, WHITE},
        font, Error, Layout,
    };

    use super::{render, Context, Point, MARGIN};

    fn ink(canvas: &Canvas) -> Vec<(u32, u32)> {
        canvas
            .as_image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_draw_line() {
        let font = font::load().unwrap();
        let mut canvas = Canvas::new(400, 100, WHITE);
        let mut ctx = Context::new(&font, 12.0);
        assert_eq!(ctx.pixel_size(), 50.0);

        let pen = Point::pt(10, 60);
        let end = ctx.draw_line(&mut canvas, "Hi", pen, 1).unwrap();
        assert_eq!(end.y, pen.y);
        // two monospaced glyphs, 0.6em each
        let advance = (end.x - pen.x) as f32 / 64.0;
        assert!((advance - 60.0).abs() < 2.0, "{}", advance);

        let ink = ink(&canvas);
        assert!(!ink.is_empty());
        for (x, y) in ink {
            assert!((10..80).contains(&x), "{}", x);
            // cap height is above the baseline
            assert!((20..60).contains(&y), "{}", y);
        }
    }

    #[test]
    fn test_control_chars() {
        let font = font::load().unwrap();
        let mut canvas = Canvas::new(200, 100, WHITE);
        let mut ctx = Context::new(&font, 12.0);
        let pen = Point::pt(0, 60);
        let a = ctx.draw_line(&mut canvas, "ab", pen, 1).unwrap();
        let b = ctx.draw_line(&mut canvas, "a\tb\u{c}", pen, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_glyph() {
        let font = font::load().unwrap();
        let mut canvas = Canvas::new(200, 100, WHITE);
        let mut ctx = Context::new(&font, 12.0);
        let err = ctx
            .draw_line(&mut canvas, "ab漢", Point::pt(0, 60), 7)
            .unwrap_err();
        assert!(matches!(err, Error::MissingGlyph { ch: '漢', line: 7 }));
    }

    #[test]
    fn test_render_blank() {
        let font = font::load().unwrap();
        let lines: [&str; 0] = [];
        let canvas = render(&font, &lines, &Layout::of(&lines)).unwrap();
        assert_eq!(canvas.width(), 2480);
        assert_eq!(canvas.height(), 3508);
        assert!(canvas.as_image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_render_block() {
        let font = font::load().unwrap();
        let lines = ["H"; 4];
        let layout = Layout::of(&lines);
        let canvas = render(&font, &lines, &layout).unwrap();
        let px = font::points_to_pixels(layout.font_size.unwrap()) as u32;

        let ink = ink(&canvas);
        assert!(!ink.is_empty());
        let margin = MARGIN as u32;
        let bottom = margin + 4 * px + 4;
        for &(x, y) in &ink {
            assert!(x >= margin && x < margin + px, "{}", x);
            assert!(y >= margin && y < bottom, "{}", y);
        }
        // every line got a glyph
        for line in 0..4 {
            let top = margin + line * px;
            assert!(ink.iter().any(|&(_, y)| y >= top && y < top + px));
        }
    }
}
