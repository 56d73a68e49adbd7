//! # Fitting the text onto the page

/// Width of the page in pixels (A4 at 300 DPI)
pub const PAGE_WIDTH: u32 = 2480;
/// Height of the page in pixels (A4 at 300 DPI)
pub const PAGE_HEIGHT: u32 = 3508;
/// Aspect ratio of the page (height / width)
pub const RATIO: f64 = PAGE_HEIGHT as f64 / PAGE_WIDTH as f64;
/// The span (in points) that the longer side of the text block is scaled to
pub const TARGET_SPAN: f64 = 800.0;

/// The dimensions of a text and the font size derived from them
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    /// The length of the longest line, in characters
    pub width: usize,
    /// The number of lines
    pub height: usize,
    /// The font size in points, `None` if there is nothing to draw
    pub font_size: Option<f32>,
}

impl Layout {
    /// Measure the lines and pick a font size
    pub fn of<S: AsRef<str>>(lines: &[S]) -> Self {
        let width = lines
            .iter()
            .map(|s| s.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        Self::new(width, lines.len())
    }

    /// Pick a font size for a text of `width` columns and `height` lines
    pub fn new(width: usize, height: usize) -> Self {
        let factor = f64::max(width as f64 * RATIO, height as f64);
        let font_size = if factor > 0.0 {
            let size = (TARGET_SPAN / factor) as f32;
            log::info!("Font size: {:.3}pt", size);
            Some(size)
        } else {
            log::info!("Empty input, rendering a blank page");
            None
        };
        Self {
            width,
            height,
            font_size,
        }
    }
}
