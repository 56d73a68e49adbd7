//! # Plain text to PNG
//!
//! This crate renders the lines of a text file onto a single A4 page at
//! 300 DPI. The font size is chosen so that the whole text block fits into
//! the page, and the result is written as a PNG image.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`confirm`] asks before an existing output file is replaced
//! 2. [`text`] reads the input lines
//! 3. [`layout`] derives the font size from the text dimensions
//! 4. [`render`] draws the lines onto a [`canvas::Canvas`]
//! 5. [`png`] encodes the canvas and writes it out
#![warn(missing_docs)]

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use displaydoc::Display;
use thiserror::Error;

pub mod canvas;
pub mod confirm;
pub mod font;
pub mod layout;
pub mod png;
pub mod render;
pub mod text;

pub use layout::Layout;

/// The name of the output file, relative to the current directory
pub const OUT_FILE: &str = "out.png";

/// Error when converting a text file
#[derive(Debug, Display, Error)]
pub enum Error {
    /// I/O error on {path:?}: {source}
    Io {
        /// The file involved
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// Console I/O failed: {0}
    Console(#[source] io::Error),
    /// Failed to load the embedded font: {0}
    Font(&'static str),
    /// No glyph for {ch:?} in line {line}
    MissingGlyph {
        /// The character that could not be drawn
        ch: char,
        /// The (1-based) line number
        line: usize,
    },
    /// Failed to encode the image: {0}
    Encode(#[from] image::ImageError),
    /// Not overwriting the existing output file
    Declined,
}

impl Error {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}

/// Render the text file at `input` into a PNG image at `output`.
///
/// If `output` already exists, the user is asked for confirmation via
/// `stdin` first. Progress messages go to `stdout`.
pub fn convert<R, W>(input: &Path, output: &Path, stdin: R, mut stdout: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let exists = output.try_exists().map_err(Error::io(output))?;
    if exists && !confirm::confirm_overwrite(output, stdin, &mut stdout)? {
        return Err(Error::Declined);
    }

    let lines = text::read_lines(input)?;
    let layout = Layout::of(&lines);
    writeln!(stdout, "Width x Height: {}x{}", layout.width, layout.height)
        .map_err(Error::Console)?;

    let font = font::load()?;
    let canvas = render::render(&font, &lines, &layout)?;

    png::write_png(canvas.as_image(), output)?;
    writeln!(stdout, "Wrote {} OK.", output.display()).map_err(Error::Console)?;
    Ok(())
}
