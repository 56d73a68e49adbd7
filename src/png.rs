//! # Writing the PNG file

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{codecs::png::PngEncoder, RgbaImage};

use crate::Error;

/// Encode `image` as PNG into the file at `path`, replacing it if it exists.
///
/// The file is written in place, an error midway may leave a truncated file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(Error::io(path))?;
    let mut writer = BufWriter::new(file);
    image.write_with_encoder(PngEncoder::new(&mut writer))?;
    writer.flush().map_err(Error::io(path))?;
    log::info!(
        "Saved {}x{} image to '{}'",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
