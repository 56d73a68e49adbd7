//! # The embedded font

use fontdue::{Font, FontSettings};

use crate::Error;

/// DejaVu Sans Mono, see `res/DejaVu-LICENSE`
pub static EMBEDDED: &[u8] = include_bytes!("../res/DejaVuSansMono.ttf");

/// Resolution the font size is scaled with
pub const DPI: f32 = 300.0;

/// Parse the embedded font
pub fn load() -> Result<Font, Error> {
    let font = Font::from_bytes(EMBEDDED, FontSettings::default()).map_err(Error::Font)?;
    log::debug!("Loaded font {:?}", font.name());
    Ok(font)
}

/// Convert a size in points to pixels at [`DPI`]
pub fn points_to_pixels(points: f32) -> f32 {
    points * DPI / 72.0
}

/// Convert a size in points to 26.6 fixed point pixels at [`DPI`],
/// truncating any fraction below 1/64th of a pixel
pub fn points_to_fixed(points: f32) -> i32 {
    (points_to_pixels(points) * 64.0).trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::{load, points_to_fixed, points_to_pixels};

    #[test]
    fn test_load() {
        let font = load().unwrap();
        for c in ['A', 'g', '0', '~', 'ä', '€'] {
            assert!(font.has_glyph(c), "{:?}", c);
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(points_to_pixels(72.0), 300.0);
        assert_eq!(points_to_pixels(12.0), 50.0);
        assert_eq!(points_to_fixed(12.0), 50 * 64);
        // 2.67/64 px
        assert_eq!(points_to_fixed(0.01), 2);
    }
}
