use crossterm::style::{Color, Stylize};
use image::imageops::FilterType;
use image::{ImageError, Rgba, RgbaImage, load_from_memory};
use std::fmt::{self, Display};

const UPPER_HALF: char = '\u{2580}';
const LOWER_HALF: char = '\u{2584}';
const MIN_ALPHA: u8 = 128;

/// A skin icon scaled down for the terminal. Each character cell holds two
/// vertically stacked pixels.
#[derive(Debug)]
pub struct Icon(RgbaImage);

impl Icon {
    pub fn decode(bytes: &[u8], width: u32) -> Result<Self, ImageError> {
        let image = load_from_memory(bytes)?;
        let width = width.clamp(1, image.width().max(1));
        let scaled = u64::from(image.height()) * u64::from(width) / u64::from(image.width().max(1));
        let height = scaled.max(1) as u32;
        Ok(Self(
            image
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgba8(),
        ))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if y >= self.0.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.0.get_pixel(x, y);
        (a >= MIN_ALPHA).then_some(Color::Rgb { r, g, b })
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.0.height()).step_by(2) {
            for x in 0..self.0.width() {
                match (self.pixel(x, y), self.pixel(x, y + 1)) {
                    (None, None) => write!(f, " ")?,
                    (Some(top), None) => write!(f, "{}", UPPER_HALF.with(top))?,
                    (None, Some(bottom)) => write!(f, "{}", LOWER_HALF.with(bottom))?,
                    (Some(top), Some(bottom)) => write!(f, "{}", UPPER_HALF.with(top).on(bottom))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
