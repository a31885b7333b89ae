//! Decoded image types

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

/// A decoded image held at 16 bits per channel.
///
/// Every supported codec is widened to 16-bit RGBA on decode, so samplers
/// only ever deal with one channel precision.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: ImageBuffer<Rgba<u16>, Vec<u16>>,
}

impl SourceImage {
    pub fn new(pixels: ImageBuffer<Rgba<u16>, Vec<u16>>) -> Self {
        Self { pixels }
    }

    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::new(image.to_rgba16())
    }

    pub fn from_rgba8(image: RgbaImage) -> Self {
        Self::from_dynamic(&DynamicImage::ImageRgba8(image))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw 16-bit channels at `(x, y)`. Callers keep coordinates in bounds.
    pub fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.pixels.get_pixel(x, y).0
    }
}
