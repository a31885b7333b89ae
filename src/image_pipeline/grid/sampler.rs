use crate::image_pipeline::grid::types::{GridCoordinate, SampledColor};
use crate::image_pipeline::source::SourceImage;

/// Picks the approximate centre pixel of each `pixel_size` square cell.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    pixel_size: u32,
}

impl GridSampler {
    pub fn new(pixel_size: u32) -> Self {
        Self { pixel_size }
    }

    /// Source pixel standing in for `coord`, clamped into the image so the
    /// trailing partial cells never read out of bounds. The image must be
    /// non-empty.
    pub fn source_pixel(&self, image: &SourceImage, coord: GridCoordinate) -> (u32, u32) {
        let size = u64::from(self.pixel_size);
        let half = size / 2;
        let x = u64::from(coord.column) * size + half;
        let y = u64::from(coord.row) * size + half;
        let max_x = u64::from(image.width().saturating_sub(1));
        let max_y = u64::from(image.height().saturating_sub(1));
        (x.min(max_x) as u32, y.min(max_y) as u32)
    }

    pub fn sample(&self, image: &SourceImage, coord: GridCoordinate) -> SampledColor {
        let (x, y) = self.source_pixel(image, coord);
        SampledColor::from_rgba16(image.rgba16(x, y))
    }
}
