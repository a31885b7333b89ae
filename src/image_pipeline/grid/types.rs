//! Grid geometry and sampled colour types

use crate::image_pipeline::color::ColorKey;

/// Number of grid cells spanning an image, counting trailing partial cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    /// `pixel_size` must be at least 1.
    pub fn from_image(width: u32, height: u32, pixel_size: u32) -> Self {
        Self {
            columns: width.div_ceil(pixel_size),
            rows: height.div_ceil(pixel_size),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Maps a flat cell index to its coordinate, column-major: all rows of
    /// column 0 first, then column 1, and so on.
    pub fn coordinate(&self, index: usize) -> GridCoordinate {
        let rows = self.rows as usize;
        GridCoordinate {
            column: (index / rows) as u32,
            row: (index % rows) as u32,
        }
    }
}

/// 0-based position of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub column: u32,
    pub row: u32,
}

impl GridCoordinate {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// 1-based spreadsheet column.
    pub fn sheet_column(&self) -> u32 {
        self.column + 1
    }

    /// 1-based spreadsheet row.
    pub fn sheet_row(&self) -> u32 {
        self.row + 1
    }
}

/// 8-bit colour of the representative pixel of one cell, with RGB
/// premultiplied by alpha. Alpha itself never takes part in keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SampledColor {
    /// Takes straight (non-premultiplied) 16-bit channels. Fully transparent
    /// pixels always come out black, whatever RGB the encoder stored.
    pub fn from_rgba16(channels: [u16; 4]) -> Self {
        let [r, g, b, a] = channels.map(u32::from);
        let premultiply = |c: u32| ((c * a / 0xFFFF) >> 8) as u8;
        Self {
            r: premultiply(r),
            g: premultiply(g),
            b: premultiply(b),
            a: (a >> 8) as u8,
        }
    }

    pub fn key(&self) -> ColorKey {
        ColorKey::from_rgb(self.r, self.g, self.b)
    }
}
