//! Sheet configuration and cell types

use std::fmt;

use crate::image_pipeline::color::ColorKey;
use crate::image_pipeline::common::error::{PipelineError, Result};

/// Converts a row height into column-width units so that cells come out
/// roughly square.
pub const ROW_HEIGHT_TO_COLUMN_WIDTH: f64 = 0.3528 / 2.2733;

/// Lower bound of the precomputed column label table.
pub const DEFAULT_LABEL_COLUMNS: u32 = 10_000;

/// Configuration for image to spreadsheet conversion
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Edge length of one grid cell in source pixels
    pub pixel_size: u32,
    /// Height of every output row; also drives the column width
    pub cell_height: f64,
    /// Name of the single output worksheet
    pub sheet_name: String,
    /// Worker threads for the cell fan-out; None uses the global rayon pool
    pub threads: Option<usize>,
    /// Whether to reject images with a zero dimension
    pub validate_dimensions: bool,
    /// Minimum number of column labels to precompute
    pub min_label_columns: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            pixel_size: 16,
            cell_height: 20.0,
            sheet_name: "Sheet1".to_string(),
            threads: None,
            validate_dimensions: true,
            min_label_columns: DEFAULT_LABEL_COLUMNS,
        }
    }
}

impl SheetConfig {
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::default()
    }

    pub fn column_width(&self) -> f64 {
        self.cell_height * ROW_HEIGHT_TO_COLUMN_WIDTH
    }

    pub fn validate(&self) -> Result<()> {
        if self.pixel_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "pixel size must be at least 1".to_string(),
            ));
        }
        if !self.cell_height.is_finite() || self.cell_height <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "cell height must be a positive number, got {}",
                self.cell_height
            )));
        }
        if self.threads == Some(0) {
            return Err(PipelineError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(PipelineError::InvalidConfig(
                "sheet name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SheetConfig
#[derive(Default)]
pub struct SheetConfigBuilder {
    pixel_size: Option<u32>,
    cell_height: Option<f64>,
    sheet_name: Option<String>,
    threads: Option<Option<usize>>,
    validate_dimensions: Option<bool>,
    min_label_columns: Option<u32>,
}

impl SheetConfigBuilder {
    pub fn pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = Some(pixel_size);
        self
    }

    pub fn cell_height(mut self, cell_height: f64) -> Self {
        self.cell_height = Some(cell_height);
        self
    }

    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn min_label_columns(mut self, columns: u32) -> Self {
        self.min_label_columns = Some(columns);
        self
    }

    pub fn build(self) -> SheetConfig {
        let default = SheetConfig::default();
        SheetConfig {
            pixel_size: self.pixel_size.unwrap_or(default.pixel_size),
            cell_height: self.cell_height.unwrap_or(default.cell_height),
            sheet_name: self.sheet_name.unwrap_or(default.sheet_name),
            threads: self.threads.unwrap_or(default.threads),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            min_label_columns: self.min_label_columns.unwrap_or(default.min_label_columns),
        }
    }
}

/// A1-style address of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// 1-based column number
    pub column: u32,
    /// 1-based row number
    pub row: u32,
    label: String,
}

impl CellAddress {
    pub fn new(column_label: &str, column: u32, row: u32) -> Self {
        Self {
            column,
            row,
            label: format!("{}{}", column_label, row),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Thin solid line, weight 1
    Thin,
}

/// Border and fill of one rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub fill: ColorKey,
    pub border: BorderStyle,
    pub border_color: ColorKey,
}

impl CellStyle {
    /// Solid `fill` with a thin black border on all four sides.
    pub fn swatch(fill: ColorKey) -> Self {
        Self {
            fill,
            border: BorderStyle::Thin,
            border_color: ColorKey::from_rgb(0, 0, 0),
        }
    }
}
