use std::path::Path;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::sheet::types::{CellAddress, CellStyle};

/// Document sink for a single-sheet spreadsheet. Rows and columns are
/// 1-based.
pub trait SheetWriter {
    fn write_cell(&mut self, address: &CellAddress, value: u32, style: &CellStyle) -> Result<()>;
    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()>;
    fn set_column_width(&mut self, first: u32, last: u32, width: f64) -> Result<()>;
    /// Writes the finished document to `path`. Called once per run.
    fn save(&mut self, path: &Path) -> Result<()>;
}
