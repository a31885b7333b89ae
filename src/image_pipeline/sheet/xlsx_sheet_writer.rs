//! Spreadsheet sink writing `.xlsx` workbooks through `rust_xlsxwriter`.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use tracing::debug;

use crate::image_pipeline::color::ColorKey;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::sheet::types::{BorderStyle, CellAddress, CellStyle};
use crate::image_pipeline::sheet::writer::SheetWriter;

/// Builds a one-sheet workbook in memory and writes it out on `save`.
///
/// Not safe for concurrent use; the pipeline serialises every call behind a
/// single lock.
pub struct XlsxSheetWriter {
    worksheet: Worksheet,
    formats: HashMap<ColorKey, Format>,
}

impl XlsxSheetWriter {
    pub fn new(sheet_name: &str) -> Result<Self> {
        let mut worksheet = Worksheet::new();
        worksheet
            .set_name(sheet_name)
            .map_err(|e| PipelineError::InvalidConfig(format!("sheet name {:?}: {}", sheet_name, e)))?;
        Ok(Self {
            worksheet,
            formats: HashMap::new(),
        })
    }

    fn format_for(&mut self, style: &CellStyle) -> &Format {
        self.formats.entry(style.fill.clone()).or_insert_with(|| {
            let border = match style.border {
                BorderStyle::Thin => FormatBorder::Thin,
            };
            Format::new()
                .set_border(border)
                .set_border_color(Color::RGB(style.border_color.rgb()))
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(style.fill.rgb()))
        })
    }
}

fn zero_based_column(column: u32) -> Option<u16> {
    column.checked_sub(1).and_then(|c| u16::try_from(c).ok())
}

fn zero_based_row(row: u32) -> Option<u32> {
    row.checked_sub(1)
}

impl SheetWriter for XlsxSheetWriter {
    fn write_cell(&mut self, address: &CellAddress, value: u32, style: &CellStyle) -> Result<()> {
        let cell_error = |message: String| PipelineError::CellWriteError {
            cell: address.to_string(),
            message,
        };
        let row = zero_based_row(address.row)
            .ok_or_else(|| cell_error("row must be 1-based".to_string()))?;
        let column = zero_based_column(address.column)
            .ok_or_else(|| cell_error("column outside the worksheet".to_string()))?;

        let format = self.format_for(style).clone();
        self.worksheet
            .write_number_with_format(row, column, f64::from(value), &format)
            .map_err(|e| cell_error(e.to_string()))?;
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        let index = zero_based_row(row).ok_or_else(|| PipelineError::CellWriteError {
            cell: format!("row {}", row),
            message: "row must be 1-based".to_string(),
        })?;
        self.worksheet
            .set_row_height(index, height)
            .map_err(|e| PipelineError::CellWriteError {
                cell: format!("row {}", row),
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn set_column_width(&mut self, first: u32, last: u32, width: f64) -> Result<()> {
        debug!("Setting width {:.4} on columns {}..={}", width, first, last);
        for column in first..=last {
            let index = zero_based_column(column).ok_or_else(|| PipelineError::CellWriteError {
                cell: format!("column {}", column),
                message: "column outside the worksheet".to_string(),
            })?;
            self.worksheet
                .set_column_width(index, width)
                .map_err(|e| PipelineError::CellWriteError {
                    cell: format!("column {}", column),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        debug!("Saving workbook to {}", path.display());
        let mut workbook = Workbook::new();
        workbook.push_worksheet(std::mem::replace(&mut self.worksheet, Worksheet::new()));
        workbook
            .save(path)
            .map_err(|e| PipelineError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}
