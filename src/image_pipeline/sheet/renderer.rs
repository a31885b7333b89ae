use crate::image_pipeline::color::ColorKey;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::{ColumnLabelTable, GridCoordinate};
use crate::image_pipeline::sheet::types::{CellAddress, CellStyle};
use crate::image_pipeline::sheet::writer::SheetWriter;

/// Writes one grid cell as a styled spreadsheet cell.
pub struct CellRenderer<'a> {
    labels: &'a ColumnLabelTable,
    cell_height: f64,
}

impl<'a> CellRenderer<'a> {
    pub fn new(labels: &'a ColumnLabelTable, cell_height: f64) -> Self {
        Self { labels, cell_height }
    }

    pub fn address(&self, coord: GridCoordinate) -> Result<CellAddress> {
        let column = coord.sheet_column();
        let label = self
            .labels
            .get(column)
            .ok_or(PipelineError::ColumnOutOfRange(column))?;
        Ok(CellAddress::new(label, column, coord.sheet_row()))
    }

    /// Writes `id` filled with `color` at `coord`, then sets that row's
    /// height. Every cell of a row sets the same height.
    pub fn render<W: SheetWriter + ?Sized>(
        &self,
        writer: &mut W,
        coord: GridCoordinate,
        id: u32,
        color: &ColorKey,
    ) -> Result<CellAddress> {
        let address = self.address(coord)?;
        self.render_at(writer, &address, id, color)?;
        Ok(address)
    }

    /// Same as `render`, for an address already resolved with `address`.
    pub fn render_at<W: SheetWriter + ?Sized>(
        &self,
        writer: &mut W,
        address: &CellAddress,
        id: u32,
        color: &ColorKey,
    ) -> Result<()> {
        let style = CellStyle::swatch(color.clone());
        writer.write_cell(address, id, &style)?;
        writer.set_row_height(address.row, self.cell_height)
    }
}
