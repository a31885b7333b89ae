//! Spreadsheet output module
//!
//! The document sink abstraction, its XLSX implementation, and the renderer
//! that turns one sampled grid cell into a styled spreadsheet cell.

mod renderer;
mod writer;
mod xlsx_sheet_writer;
pub mod types;

#[cfg(test)]
mod tests;

pub use renderer::CellRenderer;
pub use writer::SheetWriter;
pub use xlsx_sheet_writer::XlsxSheetWriter;
pub use types::{BorderStyle, CellAddress, CellStyle, SheetConfig, SheetConfigBuilder};
