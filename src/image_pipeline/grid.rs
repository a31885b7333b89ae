//! Grid module
//!
//! Splits a source image into square cells and picks one representative
//! pixel per cell. Also owns the spreadsheet column naming used to address
//! those cells.

mod columns;
mod sampler;
pub mod types;


pub use columns::{column_label, ColumnLabelTable};
pub use sampler::GridSampler;
pub use types::{GridCoordinate, GridDimensions, SampledColor};
