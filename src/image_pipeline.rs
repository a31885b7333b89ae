//! Image processing pipeline module
//!
//! Samples a raster image on a regular grid and renders each cell as a
//! coloured, numbered spreadsheet cell. Decoding, grid sampling, colour
//! indexing and sheet output live in separate modules; `conversions` wires
//! them together.

pub mod color;
pub mod common;
pub mod conversions;
pub mod grid;
pub mod sheet;
pub mod source;

pub use common::{
    PipelineError,
    Result,
};

pub use source::{
    ImageSourceReader,
    SourceImage,
    StandardImageReader,
};

pub use grid::{
    column_label,
    ColumnLabelTable,
    GridCoordinate,
    GridDimensions,
    GridSampler,
    SampledColor,
};

pub use color::{
    ColorIndex,
    ColorKey,
    ColorTable,
};

pub use sheet::{
    CellAddress,
    CellRenderer,
    CellStyle,
    SheetConfig,
    SheetConfigBuilder,
    SheetWriter,
    XlsxSheetWriter,
};

pub use conversions::{
    ImageToSheetPipeline,
    PipelineTimings,
    SheetSummary,
};
