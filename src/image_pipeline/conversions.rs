//! Pipeline conversions module
//!
//! This module contains the orchestration of the image to spreadsheet
//! conversion and its timing bookkeeping.

mod image_to_sheet;
mod timing;


pub use image_to_sheet::{ImageToSheetPipeline, SheetSummary};
pub use timing::PipelineTimings;
