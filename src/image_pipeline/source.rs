//! Image source module
//!
//! Decodes raster images into a read-only 16-bit RGBA pixel grid.

mod reader;
mod standard_image_reader;
pub mod types;

pub use reader::ImageSourceReader;
pub use standard_image_reader::StandardImageReader;
pub use types::SourceImage;
