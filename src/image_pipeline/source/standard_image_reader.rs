//! Image reader backed by the `image` crate.
//!
//! The format is sniffed from the content bytes, so any codec enabled in the
//! `image` crate (PNG, JPEG, GIF, BMP, ...) is accepted regardless of the
//! file extension.

use tracing::debug;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::source::reader::ImageSourceReader;
use crate::image_pipeline::source::types::SourceImage;

pub struct StandardImageReader;

impl ImageSourceReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage> {
        debug!("Decoding image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(SourceImage::from_dynamic(&decoded))
    }
}
