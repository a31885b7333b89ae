use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::types::SourceImage;

pub trait ImageSourceReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage>;
}
