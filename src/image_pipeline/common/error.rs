use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write cell {cell}: {message}")]
    CellWriteError { cell: String, message: String },

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Column {0} is outside the precomputed label table")]
    ColumnOutOfRange(u32),

    #[error("Failed to build worker pool: {0}")]
    ThreadPoolError(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
