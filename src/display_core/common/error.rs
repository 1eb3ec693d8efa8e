use thiserror::Error;

use crate::display_core::sample::Representation;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Invalid sample buffer: {0}")]
    InvalidBufferError(String),

    #[error("Degenerate display range: min={min}, max={max}")]
    DegenerateRangeError { min: f64, max: f64 },

    #[error("Unsupported sample representation: {0:?}")]
    UnsupportedRepresentationError(Representation),

    #[error("Frame index {index} out of range for a series of {len} frames")]
    IndexOutOfRangeError { index: usize, len: usize },

    #[error("Frame series is empty")]
    EmptySeriesError,

    #[error("Invalid parameter: {0}")]
    InvalidParameterError(String),

    #[error("Frame metadata has already been set")]
    MetadataAlreadySetError,

    #[error("Demosaic failed: {0}")]
    DemosaicError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
