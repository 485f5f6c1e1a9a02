use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized format: {0}")]
    Format(String),

    #[error("Buffer size mismatch: expected at least {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },

    #[error("Frame size required for pixel format {0}")]
    MissingFrameSize(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unmatching image shapes: {reference:?} vs {capture:?}")]
    Shape {
        reference: (usize, usize, usize),
        capture: (usize, usize, usize),
    },

    #[error("Image {width}x{height} is smaller than the {window}x{window} SSIM window")]
    ImageTooSmall {
        width: usize,
        height: usize,
        window: usize,
    },

    #[error("Number of channels does not match: expected {expected}, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("Sample file not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot load image {name}: {source}")]
    Load {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Quality measurement method not found: {0}")]
    Method(String),

    #[error("Channel index {index} out of range (channels: {channels})")]
    ChannelOutOfRange { index: usize, channels: usize },

    #[error("Region contains no pixels")]
    EmptyRegion,

    #[error("No sample pairs to compare")]
    EmptySamples,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ColorscopeError>;
