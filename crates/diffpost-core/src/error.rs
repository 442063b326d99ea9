use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffPostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid input: image is {actual_height}x{actual_width}, expected {expected_height}x{expected_width}")]
    DimensionMismatch {
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },

    #[error("Invalid image dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Invalid thresholds: require 0 <= t1 < t2, got t1={t1}, t2={t2}")]
    InvalidThresholds { t1: i32, t2: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl DiffPostError {
    /// Whether this error is a caller contract violation on buffer sizes.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::DimensionMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DiffPostError>;
