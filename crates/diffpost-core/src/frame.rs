use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{DiffPostError, Result};

/// Image grid size, in samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    /// Create dimensions, rejecting empty grids.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(DiffPostError::InvalidDimensions { height, width });
        }
        Ok(Self { height, width })
    }

    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// `(row, col)` of a row-major flat index.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// True on the outermost rows and columns, where the 4-neighbor
    /// stencil is undefined.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A single grayscale image of signed integer samples.
///
/// Source images hold 8-bit values; intermediate images may leave that range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<i32>,
}

impl Image {
    pub fn new(data: Array2<i32>) -> Self {
        Self { data }
    }

    /// Build an image from a flat row-major sample sequence.
    ///
    /// The sequence length must equal `dims.pixel_count()`.
    pub fn from_vec(dims: Dimensions, samples: Vec<i32>) -> Result<Self> {
        if samples.len() != dims.pixel_count() {
            return Err(DiffPostError::LengthMismatch {
                expected: dims.pixel_count(),
                actual: samples.len(),
            });
        }
        let data = Array2::from_shape_vec((dims.height, dims.width), samples).map_err(|_| {
            DiffPostError::InvalidDimensions {
                height: dims.height,
                width: dims.width,
            }
        })?;
        Ok(Self { data })
    }

    pub fn filled(dims: Dimensions, value: i32) -> Self {
        Self::new(Array2::from_elem((dims.height, dims.width), value))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            height: self.height(),
            width: self.width(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.data.get([row, col]).copied()
    }

    /// Samples in row-major order.
    pub fn to_vec(&self) -> Vec<i32> {
        self.data.iter().copied().collect()
    }

    /// Fail with an input error unless this image has exactly `dims`.
    pub fn ensure_dimensions(&self, dims: Dimensions) -> Result<()> {
        let actual = self.dimensions();
        if actual != dims {
            return Err(DiffPostError::DimensionMismatch {
                expected_height: dims.height,
                expected_width: dims.width,
                actual_height: actual.height,
                actual_width: actual.width,
            });
        }
        Ok(())
    }
}
