//! Reference oracle for validating an alternate execution path.
//!
//! The oracle re-derives both stages over flat row-major slices with explicit
//! index arithmetic, independent of the `filters` module, and compares a
//! candidate result sample by sample.

use std::fmt;

use crate::consts::{LEVEL_HIGH, LEVEL_LOW, LEVEL_MID, SAMPLE_MAX, SAMPLE_MIN};
use crate::error::{DiffPostError, Result};
use crate::filters::Thresholds;
use crate::frame::Dimensions;

/// First sample where a candidate result disagrees with the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: i32,
    pub actual: i32,
}

impl Mismatch {
    /// `(row, col)` of the mismatch in an image of `dims`.
    pub fn position(&self, dims: Dimensions) -> (usize, usize) {
        dims.position(self.index)
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mismatch at index {}: expected {}, got {}",
            self.index, self.expected, self.actual
        )
    }
}

/// Outcome of an exact comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(Mismatch),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Passed => None,
            Self::Failed(m) => Some(m),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed(_) => write!(f, "FAILED"),
        }
    }
}

/// Compare two results in index order, stopping at the first difference.
///
/// No tolerance is applied.
pub fn compare(expected: &[i32], actual: &[i32]) -> Result<Verdict> {
    if expected.len() != actual.len() {
        return Err(DiffPostError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    let first = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .map(|index| Mismatch {
            index,
            expected: expected[index],
            actual: actual[index],
        });
    Ok(match first {
        Some(m) => Verdict::Failed(m),
        None => Verdict::Passed,
    })
}

/// Reference implementation for a fixed image size and threshold pair.
#[derive(Clone, Copy, Debug)]
pub struct Oracle {
    dims: Dimensions,
    thresholds: Thresholds,
}

impl Oracle {
    pub fn new(dims: Dimensions, thresholds: Thresholds) -> Self {
        Self { dims, thresholds }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    fn check_len(&self, samples: &[i32]) -> Result<()> {
        let expected = self.dims.pixel_count();
        if samples.len() != expected {
            return Err(DiffPostError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(())
    }

    /// Expected pipeline output for inputs `a` and `b`.
    pub fn expected(&self, a: &[i32], b: &[i32]) -> Result<Vec<i32>> {
        self.check_len(a)?;
        self.check_len(b)?;

        let t1 = self.thresholds.t1() as i64;
        let t2 = self.thresholds.t2() as i64;
        let posterized: Vec<i32> = a
            .iter()
            .zip(b)
            .map(|(&x, &y)| {
                let abs_diff = (x as i64 - y as i64).abs();
                if abs_diff < t1 {
                    LEVEL_LOW
                } else if abs_diff < t2 {
                    LEVEL_MID
                } else {
                    LEVEL_HIGH
                }
            })
            .collect();

        let (h, w) = (self.dims.height, self.dims.width);
        let mut out = vec![0i32; h * w];
        for i in 0..h {
            for j in 0..w {
                let idx = i * w + j;
                if i == 0 || i == h - 1 || j == 0 || j == w - 1 {
                    out[idx] = posterized[idx];
                    continue;
                }
                let center = posterized[idx] as i64;
                let up = posterized[(i - 1) * w + j] as i64;
                let down = posterized[(i + 1) * w + j] as i64;
                let left = posterized[i * w + (j - 1)] as i64;
                let right = posterized[i * w + (j + 1)] as i64;
                let val = 5 * center - up - down - left - right;
                out[idx] = val.clamp(SAMPLE_MIN as i64, SAMPLE_MAX as i64) as i32;
            }
        }
        Ok(out)
    }

    /// Check a candidate result produced elsewhere against the reference.
    pub fn check(&self, a: &[i32], b: &[i32], actual: &[i32]) -> Result<Verdict> {
        self.check_len(actual)?;
        let expected = self.expected(a, b)?;
        compare(&expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_results_pass() {
        let v = vec![1, 2, 3];
        assert_eq!(compare(&v, &v).unwrap(), Verdict::Passed);
    }

    #[test]
    fn reports_first_difference_only() {
        let expected = vec![0, 1, 2, 3];
        let actual = vec![0, 9, 2, 8];
        let verdict = compare(&expected, &actual).unwrap();
        assert_eq!(
            verdict,
            Verdict::Failed(Mismatch {
                index: 1,
                expected: 1,
                actual: 9
            })
        );
    }

    #[test]
    fn length_disagreement_is_an_error() {
        assert!(compare(&[1, 2], &[1]).is_err());
    }
}
