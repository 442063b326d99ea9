use ndarray::{Array2, Axis, Zip};
use rayon::prelude::*;

use crate::consts::{SAMPLE_MAX, SAMPLE_MIN, SHARPEN_CENTER_WEIGHT};
use crate::error::Result;
use crate::frame::Image;

/// Saturating clamp: `lo` below the range, `hi` above it, `x` otherwise.
pub fn clamp(x: i64, lo: i32, hi: i32) -> i32 {
    if x < lo as i64 {
        lo
    } else if x > hi as i64 {
        hi
    } else {
        x as i32
    }
}

/// Output sample at `(row, col)`.
///
/// Border samples pass through unchanged. Interior samples use the
/// 4-neighbor stencil:
///   0 -1  0
///  -1  5 -1
///   0 -1  0
/// clamped to `[SAMPLE_MIN, SAMPLE_MAX]`.
pub fn sharpen_at(data: &Array2<i32>, row: usize, col: usize) -> i32 {
    let (h, w) = data.dim();
    let center = data[[row, col]];
    if row == 0 || col == 0 || row + 1 == h || col + 1 == w {
        return center;
    }

    let val = SHARPEN_CENTER_WEIGHT * center as i64
        - data[[row - 1, col]] as i64
        - data[[row + 1, col]] as i64
        - data[[row, col - 1]] as i64
        - data[[row, col + 1]] as i64;
    clamp(val, SAMPLE_MIN, SAMPLE_MAX)
}

/// Sharpen a classification image.
///
/// Takes the whole input by reference, so every neighbor is final before
/// any output sample is computed.
pub fn sharpen(image: &Image) -> Result<Image> {
    let data = &image.data;
    let mut out = Array2::<i32>::zeros(data.dim());
    Zip::indexed(&mut out).for_each(|(row, col), o| {
        *o = sharpen_at(data, row, col);
    });
    Ok(Image::new(out))
}

/// Rayon-parallel [`sharpen`], one output row per task. Output is identical.
pub fn sharpen_parallel(image: &Image) -> Result<Image> {
    let data = &image.data;
    let mut out = Array2::<i32>::zeros(data.dim());
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut out_row)| {
            for (col, o) in out_row.iter_mut().enumerate() {
                *o = sharpen_at(data, row, col);
            }
        });
    Ok(Image::new(out))
}
