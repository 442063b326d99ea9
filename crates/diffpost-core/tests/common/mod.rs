#![allow(dead_code)]

use diffpost_core::frame::{Dimensions, Image};

pub fn dims(height: usize, width: usize) -> Dimensions {
    Dimensions::new(height, width).expect("non-zero dimensions")
}

/// Image from nested rows, for small hand-written grids.
pub fn image_from_rows(rows: &[&[i32]]) -> Image {
    let height = rows.len();
    let width = rows[0].len();
    let flat: Vec<i32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Image::from_vec(dims(height, width), flat).expect("rows form a rectangle")
}

pub fn filled(height: usize, width: usize, value: i32) -> Image {
    Image::filled(dims(height, width), value)
}

/// Deterministic non-uniform 8-bit pattern.
pub fn pattern(height: usize, width: usize, salt: usize) -> Image {
    let samples = (0..height * width)
        .map(|i| ((i * 37 + salt * 101 + (i / width) * 13) % 256) as i32)
        .collect();
    Image::from_vec(dims(height, width), samples).expect("pattern size")
}

/// Every border sample as `(row, col)`.
pub fn border_positions(d: Dimensions) -> Vec<(usize, usize)> {
    (0..d.height)
        .flat_map(|r| (0..d.width).map(move |c| (r, c)))
        .filter(|&(r, c)| d.is_border(r, c))
        .collect()
}
