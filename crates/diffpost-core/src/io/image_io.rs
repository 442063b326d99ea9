use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};
use crate::error::Result;
use crate::frame::{Dimensions, Image};

use super::raw::load_raw;

/// File extension, lower-cased.
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn to_gray(image: &Image) -> GrayImage {
    let h = image.height();
    let w = image.width();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = image.data[[row, col]].clamp(SAMPLE_MIN, SAMPLE_MAX) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }
    img
}

/// Save an image as 8-bit grayscale PNG. Samples are clamped to [0, 255].
pub fn save_png(image: &Image, path: &Path) -> Result<()> {
    to_gray(image).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an image as 8-bit grayscale TIFF. Samples are clamped to [0, 255].
pub fn save_tiff(image: &Image, path: &Path) -> Result<()> {
    to_gray(image).save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save image, choosing format from file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    match extension(path).as_deref() {
        Some("tiff" | "tif") => save_tiff(image, path),
        Some("png") => save_png(image, path),
        _ => save_png(image, path),
    }
}

/// Load an image file as 8-bit grayscale samples.
pub fn load_image(path: &Path) -> Result<Image> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<i32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = gray.get_pixel(col as u32, row as u32);
            data[[row, col]] = pixel.0[0] as i32;
        }
    }

    Ok(Image::new(data))
}

/// True for extensions treated as raw `i32` sample buffers.
pub fn is_raw_path(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("raw" | "bin"))
}

/// Load either a raw buffer or an image file, requiring `dims`.
pub fn load_any(path: &Path, dims: Dimensions) -> Result<Image> {
    if is_raw_path(path) {
        return load_raw(path, dims);
    }
    let image = load_image(path)?;
    image.ensure_dimensions(dims)?;
    Ok(image)
}
