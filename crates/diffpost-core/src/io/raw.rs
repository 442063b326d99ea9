use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{DiffPostError, Result};
use crate::frame::{Dimensions, Image};

/// Bytes per sample in a raw buffer.
pub const RAW_SAMPLE_SIZE: usize = std::mem::size_of::<i32>();

/// Decode a raw buffer: row-major little-endian `i32` samples, no header.
pub fn decode_raw(bytes: &[u8], dims: Dimensions) -> Result<Image> {
    let expected = dims.pixel_count() * RAW_SAMPLE_SIZE;
    if bytes.len() != expected {
        return Err(DiffPostError::LengthMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    let mut samples = vec![0i32; dims.pixel_count()];
    Cursor::new(bytes).read_i32_into::<LittleEndian>(&mut samples)?;
    Image::from_vec(dims, samples)
}

/// Encode an image as a raw little-endian `i32` buffer.
pub fn encode_raw(image: &Image) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(image.len() * RAW_SAMPLE_SIZE);
    for &v in image.data.iter() {
        buf.write_i32::<LittleEndian>(v)?;
    }
    Ok(buf)
}

/// Load a raw sample buffer of the given dimensions.
pub fn load_raw(path: &Path, dims: Dimensions) -> Result<Image> {
    let bytes = std::fs::read(path)?;
    decode_raw(&bytes, dims)
}

/// Write an image as a raw sample buffer.
pub fn save_raw(image: &Image, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode_raw(image)?)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_truncated_buffer() {
        let dims = Dimensions::new(2, 2).unwrap();
        let err = decode_raw(&[0u8; 15], dims).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn decode_reads_little_endian() {
        let dims = Dimensions::new(1, 2).unwrap();
        let bytes = [0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff];
        let img = decode_raw(&bytes, dims).unwrap();
        assert_eq!(img.to_vec(), vec![1, -1]);
    }

    #[test]
    fn encode_writes_little_endian() {
        let dims = Dimensions::new(1, 2).unwrap();
        let img = Image::from_vec(dims, vec![1, -2]).unwrap();
        let bytes = encode_raw(&img).unwrap();
        assert_eq!(bytes, [0x01, 0x00, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(decode_raw(&bytes, dims).unwrap(), img);
    }
}
