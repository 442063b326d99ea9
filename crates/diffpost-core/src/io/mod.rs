pub mod image_io;
pub mod raw;
pub mod synthetic;

pub use image_io::{load_any, load_image, save_image};
pub use raw::{load_raw, save_raw};
pub use synthetic::random_pair;
