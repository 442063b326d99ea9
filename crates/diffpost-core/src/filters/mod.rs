pub mod posterize;
pub mod sharpen;

pub use posterize::{posterize_diff, posterize_diff_parallel, Level, Thresholds};
pub use sharpen::{sharpen, sharpen_parallel};
