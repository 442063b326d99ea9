/// Lowest representable output sample (8-bit grayscale).
pub const SAMPLE_MIN: i32 = 0;

/// Highest representable output sample (8-bit grayscale).
pub const SAMPLE_MAX: i32 = 255;

/// Classification level for differences below T1.
pub const LEVEL_LOW: i32 = 0;

/// Classification level for differences in [T1, T2).
pub const LEVEL_MID: i32 = 128;

/// Classification level for differences at or above T2.
pub const LEVEL_HIGH: i32 = 255;

/// Weight of the center sample in the 4-neighbor sharpening stencil.
pub const SHARPEN_CENTER_WEIGHT: i64 = 5;

/// Reference image height.
pub const DEFAULT_HEIGHT: usize = 128;

/// Reference image width.
pub const DEFAULT_WIDTH: usize = 128;

/// Default lower difference threshold.
pub const DEFAULT_T1: i32 = 32;

/// Default upper difference threshold.
pub const DEFAULT_T2: i32 = 96;

/// Minimum pixel count (h*w) at which `ExecutionMode::Auto` picks Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Seed used for synthetic inputs when none is given.
pub const DEFAULT_SEED: u64 = 0x5EED;
