use std::fmt;

use ndarray::Zip;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_T1, DEFAULT_T2, LEVEL_HIGH, LEVEL_LOW, LEVEL_MID};
use crate::error::{DiffPostError, Result};
use crate::frame::Image;

/// Discrete level assigned to a pixel by posterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Mid,
    High,
}

impl Level {
    /// Sample value written into the classification image.
    pub fn value(self) -> i32 {
        match self {
            Self::Low => LEVEL_LOW,
            Self::Mid => LEVEL_MID,
            Self::High => LEVEL_HIGH,
        }
    }

    /// Map a sample back to its level, if it is one of the three level values.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            LEVEL_LOW => Some(Self::Low),
            LEVEL_MID => Some(Self::Mid),
            LEVEL_HIGH => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Mid => write!(f, "Mid"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Threshold pair partitioning absolute differences into three bands.
///
/// Bands are half-open: `[0, t1)` is Low, `[t1, t2)` is Mid, `[t2, ..)` is High.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds", into = "RawThresholds")]
pub struct Thresholds {
    t1: i32,
    t2: i32,
}

#[derive(Serialize, Deserialize)]
struct RawThresholds {
    t1: i32,
    t2: i32,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = DiffPostError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Self::new(raw.t1, raw.t2)
    }
}

impl From<Thresholds> for RawThresholds {
    fn from(t: Thresholds) -> Self {
        Self { t1: t.t1, t2: t.t2 }
    }
}

impl Thresholds {
    /// Validate and build a threshold pair. Requires `0 <= t1 < t2`.
    pub fn new(t1: i32, t2: i32) -> Result<Self> {
        if t1 < 0 || t1 >= t2 {
            return Err(DiffPostError::InvalidThresholds { t1, t2 });
        }
        Ok(Self { t1, t2 })
    }

    pub fn t1(&self) -> i32 {
        self.t1
    }

    pub fn t2(&self) -> i32 {
        self.t2
    }

    /// Classify an absolute difference.
    pub fn classify(&self, abs_diff: u32) -> Level {
        // t1, t2 are non-negative once validated
        if abs_diff < self.t1 as u32 {
            Level::Low
        } else if abs_diff < self.t2 as u32 {
            Level::Mid
        } else {
            Level::High
        }
    }

    /// Classification sample for one pair of source samples.
    pub fn posterize_pixel(&self, a: i32, b: i32) -> i32 {
        self.classify(a.abs_diff(b)).value()
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            t1: DEFAULT_T1,
            t2: DEFAULT_T2,
        }
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t1={}, t2={}", self.t1, self.t2)
    }
}

fn check_same_shape(a: &Image, b: &Image) -> Result<()> {
    b.ensure_dimensions(a.dimensions())
}

/// Per-pixel absolute difference of `a` and `b`, posterized into three levels.
pub fn posterize_diff(a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image> {
    check_same_shape(a, b)?;
    let data = Zip::from(&a.data)
        .and(&b.data)
        .map_collect(|&va, &vb| thresholds.posterize_pixel(va, vb));
    Ok(Image::new(data))
}

/// Rayon-parallel [`posterize_diff`]. Output is identical.
pub fn posterize_diff_parallel(a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image> {
    check_same_shape(a, b)?;
    let data = Zip::from(&a.data)
        .and(&b.data)
        .par_map_collect(|&va, &vb| thresholds.posterize_pixel(va, vb));
    Ok(Image::new(data))
}

/// Count of Low, Mid and High samples in a classification image.
///
/// Samples that are not level values are ignored.
pub fn level_histogram(image: &Image) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for &v in image.data.iter() {
        match Level::from_value(v) {
            Some(Level::Low) => counts[0] += 1,
            Some(Level::Mid) => counts[1] += 1,
            Some(Level::High) => counts[2] += 1,
            None => {}
        }
    }
    counts
}
