use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::{SAMPLE_MAX, SAMPLE_MIN};
use crate::frame::{Dimensions, Image};

fn fill(rng: &mut StdRng, dims: Dimensions) -> Image {
    let data = Array2::from_shape_simple_fn((dims.height, dims.width), || {
        rng.gen_range(SAMPLE_MIN..=SAMPLE_MAX)
    });
    Image::new(data)
}

/// Two independent images of uniformly random 8-bit samples, drawn from one
/// stream seeded with `seed`.
pub fn random_pair(dims: Dimensions, seed: u64) -> (Image, Image) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = fill(&mut rng, dims);
    let b = fill(&mut rng, dims);
    (a, b)
}
