mod common;

use diffpost_core::consts::{LEVEL_HIGH, LEVEL_LOW, LEVEL_MID};
use diffpost_core::error::DiffPostError;
use diffpost_core::filters::posterize::{level_histogram, posterize_diff, posterize_diff_parallel};
use diffpost_core::filters::{Level, Thresholds};

use common::{filled, image_from_rows, pattern};

// ---------------------------------------------------------------------------
// Threshold bands
// ---------------------------------------------------------------------------

#[test]
fn test_classify_band_edges() {
    let t = Thresholds::new(32, 96).unwrap();
    assert_eq!(t.classify(0), Level::Low);
    assert_eq!(t.classify(31), Level::Low);
    assert_eq!(t.classify(32), Level::Mid);
    assert_eq!(t.classify(95), Level::Mid);
    assert_eq!(t.classify(96), Level::High);
    assert_eq!(t.classify(255), Level::High);
}

#[test]
fn test_abs_diff_equal_to_t1_is_mid() {
    let t = Thresholds::new(32, 96).unwrap();
    let a = filled(2, 2, 100);
    let b = filled(2, 2, 68);
    let c = posterize_diff(&a, &b, &t).unwrap();
    assert!(c.data.iter().all(|&v| v == LEVEL_MID));
}

#[test]
fn test_abs_diff_equal_to_t2_is_high() {
    let t = Thresholds::new(32, 96).unwrap();
    let a = filled(2, 2, 0);
    let b = filled(2, 2, 96);
    let c = posterize_diff(&a, &b, &t).unwrap();
    assert!(c.data.iter().all(|&v| v == LEVEL_HIGH));
}

#[test]
fn test_t1_zero_has_no_low_band() {
    let t = Thresholds::new(0, 1).unwrap();
    let a = filled(2, 2, 5);
    let c = posterize_diff(&a, &a, &t).unwrap();
    assert!(c.data.iter().all(|&v| v == LEVEL_MID));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let err = Thresholds::new(96, 32).unwrap_err();
    assert!(matches!(
        err,
        DiffPostError::InvalidThresholds { t1: 96, t2: 32 }
    ));
}

// ---------------------------------------------------------------------------
// posterize_diff
// ---------------------------------------------------------------------------

#[test]
fn test_mixed_grid() {
    let t = Thresholds::default();
    let a = image_from_rows(&[&[0, 50, 200], &[10, 10, 10]]);
    let b = image_from_rows(&[&[0, 0, 0], &[41, 42, 107]]);
    let c = posterize_diff(&a, &b, &t).unwrap();
    assert_eq!(
        c.to_vec(),
        vec![LEVEL_LOW, LEVEL_MID, LEVEL_HIGH, LEVEL_LOW, LEVEL_MID, LEVEL_HIGH]
    );
}

#[test]
fn test_uniform_mid_difference() {
    let t = Thresholds::default();
    let c = posterize_diff(&filled(4, 4, 100), &filled(4, 4, 50), &t).unwrap();
    assert!(c.data.iter().all(|&v| v == LEVEL_MID));
}

#[test]
fn test_symmetric_in_arguments() {
    let t = Thresholds::default();
    let a = pattern(9, 11, 1);
    let b = pattern(9, 11, 7);
    assert_eq!(
        posterize_diff(&a, &b, &t).unwrap(),
        posterize_diff(&b, &a, &t).unwrap()
    );
}

#[test]
fn test_output_only_contains_levels() {
    let t = Thresholds::default();
    let c = posterize_diff(&pattern(16, 16, 2), &pattern(16, 16, 5), &t).unwrap();
    assert!(c.data.iter().all(|&v| Level::from_value(v).is_some()));
    let [low, mid, high] = level_histogram(&c);
    assert_eq!(low + mid + high, 256);
}

#[test]
fn test_dimension_mismatch_is_invalid_input() {
    let t = Thresholds::default();
    let err = posterize_diff(&filled(3, 3, 0), &filled(3, 4, 0), &t).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_transposed_shape_is_invalid_input() {
    let t = Thresholds::default();
    let err = posterize_diff(&filled(2, 3, 0), &filled(3, 2, 0), &t).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_parallel_matches_sequential() {
    let t = Thresholds::new(10, 40).unwrap();
    let a = pattern(64, 48, 3);
    let b = pattern(64, 48, 11);
    assert_eq!(
        posterize_diff(&a, &b, &t).unwrap(),
        posterize_diff_parallel(&a, &b, &t).unwrap()
    );
}

#[test]
fn test_parallel_rejects_mismatch() {
    let t = Thresholds::default();
    assert!(posterize_diff_parallel(&filled(2, 2, 0), &filled(2, 3, 0), &t).is_err());
}
