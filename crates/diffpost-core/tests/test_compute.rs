mod common;

use diffpost_core::compute::cpu::{ParallelBackend, SequentialBackend};
use diffpost_core::compute::{create_backend, ComputeBackend, ExecutionMode};
use diffpost_core::consts::PARALLEL_PIXEL_THRESHOLD;
use diffpost_core::filters::Thresholds;
use diffpost_core::io::random_pair;
use diffpost_core::oracle::{Oracle, Verdict};
use diffpost_core::pipeline::run_pipeline_with;

use common::{dims, filled};

#[test]
fn test_backend_names() {
    assert_eq!(SequentialBackend.name(), "CPU/sequential");
    assert_eq!(ParallelBackend.name(), "CPU/Rayon");
}

#[test]
fn test_auto_mode_switches_on_pixel_count() {
    let small = create_backend(ExecutionMode::Auto, PARALLEL_PIXEL_THRESHOLD - 1);
    let large = create_backend(ExecutionMode::Auto, PARALLEL_PIXEL_THRESHOLD);
    assert_eq!(small.name(), "CPU/sequential");
    assert_eq!(large.name(), "CPU/Rayon");
}

#[test]
fn test_explicit_modes_ignore_pixel_count() {
    assert_eq!(create_backend(ExecutionMode::Parallel, 1).name(), "CPU/Rayon");
    assert_eq!(
        create_backend(ExecutionMode::Sequential, 1 << 20).name(),
        "CPU/sequential"
    );
}

#[test]
fn test_backends_agree_above_parallel_threshold() {
    // 300×300 = 90000 > 65536
    let d = dims(300, 300);
    let t = Thresholds::default();
    let (a, b) = random_pair(d, 2024);

    let seq = run_pipeline_with(&SequentialBackend, &a, &b, &t).unwrap();
    let par = run_pipeline_with(&ParallelBackend, &a, &b, &t).unwrap();
    assert_eq!(seq, par);

    let verdict = Oracle::new(d, t)
        .check(&a.to_vec(), &b.to_vec(), &par.to_vec())
        .unwrap();
    assert_eq!(verdict, Verdict::Passed);
}

#[test]
fn test_backends_agree_on_narrow_thresholds() {
    let d = dims(31, 57);
    let t = Thresholds::new(1, 2).unwrap();
    let (a, b) = random_pair(d, 5);
    let backends: [&dyn ComputeBackend; 2] = [&SequentialBackend, &ParallelBackend];
    let oracle = Oracle::new(d, t);
    for backend in backends {
        let out = run_pipeline_with(backend, &a, &b, &t).unwrap();
        assert!(
            oracle
                .check(&a.to_vec(), &b.to_vec(), &out.to_vec())
                .unwrap()
                .passed(),
            "{} disagrees with the oracle",
            backend.name()
        );
    }
}

#[test]
fn test_backends_reject_mismatched_inputs() {
    let t = Thresholds::default();
    for backend in [
        create_backend(ExecutionMode::Sequential, 0),
        create_backend(ExecutionMode::Parallel, 0),
    ] {
        let err = backend
            .posterize_diff(&filled(2, 2, 0), &filled(3, 3, 0), &t)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}

#[test]
fn test_execution_mode_display_and_default() {
    assert_eq!(ExecutionMode::default(), ExecutionMode::Auto);
    assert_eq!(format!("{}", ExecutionMode::Auto), "Auto");
    assert_eq!(format!("{}", ExecutionMode::Sequential), "Sequential");
    assert_eq!(format!("{}", ExecutionMode::Parallel), "Parallel");
}
