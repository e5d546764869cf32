// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{DEFAULT_LEN, DEFAULT_SEED};
use crate::harness::{run_with, HarnessConfig, Workspace};

fn filled(len: usize, seed: u64) -> Workspace {
    let mut ws = Workspace::allocate(len).unwrap();
    ws.fill(seed);
    ws
}

#[test]
fn test_same_seed_same_inputs() {
    let first = filled(DEFAULT_LEN, DEFAULT_SEED);
    let second = filled(DEFAULT_LEN, DEFAULT_SEED);
    assert_eq!(&*first.a, &*second.a);
    assert_eq!(&*first.b, &*second.b);
    assert_ne!(&*first.a, &*first.b);
}

#[test]
fn test_different_seed_different_inputs() {
    let first = filled(256, 1);
    let second = filled(256, 2);
    assert_ne!(&*first.a, &*second.a);
}

#[test]
fn test_prefix_is_independent_of_length() {
    let short = filled(100, DEFAULT_SEED);
    let long = filled(DEFAULT_LEN, DEFAULT_SEED);
    assert_eq!(&*short.a, &long.a[..100]);
    assert_eq!(&*short.b, &long.b[..100]);
}

#[test]
fn test_inputs_span_full_range() {
    let ws = filled(DEFAULT_LEN, DEFAULT_SEED);
    let min = ws.a.iter().chain(ws.b.iter()).copied().min().unwrap();
    let max = ws.a.iter().chain(ws.b.iter()).copied().max().unwrap();
    assert!(min < -32000, "min {}", min);
    assert!(max > 32000, "max {}", max);
}

#[test]
fn test_repeated_runs_are_identical() {
    let cfg = HarnessConfig::default();
    let first = run_with(&cfg, None).unwrap();
    let second = run_with(&cfg, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.digests.y_ref, first.digests.y_vec);
    assert_ne!(first.digests.a, first.digests.b);
}
