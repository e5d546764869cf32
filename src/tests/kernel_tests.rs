// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::kernel::{q15_axpy_ref, q15_axpy_vec, Strategy};

fn both(a: &[i16], b: &[i16], alpha: i16) -> (Vec<i16>, Vec<i16>) {
    let mut y_ref = vec![0i16; a.len()];
    let mut y_vec = vec![0i16; a.len()];
    q15_axpy_ref(a, b, &mut y_ref, alpha).unwrap();
    q15_axpy_vec(a, b, &mut y_vec, alpha).unwrap();
    (y_ref, y_vec)
}

#[test]
fn test_small_scenario() {
    let a = [0, 32767, -32768, 100];
    let b = [0, 1, 1, -50];
    let (y_ref, y_vec) = both(&a, &b, 3);
    assert_eq!(y_ref, vec![0, 32767, -32765, -50]);
    assert_eq!(y_vec, y_ref);
}

#[test]
fn test_saturation_boundaries_through_kernels() {
    // acc = 32767, 32768, -32768, -32769
    let a = [32767, 32767, -32768, -32768];
    let b = [0, 1, 0, -1];
    let (y_ref, y_vec) = both(&a, &b, 1);
    assert_eq!(y_ref, vec![32767, 32767, -32768, -32768]);
    assert_eq!(y_vec, y_ref);
}

#[test]
fn test_extreme_products_clamp_instead_of_wrapping() {
    let a = [-32768, 32767, 0, 0];
    let b = [-32768, 32767, -32768, 32767];
    let (y_ref, y_vec) = both(&a, &b, -32768);
    assert_eq!(y_ref, vec![32767, -32768, 32767, -32768]);
    assert_eq!(y_vec, y_ref);
}

#[test]
fn test_empty_buffers() {
    let (y_ref, y_vec) = both(&[], &[], 3);
    assert!(y_ref.is_empty());
    assert!(y_vec.is_empty());
}

#[test]
fn test_length_mismatch_writes_nothing() {
    let a = [1, 2, 3];
    let b = [1, 2];
    let mut y = [7i16; 3];

    let err = q15_axpy_ref(&a, &b, &mut y, 3).unwrap_err();
    assert_eq!(err, KernelError::LengthMismatch { expected: 3, found: 2 });
    let err = q15_axpy_vec(&a, &b, &mut y, 3).unwrap_err();
    assert_eq!(err, KernelError::LengthMismatch { expected: 3, found: 2 });
    assert_eq!(y, [7, 7, 7]);

    let mut short = [0i16; 2];
    let err = q15_axpy_vec(&a, &a, &mut short, 3).unwrap_err();
    assert_eq!(err, KernelError::LengthMismatch { expected: 3, found: 2 });
}

#[test]
fn test_strategy_follows_build_target() {
    let native = cfg!(all(target_arch = "riscv64", target_feature = "v"));
    assert_eq!(Strategy::ACTIVE == Strategy::Native, native);
    assert_eq!(Strategy::ScalarFallback.name(), "scalar-fallback");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_vectorized_matches_reference(
            pairs in proptest::collection::vec(any::<(i16, i16)>(), 0..700),
            alpha in any::<i16>(),
        ) {
            let (a, b): (Vec<i16>, Vec<i16>) = pairs.into_iter().unzip();
            let (y_ref, y_vec) = both(&a, &b, alpha);
            prop_assert_eq!(y_vec, y_ref);
        }

        #[test]
        fn test_reference_is_clamped_exact_sum(a in any::<i16>(), b in any::<i16>(), alpha in any::<i16>()) {
            let (y_ref, _) = both(&[a], &[b], alpha);
            let exact = a as i64 + alpha as i64 * b as i64;
            prop_assert_eq!(y_ref[0] as i64, exact.clamp(-32768, 32767));
        }
    }
}
