//! Fixed-point operations.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{Q15_MAX, Q15_MIN};
use crate::types::scalar::{Accumulator, Sample};

/// Rectangular clamp of a wide accumulator into the Q15 range.
/// Truncating, never rounding: the accumulator already holds the exact value.
#[inline(always)]
pub fn saturate_q15(acc: Accumulator) -> Sample {
    if acc > Q15_MAX as Accumulator {
        Q15_MAX
    } else if acc < Q15_MIN as Accumulator {
        Q15_MIN
    } else {
        acc as Sample
    }
}

/// Exact `a + alpha * b`.
///
/// The magnitude is bounded by 2^15 + 2^30, so the sum cannot overflow an i32.
#[inline(always)]
pub fn mac_q15(a: Sample, alpha: Sample, b: Sample) -> Accumulator {
    a as Accumulator + (alpha as Accumulator) * (b as Accumulator)
}
