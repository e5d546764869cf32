// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Scalar reference kernel.

use crate::fxp::ops::{mac_q15, saturate_q15};
use crate::types::scalar::Sample;

/// `y[i] = saturate_q15(a[i] + alpha * b[i])` at full 32-bit precision,
/// one clamp, no rounding.
pub fn axpy_ref(a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) {
    for ((out, &a), &b) in y.iter_mut().zip(a).zip(b) {
        *out = saturate_q15(mac_q15(a, alpha, b));
    }
}
