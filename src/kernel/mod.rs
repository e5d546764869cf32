// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q15 AXPY kernels: `y[i] = saturate(a[i] + alpha * b[i])`.
//!
//! Two entry points share one contract:
//! - [`q15_axpy_ref`]: scalar ground truth.
//! - [`q15_axpy_vec`]: strip-mined vector loop when the build targets
//!   RISC-V with the "V" extension, otherwise the reference kernel itself.
//!
//! The choice is made at build time and bound once to [`VECTORIZED`], so
//! there is no per-call branch. Both must agree element-wise, exactly.

pub mod reference;
pub mod soft;
pub mod vector;

#[cfg(all(target_arch = "riscv64", target_feature = "v"))]
pub mod rvv;

use crate::error::{KernelError, Result};
use crate::types::scalar::Sample;
use serde::Serialize;

/// Unchecked kernel signature. Slices must have equal length.
pub type AxpyKernel = fn(&[Sample], &[Sample], &mut [Sample], Sample);

/// Which implementation backs [`q15_axpy_vec`] in this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Strategy {
    /// Native RVV strip-mined loop.
    Native,
    /// Reference kernel, verbatim.
    ScalarFallback,
}

impl Strategy {
    #[cfg(all(target_arch = "riscv64", target_feature = "v"))]
    pub const ACTIVE: Strategy = Strategy::Native;

    #[cfg(not(all(target_arch = "riscv64", target_feature = "v")))]
    pub const ACTIVE: Strategy = Strategy::ScalarFallback;

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Native => "rvv",
            Strategy::ScalarFallback => "scalar-fallback",
        }
    }
}

#[cfg(all(target_arch = "riscv64", target_feature = "v"))]
pub const VECTORIZED: AxpyKernel = rvv::axpy_rvv;

#[cfg(not(all(target_arch = "riscv64", target_feature = "v")))]
pub const VECTORIZED: AxpyKernel = reference::axpy_ref;

/// Scalar reference kernel.
///
/// Writes nothing and returns `LengthMismatch` unless `a`, `b` and `y`
/// all have the same length.
pub fn q15_axpy_ref(a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) -> Result<()> {
    check_lengths(a, b, y)?;
    reference::axpy_ref(a, b, y, alpha);
    Ok(())
}

/// Vectorized kernel, bit-identical to [`q15_axpy_ref`].
pub fn q15_axpy_vec(a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) -> Result<()> {
    check_lengths(a, b, y)?;
    VECTORIZED(a, b, y, alpha);
    Ok(())
}

fn check_lengths(a: &[Sample], b: &[Sample], y: &[Sample]) -> Result<usize> {
    let expected = a.len();
    for found in [b.len(), y.len()] {
        if found != expected {
            return Err(KernelError::LengthMismatch { expected, found });
        }
    }
    Ok(expected)
}
