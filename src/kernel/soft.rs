// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Software model of an RVV unit.
//!
//! Runs the same lane program as the native kernel (widen with zero bias,
//! widening multiply-accumulate, saturating narrow) for a chosen register
//! width, so the strip-mined loop can be exercised on any host.

use crate::error::{KernelError, Result};
use crate::fxp::round::Narrowing;
use crate::kernel::vector::VectorUnit;
use crate::types::scalar::{Accumulator, Sample};

/// Smallest VLEN the model accepts (Zvl32b).
pub const MIN_VLEN: usize = 32;

/// Largest VLEN the RVV architecture allows.
pub const MAX_VLEN: usize = 65536;

const SEW: usize = 16;

/// How `set_vl` distributes elements when more than one register remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VlPolicy {
    /// `vl = min(avl, VLMAX)`.
    #[default]
    Greedy,
    /// For `VLMAX < avl < 2 * VLMAX`, split evenly: `vl = ceil(avl / 2)`.
    /// RVV permits this and some implementations do it.
    Balanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftVector {
    vlen: usize,
    policy: VlPolicy,
    narrowing: Narrowing,
}

impl SoftVector {
    /// A unit with `vlen` bits per register, LMUL = 1.
    pub fn new(vlen: usize) -> Result<Self> {
        if !vlen.is_power_of_two() || !(MIN_VLEN..=MAX_VLEN).contains(&vlen) {
            return Err(KernelError::InvalidVlen(vlen));
        }
        Ok(Self {
            vlen,
            policy: VlPolicy::Greedy,
            narrowing: Narrowing::Q15,
        })
    }

    pub fn with_policy(mut self, policy: VlPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    pub fn vlen(&self) -> usize {
        self.vlen
    }

    /// Lanes per register at SEW = 16.
    pub fn vlmax(&self) -> usize {
        self.vlen / SEW
    }
}

impl VectorUnit for SoftVector {
    fn set_vl(&self, avl: usize) -> usize {
        let vlmax = self.vlmax();
        match self.policy {
            VlPolicy::Balanced if avl > vlmax && avl < 2 * vlmax => avl.div_ceil(2),
            _ => avl.min(vlmax),
        }
    }

    fn axpy_chunk(&self, a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) {
        debug_assert!(y.len() <= self.vlmax());
        for ((out, &a), &b) in y.iter_mut().zip(a).zip(b) {
            // vwadd.vx a, 0
            let mut acc = a as Accumulator;
            // vwmacc.vx acc, alpha, b
            acc += alpha as Accumulator * b as Accumulator;
            // vnclip.wx acc, shift
            *out = self.narrowing.apply(acc);
        }
    }
}
