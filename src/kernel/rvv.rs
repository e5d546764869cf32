// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Native RISC-V Vector (RVV 1.0) kernel.
//!
//! Compiled only for `riscv64` with `target_feature = "v"`.

use crate::fxp::round::Narrowing;
use crate::kernel::vector::{axpy_strip_mined, VectorUnit};
use crate::types::scalar::Sample;
use core::arch::asm;

/// The hart's own vector unit, e16/m1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rvv;

impl VectorUnit for Rvv {
    #[inline]
    fn set_vl(&self, avl: usize) -> usize {
        let vl: usize;
        // SAFETY: vsetvli only writes vl and vtype.
        unsafe {
            asm!(
                "vsetvli {vl}, {avl}, e16, m1, ta, ma",
                vl = lateout(reg) vl,
                avl = in(reg) avl,
                options(nomem, nostack),
            );
        }
        vl
    }

    #[inline]
    fn axpy_chunk(&self, a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) {
        let n = y.len();
        debug_assert!(a.len() == n && b.len() == n);
        let narrowing = Narrowing::Q15;

        // SAFETY: `n` came from `set_vl`, so `vsetvli` grants exactly `n`
        // lanes and every load/store stays inside the three slices.
        // v8..v12 are declared clobbered; vxrm is restored before exit.
        unsafe {
            asm!(
                "csrr {saved}, vxrm",
                "csrw vxrm, {mode}",
                "vsetvli zero, {n}, e16, m1, ta, ma",
                "vle16.v v8, ({a})",
                "vle16.v v9, ({b})",
                // widen a to e32/m2 with zero bias
                "vwadd.vx v10, v8, zero",
                // acc += alpha * b
                "vwmacc.vx v10, {alpha}, v9",
                "vnclip.wx v12, v10, {shift}",
                "vse16.v v12, ({y})",
                "csrw vxrm, {saved}",
                n = in(reg) n,
                a = in(reg) a.as_ptr(),
                b = in(reg) b.as_ptr(),
                y = in(reg) y.as_mut_ptr(),
                alpha = in(reg) alpha as isize,
                shift = in(reg) narrowing.shift() as usize,
                mode = in(reg) narrowing.mode().vxrm(),
                saved = out(reg) _,
                out("v8") _,
                out("v9") _,
                out("v10") _,
                out("v11") _,
                out("v12") _,
                options(nostack),
            );
        }
    }
}

/// Strip-mined RVV kernel over whole buffers.
pub fn axpy_rvv(a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample) {
    axpy_strip_mined(&Rvv, a, b, y, alpha);
}
