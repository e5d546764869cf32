// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Saturating narrow with a fixed-point rounding mode.
//!
//! Mirrors the RISC-V `vnclip` instruction: shift the wide value right,
//! add the rounding increment selected by `vxrm`, then clamp to Q15.

use crate::config::NARROW_SHIFT;
use crate::error::{KernelError, Result};
use crate::fxp::ops::saturate_q15;
use crate::types::scalar::{Accumulator, Sample};

/// Largest shift a 32-to-16 bit narrow accepts (log2(32) bits of shamt).
pub const MAX_NARROW_SHIFT: u32 = 31;

/// Fixed-point rounding modes, discriminants match the `vxrm` CSR encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties up.
    Rnu = 0,
    /// Round to nearest, ties to even.
    Rne = 1,
    /// Round down (truncate).
    Rdn = 2,
    /// Round to odd ("jam").
    Rod = 3,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 4] = [Self::Rnu, Self::Rne, Self::Rdn, Self::Rod];

    /// Value written to `vxrm`.
    pub fn vxrm(self) -> usize {
        self as u8 as usize
    }

    /// Increment added to `v >> shift`.
    fn increment(self, v: i64, shift: u32) -> i64 {
        if shift == 0 {
            return 0;
        }
        let bit = |i: u32| (v >> i) & 1;
        let low_nonzero = |n: u32| n > 0 && v & ((1i64 << n) - 1) != 0;

        match self {
            RoundingMode::Rnu => bit(shift - 1),
            RoundingMode::Rne => bit(shift - 1) & (low_nonzero(shift - 1) as i64 | bit(shift)),
            RoundingMode::Rdn => 0,
            RoundingMode::Rod => (bit(shift) == 0 && low_nonzero(shift)) as i64,
        }
    }
}

/// A validated narrowing step: shift amount plus rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Narrowing {
    shift: u32,
    mode: RoundingMode,
}

impl Narrowing {
    /// What the AXPY kernel uses: no shift, ties to even.
    pub const Q15: Narrowing = Narrowing {
        shift: NARROW_SHIFT,
        mode: RoundingMode::Rne,
    };

    pub fn new(shift: u32, mode: RoundingMode) -> Result<Self> {
        if shift > MAX_NARROW_SHIFT {
            return Err(KernelError::ShiftOutOfRange(shift));
        }
        Ok(Self { shift, mode })
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Shift, round and saturate one accumulator lane.
    #[inline]
    pub fn apply(&self, acc: Accumulator) -> Sample {
        if self.shift == 0 {
            return saturate_q15(acc);
        }
        let v = acc as i64;
        let rounded = (v >> self.shift) + self.mode.increment(v, self.shift);
        // |rounded| <= 2^30 + 1 once shift >= 1.
        saturate_q15(rounded as Accumulator)
    }
}

impl Default for Narrowing {
    fn default() -> Self {
        Self::Q15
    }
}
