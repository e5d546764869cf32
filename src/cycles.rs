// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Hardware cycle counter.

/// Handle to the `cycle` CSR. Only obtainable where one is readable.
#[derive(Clone, Copy, Debug)]
pub struct CycleCounter {
    _private: (),
}

impl CycleCounter {
    /// `Some` on RISC-V (`rdcycle`), `None` elsewhere.
    pub fn detect() -> Option<Self> {
        if cfg!(target_arch = "riscv64") {
            Some(Self { _private: () })
        } else {
            None
        }
    }

    /// Current cycle count.
    #[inline]
    pub fn now(&self) -> u64 {
        read_cycles()
    }

    /// Runs `f` and returns its result with the elapsed cycles.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> (R, u64) {
        let start = self.now();
        let out = std::hint::black_box(f());
        let end = self.now();
        (out, end.wrapping_sub(start))
    }
}

#[cfg(target_arch = "riscv64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cycles: u64;
    // SAFETY: reads a user-readable CSR. Left as a memory barrier for the
    // compiler so the timed work cannot drift across it.
    unsafe {
        core::arch::asm!("rdcycle {0}", out(reg) cycles, options(nostack));
    }
    cycles
}

#[cfg(not(target_arch = "riscv64"))]
#[inline(always)]
fn read_cycles() -> u64 {
    // `detect` never hands out a counter here.
    0
}
