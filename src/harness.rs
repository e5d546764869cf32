// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Self-test harness.
//!
//! Allocates four aligned buffers, fills the inputs from a seeded
//! generator, runs both kernels (timed when a cycle counter exists),
//! compares the outputs and renders the fixed stdout report.

use crate::config::{DEFAULT_ALPHA, DEFAULT_LEN, DEFAULT_SEED};
use crate::cycles::CycleCounter;
use crate::error::{KernelError, Result};
use crate::kernel::{q15_axpy_ref, q15_axpy_vec, Strategy};
use crate::types::{AlignedBuffer, Sample};
use crate::verify::{buffer_digest, verify_equal, Verdict};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    pub len: usize,
    pub seed: u64,
    pub alpha: Sample,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            seed: DEFAULT_SEED,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// The four buffers of one run. `y_ref` and `y_vec` are distinct so both
/// results stay inspectable.
#[derive(Debug)]
pub struct Workspace {
    pub a: AlignedBuffer,
    pub b: AlignedBuffer,
    pub y_ref: AlignedBuffer,
    pub y_vec: AlignedBuffer,
}

impl Workspace {
    /// Allocates all four buffers or none.
    pub fn allocate(len: usize) -> Result<Self> {
        Ok(Self {
            a: AlignedBuffer::zeroed(len)?,
            b: AlignedBuffer::zeroed(len)?,
            y_ref: AlignedBuffer::zeroed(len)?,
            y_vec: AlignedBuffer::zeroed(len)?,
        })
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Fills `a` and `b` with samples spanning the full Q15 range.
    /// Draws alternate a[i], b[i] so both depend only on `seed` and `i`.
    pub fn fill(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for (a, b) in self.a.iter_mut().zip(self.b.iter_mut()) {
            *a = rng.gen();
            *b = rng.gen();
        }
    }

    pub fn digests(&self) -> BufferDigests {
        BufferDigests {
            a: buffer_digest(&self.a),
            b: buffer_digest(&self.b),
            y_ref: buffer_digest(&self.y_ref),
            y_vec: buffer_digest(&self.y_vec),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BufferDigests {
    pub a: [u8; 32],
    pub b: [u8; 32],
    pub y_ref: [u8; 32],
    pub y_vec: [u8; 32],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Timing {
    pub ref_cycles: u64,
    pub vec_cycles: u64,
}

impl Timing {
    /// Reference cycles over vector cycles.
    pub fn speedup(&self) -> f64 {
        self.ref_cycles as f64 / self.vec_cycles as f64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub config: HarnessConfig,
    pub strategy: Strategy,
    pub verdict: Verdict,
    pub timing: Option<Timing>,
    pub digests: BufferDigests,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.verdict.ok
    }

    /// Writes the stdout report.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.timing {
            Some(timing) => {
                writeln!(out, "Cycles ref: {}", timing.ref_cycles)?;
                writeln!(
                    out,
                    "Verify RVV: {} (max diff = {})",
                    self.verdict.label(),
                    self.verdict.max_diff
                )?;
                writeln!(out, "Cycles RVV: {}", timing.vec_cycles)?;
                writeln!(out, "Speedup: {:.2}x", timing.speedup())?;
            }
            None => {
                writeln!(out, "Non-RISCV Verification: {}", self.verdict.label())?;
            }
        }
        Ok(())
    }
}

/// How a self-test ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    VerificationFailed,
    /// Nothing ran; nothing was printed.
    Aborted(KernelError),
}

impl Outcome {
    /// Process exit status. Every failure path shares status 1.
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::VerificationFailed | Outcome::Aborted(_) => 1,
        }
    }
}

/// Runs the self-test, timing the kernels if this hart has a counter.
pub fn run(config: &HarnessConfig) -> Result<RunReport> {
    run_with(config, CycleCounter::detect())
}

/// Runs the self-test with an explicit (or absent) cycle counter.
pub fn run_with(config: &HarnessConfig, counter: Option<CycleCounter>) -> Result<RunReport> {
    tracing::debug!(
        len = config.len,
        seed = config.seed,
        alpha = config.alpha,
        strategy = Strategy::ACTIVE.name(),
        "starting self-test"
    );

    let mut ws = Workspace::allocate(config.len)?;
    ws.fill(config.seed);
    let alpha = config.alpha;

    let timing = match counter {
        Some(counter) => {
            let (res, ref_cycles) =
                counter.measure(|| q15_axpy_ref(&ws.a, &ws.b, &mut ws.y_ref, alpha));
            res?;
            let (res, vec_cycles) =
                counter.measure(|| q15_axpy_vec(&ws.a, &ws.b, &mut ws.y_vec, alpha));
            res?;
            tracing::debug!(ref_cycles, vec_cycles, "kernels timed");
            Some(Timing {
                ref_cycles,
                vec_cycles,
            })
        }
        None => {
            q15_axpy_ref(&ws.a, &ws.b, &mut ws.y_ref, alpha)?;
            q15_axpy_vec(&ws.a, &ws.b, &mut ws.y_vec, alpha)?;
            None
        }
    };

    let verdict = verify_equal(&ws.y_ref, &ws.y_vec)?;
    if !verdict.ok {
        tracing::warn!(max_diff = verdict.max_diff, "vector kernel diverged from reference");
    }

    Ok(RunReport {
        config: *config,
        strategy: Strategy::ACTIVE,
        verdict,
        timing,
        digests: ws.digests(),
    })
}

/// Runs the self-test and renders its report to `out`.
///
/// When the run aborts (allocation failure) nothing is written.
pub fn execute<W: Write>(config: &HarnessConfig, out: &mut W) -> io::Result<Outcome> {
    let report = match run(config) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Self-test aborted: {}", e);
            return Ok(Outcome::Aborted(e));
        }
    };

    match serde_json::to_string(&report) {
        Ok(json) => tracing::debug!(report = %json, "self-test finished"),
        Err(e) => tracing::warn!("Failed to serialize report: {}", e),
    }

    report.render(out)?;

    Ok(if report.passed() {
        Outcome::Passed
    } else {
        Outcome::VerificationFailed
    })
}
