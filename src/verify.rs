//! Bit-exact output comparison and buffer digests.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{KernelError, Result};
use crate::types::scalar::{Accumulator, Sample};
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

/// Result of comparing a kernel's output against the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// True iff every element matches exactly.
    pub ok: bool,
    /// Largest absolute per-element difference.
    pub max_diff: i32,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        if self.ok {
            "OK"
        } else {
            "FAIL"
        }
    }
}

/// Compares `test` against `reference` element by element.
///
/// No tolerance: the kernels promise identical bits, so any non-zero
/// difference fails. Differences are taken in 32 bits so that
/// `32767 - (-32768)` cannot wrap.
pub fn verify_equal(reference: &[Sample], test: &[Sample]) -> Result<Verdict> {
    if reference.len() != test.len() {
        return Err(KernelError::LengthMismatch {
            expected: reference.len(),
            found: test.len(),
        });
    }

    let mut verdict = Verdict { ok: true, max_diff: 0 };
    for (&r, &t) in reference.iter().zip(test) {
        let diff = (r as Accumulator - t as Accumulator).abs();
        verdict.max_diff = verdict.max_diff.max(diff);
        if diff != 0 {
            verdict.ok = false;
        }
    }
    Ok(verdict)
}

const DIGEST_CHUNK: usize = 256;

/// BLAKE3 over the length and little-endian bytes of `samples`.
///
/// Identical on every architecture, so two runs (or two machines) can be
/// compared by digest alone.
pub fn buffer_digest(samples: &[Sample]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(samples.len() as u64).to_le_bytes());

    let mut bytes = [0u8; DIGEST_CHUNK * 2];
    for chunk in samples.chunks(DIGEST_CHUNK) {
        let encoded = &mut bytes[..chunk.len() * 2];
        LittleEndian::write_i16_into(chunk, encoded);
        hasher.update(encoded);
    }

    *hasher.finalize().as_bytes()
}
