// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use crate::types::scalar::Sample;

/// Largest representable Q15 sample.
pub const Q15_MAX: Sample = i16::MAX;

/// Smallest representable Q15 sample.
pub const Q15_MIN: Sample = i16::MIN;

/// Alignment in bytes of every sample buffer (one cache line).
pub const BUFFER_ALIGN: usize = 64;

/// Number of samples per buffer in the self-test.
pub const DEFAULT_LEN: usize = 4096;

/// Seed for the self-test data generator.
pub const DEFAULT_SEED: u64 = 1234;

/// Multiplier applied to `b` in the self-test.
pub const DEFAULT_ALPHA: Sample = 3;

/// Right shift applied when narrowing the accumulator back to Q15.
/// At zero the rounding mode never changes a result.
pub const NARROW_SHIFT: u32 = 0;
