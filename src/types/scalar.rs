// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q15 sample and its widened accumulator.

/// A signed 16-bit Q15 value. No fractional interpretation is applied;
/// the format only fixes the saturation bounds.
pub type Sample = i16;

/// Intermediate wide enough for `a + alpha * b` over any three samples.
/// Never escapes a kernel.
pub type Accumulator = i32;
