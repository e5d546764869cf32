// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Vector-length-agnostic strip mining.
//!
//! The hardware decides how many lanes each iteration processes. The loop
//! asks "how many of the remaining elements can I take now", consumes that
//! many, and repeats until nothing is left.

use crate::types::scalar::Sample;
use core::iter::FusedIterator;
use core::ops::Range;

/// A vector execution unit with a run-time register width.
pub trait VectorUnit {
    /// Lanes to process next, given `avl` elements remain.
    ///
    /// Must return a value in `1..=avl` whenever `avl > 0`, and no more
    /// than the unit's VLMAX.
    fn set_vl(&self, avl: usize) -> usize;

    /// Computes one chunk. The slices have equal length, and that length
    /// was returned by a previous `set_vl`.
    fn axpy_chunk(&self, a: &[Sample], b: &[Sample], y: &mut [Sample], alpha: Sample);
}

/// Consecutive index ranges covering `0..len`, each sized by the unit.
#[derive(Debug)]
pub struct Strips<'u, U: ?Sized> {
    unit: &'u U,
    next: usize,
    len: usize,
}

impl<'u, U: VectorUnit + ?Sized> Strips<'u, U> {
    pub fn new(unit: &'u U, len: usize) -> Self {
        Self { unit, next: 0, len }
    }
}

impl<U: VectorUnit + ?Sized> Iterator for Strips<'_, U> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let remaining = self.len - self.next;
        if remaining == 0 {
            return None;
        }
        // A unit answering 0 would stall the loop forever.
        let vl = self.unit.set_vl(remaining).clamp(1, remaining);
        let start = self.next;
        self.next += vl;
        Some(start..self.next)
    }
}

impl<U: VectorUnit + ?Sized> FusedIterator for Strips<'_, U> {}

/// Runs the AXPY kernel over every strip the unit hands out.
pub fn axpy_strip_mined<U: VectorUnit + ?Sized>(
    unit: &U,
    a: &[Sample],
    b: &[Sample],
    y: &mut [Sample],
    alpha: Sample,
) {
    let n = y.len().min(a.len()).min(b.len());
    for strip in Strips::new(unit, n) {
        unit.axpy_chunk(&a[strip.clone()], &b[strip.clone()], &mut y[strip], alpha);
    }
}
