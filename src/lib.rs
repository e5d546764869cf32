// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! q15-axpy: a saturating Q15 `y = a + alpha * b` kernel, its scalar
//! reference, and the self-test harness that checks them bit for bit.

pub mod config;
pub mod error;
pub mod fxp;
pub mod types;
pub mod kernel;
pub mod cycles;
pub mod verify;
pub mod harness;

pub use error::{KernelError, Result};
pub use kernel::{q15_axpy_ref, q15_axpy_vec, Strategy};
pub use types::{AlignedBuffer, Sample};

#[cfg(test)]
pub mod tests;
