// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point arithmetic for Q15 samples.

pub mod ops;
pub mod round;

pub use ops::{mac_q15, saturate_q15};
pub use round::{Narrowing, RoundingMode};
