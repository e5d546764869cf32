// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod buffer;
pub mod scalar;

pub use buffer::AlignedBuffer;
pub use scalar::{Accumulator, Sample};
