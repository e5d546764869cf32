// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("Failed to allocate {len} samples aligned to {align} bytes")]
    Allocation { len: usize, align: usize },

    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Narrowing shift out of range: {0}")]
    ShiftOutOfRange(u32),

    #[error("Unsupported vector register width: {0} bits")]
    InvalidVlen(usize),
}

pub type Result<T> = std::result::Result<T, KernelError>;
