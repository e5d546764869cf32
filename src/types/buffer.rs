// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cache-line aligned sample storage.

use crate::config::BUFFER_ALIGN;
use crate::error::{KernelError, Result};
use crate::types::scalar::Sample;
use std::alloc::{self, Layout};
use std::fmt;
use std::mem::size_of;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Owned, zero-initialised run of samples whose first element sits on a
/// `BUFFER_ALIGN` boundary.
pub struct AlignedBuffer {
    ptr: NonNull<Sample>,
    len: usize,
}

// Exclusive ownership, same as Box<[Sample]>.
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

impl AlignedBuffer {
    /// Allocates `len` zeroed samples.
    ///
    /// Returns `KernelError::Allocation` if the byte size is not
    /// representable or the allocator refuses the request. An empty
    /// buffer never touches the allocator.
    pub fn zeroed(len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let layout = Self::layout(len)?;
        // SAFETY: `layout` has a non-zero size because `len > 0`.
        let raw = unsafe { alloc::alloc_zeroed(layout) } as *mut Sample;
        let ptr = NonNull::new(raw).ok_or(KernelError::Allocation {
            len,
            align: BUFFER_ALIGN,
        })?;

        Ok(Self { ptr, len })
    }

    /// Allocates a buffer holding a copy of `samples`.
    pub fn from_slice(samples: &[Sample]) -> Result<Self> {
        let mut buf = Self::zeroed(samples.len())?;
        buf.copy_from_slice(samples);
        Ok(buf)
    }

    fn layout(len: usize) -> Result<Layout> {
        len.checked_mul(size_of::<Sample>())
            .and_then(|bytes| Layout::from_size_align(bytes, BUFFER_ALIGN).ok())
            .ok_or(KernelError::Allocation {
                len,
                align: BUFFER_ALIGN,
            })
    }
}

impl Deref for AlignedBuffer {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        // SAFETY: `ptr` is valid for `len` initialised samples, or dangling
        // and well aligned when `len == 0`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for AlignedBuffer {
    fn deref_mut(&mut self) -> &mut [Sample] {
        // SAFETY: as in `deref`, and `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.len) {
            // SAFETY: allocated in `zeroed` with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) }
        }
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("align", &BUFFER_ALIGN)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_is_aligned_and_zero() {
        let buf = AlignedBuffer::zeroed(4096).unwrap();
        assert_eq!(buf.len(), 4096);
        assert_eq!(buf.as_ptr() as usize % BUFFER_ALIGN, 0);
        assert!(buf.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_odd_lengths_stay_aligned() {
        for len in [1, 3, 31, 33, 1027] {
            let buf = AlignedBuffer::zeroed(len).unwrap();
            assert_eq!(buf.as_ptr() as usize % BUFFER_ALIGN, 0, "len {}", len);
        }
    }

    #[test]
    fn test_empty_buffer() {
        let buf = AlignedBuffer::zeroed(0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unrepresentable_size_is_refused() {
        let err = AlignedBuffer::zeroed(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            KernelError::Allocation {
                len: usize::MAX / 2,
                align: BUFFER_ALIGN
            }
        );
    }

    #[test]
    fn test_from_slice_copies() {
        let buf = AlignedBuffer::from_slice(&[1, -2, 3]).unwrap();
        assert_eq!(&*buf, &[1, -2, 3]);
    }
}
