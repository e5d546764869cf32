// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::verify::{buffer_digest, verify_equal, Verdict};

#[test]
fn test_identical_buffers_pass() {
    let buf = [1, -2, 32767, -32768];
    assert_eq!(verify_equal(&buf, &buf).unwrap(), Verdict { ok: true, max_diff: 0 });
    assert_eq!(verify_equal(&[], &[]).unwrap(), Verdict { ok: true, max_diff: 0 });
}

#[test]
fn test_any_difference_fails() {
    let verdict = verify_equal(&[10, 20, 30], &[10, 21, 27]).unwrap();
    assert_eq!(verdict, Verdict { ok: false, max_diff: 3 });
    assert_eq!(verdict.label(), "FAIL");
}

#[test]
fn test_difference_is_widened() {
    let verdict = verify_equal(&[32767], &[-32768]).unwrap();
    assert_eq!(verdict.max_diff, 65535);
    assert!(!verdict.ok);
}

#[test]
fn test_length_mismatch_is_reported() {
    assert_eq!(
        verify_equal(&[1, 2], &[1]),
        Err(KernelError::LengthMismatch { expected: 2, found: 1 })
    );
}

#[test]
fn test_digest_tracks_content_and_length() {
    let a: Vec<i16> = (0..1000).map(|i| i as i16).collect();
    let mut b = a.clone();
    assert_eq!(buffer_digest(&a), buffer_digest(&b));

    b[999] = 0;
    assert_ne!(buffer_digest(&a), buffer_digest(&b));

    assert_ne!(buffer_digest(&[]), buffer_digest(&[0]));
    assert_ne!(buffer_digest(&[0]), buffer_digest(&[0, 0]));
}

#[test]
fn test_digest_is_little_endian_blake3() {
    let mut expected = blake3::Hasher::new();
    expected.update(&2u64.to_le_bytes());
    expected.update(&[0x01, 0x02, 0xff, 0xff]);
    assert_eq!(buffer_digest(&[0x0201, -1]), *expected.finalize().as_bytes());
}
