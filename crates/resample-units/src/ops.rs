// SPDX-License-Identifier: LGPL-3.0-or-later

//! Block buffer operations.
//!
//! Copy and gain-accumulate primitives used by the identity-ratio fast
//! paths of the resampler. All operate on `f32` sample buffers.

use multiversion::multiversion;

/// Copy `src` into `dst`.
///
/// # Panics
/// Panics if `dst.len() < src.len()`.
pub fn copy(dst: &mut [f32], src: &[f32]) {
    assert!(dst.len() >= src.len(), "dst too small");
    dst[..src.len()].copy_from_slice(src);
}

/// Accumulate `src` into `dst` with gain `k`: `dst[i] += src[i] * k`.
///
/// Processes `min(dst.len(), src.len())` samples.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn add_multiplied(dst: &mut [f32], src: &[f32], k: f32) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d += *s * k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy() {
        let src = [1.0, 2.0, 3.0];
        let mut dst = [0.0; 4];
        copy(&mut dst, &src);
        assert_eq!(dst, [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "dst too small")]
    fn test_copy_dst_too_small() {
        let src = [1.0, 2.0, 3.0];
        let mut dst = [0.0; 2];
        copy(&mut dst, &src);
    }

    #[test]
    fn test_add_multiplied() {
        let src = [1.0, 2.0, 3.0, 4.0];
        let mut dst = [10.0, 10.0, 10.0, 10.0];
        add_multiplied(&mut dst, &src, 0.5);
        assert_eq!(dst, [10.5, 11.0, 11.5, 12.0]);
    }

    #[test]
    fn test_add_multiplied_zero_gain_is_identity() {
        let src = [1.0, 2.0, 3.0];
        let mut dst = [5.0, 6.0, 7.0];
        add_multiplied(&mut dst, &src, 0.0);
        assert_eq!(dst, [5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_add_multiplied_truncates_to_shorter() {
        let src = [1.0, 1.0];
        let mut dst = [0.0, 0.0, 0.0];
        add_multiplied(&mut dst, &src, 2.0);
        assert_eq!(dst, [2.0, 2.0, 0.0]);
    }
}
