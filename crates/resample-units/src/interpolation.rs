// SPDX-License-Identifier: LGPL-3.0-or-later

//! 5-point Lagrange interpolation kernel.
//!
//! Evaluates the 4th-degree polynomial through five equally spaced samples
//! at a fractional offset. The basis is built on the integer nodes
//! `{-2, -1, 0, 1, 2}`:
//!
//! ```text
//! L_k(t) = Π_{j≠k} (node_j − t) / (node_j − node_k)
//! value(t) = Σ_{k=0..4} window[4−k] * L_k(t)
//! ```
//!
//! The window is ordered newest-first (index 0 holds the most recent
//! sample), so node `−2` lines up with the oldest entry and the query
//! offset `t ∈ [0, 1]` sweeps the span between `window[2]` and `window[1]`.

/// Evaluate the five Lagrange basis polynomials at offset `t`.
///
/// Entry `k` is the weight of node `k − 2`. At integer node offsets the
/// basis is exactly one-hot: `lagrange_basis(0.0)[2] == 1.0` and every
/// other entry is exactly `0.0`.
///
/// # Examples
/// ```
/// use resample_units::interpolation::lagrange_basis;
///
/// let basis = lagrange_basis(0.0);
/// assert_eq!(basis[2], 1.0);
/// assert_eq!(basis[0], 0.0);
///
/// // Partition of unity: the weights sum to 1 at any offset.
/// let sum: f32 = lagrange_basis(0.37).iter().sum();
/// assert!((sum - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn lagrange_basis(t: f32) -> [f32; 5] {
    let mut basis = [1.0f32; 5];
    for (k, b) in basis.iter_mut().enumerate() {
        for j in 0..5 {
            if j != k {
                let node = j as f32 - 2.0;
                *b *= (node - t) / (j as f32 - k as f32);
            }
        }
    }
    basis
}

/// Interpolate a newest-first 5-sample window at fractional offset `t`.
///
/// `window[0]` is the most recent sample and `window[4]` the oldest.
/// Offsets `0.0` and `1.0` return `window[2]` and `window[1]` exactly;
/// in between, the value is the unique 4th-degree polynomial through all
/// five samples.
///
/// # Examples
/// ```
/// use resample_units::interpolation::value_at_offset;
///
/// let window = [5.0, 4.0, 3.0, 2.0, 1.0];
/// assert_eq!(value_at_offset(&window, 0.0), 3.0);
/// assert_eq!(value_at_offset(&window, 1.0), 4.0);
///
/// // A linear ramp is reproduced exactly by the polynomial.
/// assert!((value_at_offset(&window, 0.5) - 3.5).abs() < 1e-6);
/// ```
#[inline]
pub fn value_at_offset(window: &[f32; 5], t: f32) -> f32 {
    let basis = lagrange_basis(t);
    let mut acc = 0.0f32;
    for (k, &b) in basis.iter().enumerate() {
        acc += window[4 - k] * b;
    }
    acc
}
