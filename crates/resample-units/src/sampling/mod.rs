// SPDX-License-Identifier: LGPL-3.0-or-later

//! Sampling units.
//!
//! - **Resampler**: streaming sample-rate conversion by an arbitrary,
//!   time-varying ratio with Lagrange interpolation

pub mod resampler;
pub use resampler::Resampler;
