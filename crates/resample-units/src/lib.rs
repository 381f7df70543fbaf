// SPDX-License-Identifier: LGPL-3.0-or-later

//! # resample-units
//!
//! Streaming sample-rate conversion for audio.
//!
//! The centerpiece is [`sampling::Resampler`], a stateful converter that
//! turns a stream of samples at one rate into a stream at another by an
//! arbitrary, possibly time-varying ratio, interpolating with a 5-point
//! (4th-order) Lagrange polynomial. It is allocation-free in the process
//! path and keeps its history and phase across calls, so blocks of any
//! size can be fed without seams.
//!
//! The stateless pieces it is built on are public as well:
//!
//! - [`interpolation`]: the Lagrange basis and windowed evaluation
//! - [`ops`]: block copy / gain-accumulate primitives

// Foundational modules
pub mod interpolation;
pub mod ops;

// Processing units
pub mod sampling;
