//! Procedural map generation by seeded diffusion, banding and stochastic
//! population
//!
//! A zero-filled square field is stamped with random origin magnitudes,
//! relaxed by repeated 8-neighbor mean diffusion, quantized into five
//! ordinal bands against the field maximum, and finally converted into
//! binary occupancy maps by per-cell weighted draws. Every stage leaves the
//! outer two-cell border of the field untouched.

#![forbid(unsafe_code)]

/// Input/output operations, progress display and error handling
pub mod io;
/// The generation stages and the pipeline executor that drives them
pub mod simulation;
/// Square bordered grids and random origin placement
pub mod spatial;

pub use io::error::{GenerationError, Result};
