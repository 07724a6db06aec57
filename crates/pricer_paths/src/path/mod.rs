//! Trajectory containers produced by the generators.
//!
//! # Memory Layout
//!
//! A [`MultiPath`] holds one [`Path`] per asset. Each path stores its drift
//! and diffusion increments in separate contiguous buffers indexed by step,
//! so the levels at step `i + 1` are recovered as
//! `level[i] * exp(drift[i] + diffusion[i])`.

#[allow(clippy::module_inception)]
mod path;
mod multipath;

pub use multipath::MultiPath;
pub use path::Path;
