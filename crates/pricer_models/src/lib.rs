//! # Pricer Models (L2: Diffusion Processes)
//!
//! Per-asset stochastic evolution rules consumed by the path generators in
//! `pricer_paths`.
//!
//! This crate provides:
//! - The `DiffusionProcess` capability trait (initial value, drift, variance)
//! - Geometric Brownian motion and Ornstein-Uhlenbeck implementations
//! - `ProcessError` for construction and evaluation failures
//!
//! ## Design Principles
//!
//! - **Trait objects at the seam**: generators hold `Arc<dyn DiffusionProcess>`
//!   so heterogeneous assets and test doubles share one interface
//! - **Validated construction**: parameters are checked once, evaluation stays cheap

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod models;
