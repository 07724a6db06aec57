//! # pricer_paths: Correlated Multi-Asset Path Generation
//!
//! Monte Carlo engine layer producing correlated multi-asset trajectories.
//!
//! ## Components
//!
//! - [`generator::MultiPathGenerator`]: per-asset diffusion processes, log-Euler
//!   evolution, covariance applied per step
//! - [`generator::LegacyMultiPathGenerator`]: constant drift, pre-correlated
//!   draws scaled by `sqrt(dt)`
//! - [`generator::MultiPathSampler`]: `next` / `antithetic` contract shared by
//!   both generators
//! - [`path`]: [`path::Path`] and [`path::MultiPath`] containers
//! - [`rng`]: injected random capabilities and seeded implementations
//! - [`config`]: [`config::GeneratorConfig`] builder
//!
//! ## Concurrency
//!
//! Generators take `&mut self` for every draw and perform no locking. Run one
//! generator per worker, each with its own seed.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::math::CovarianceMatrix;
//! use pricer_core::types::TimeGrid;
//! use pricer_models::models::{DiffusionProcess, GbmProcess};
//! use pricer_paths::generator::{MultiPathGenerator, MultiPathSampler};
//! use pricer_paths::rng::GaussianSequenceGenerator;
//!
//! let processes: Vec<Arc<dyn DiffusionProcess>> = vec![
//!     Arc::new(GbmProcess::new(100.0, 0.05, 0.0, 0.2).unwrap()),
//!     Arc::new(GbmProcess::new(80.0, 0.05, 0.0, 0.25).unwrap()),
//! ];
//! let cov = CovarianceMatrix::new(&[0.04, 0.025, 0.025, 0.0625], 2).unwrap();
//! let grid = TimeGrid::uniform(1.0, 52).unwrap();
//! let random = GaussianSequenceGenerator::new(2 * 52, 7);
//!
//! let mut generator = MultiPathGenerator::new(processes, &[0.05, 0.05], &cov, grid, random)?;
//!
//! // Borrowed fast path: valid until the next call
//! let terminal = generator.next_ref()?.value[0].levels(100.0)[52];
//! assert!(terminal > 0.0);
//! # Ok::<(), pricer_paths::PathGeneratorError>(())
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod generator;
pub mod path;
pub mod rng;

pub use config::{AntitheticPolicy, GeneratorConfig};
pub use error::PathGeneratorError;
pub use generator::{LegacyMultiPathGenerator, MultiPathGenerator, MultiPathSampler};
pub use path::{MultiPath, Path};
