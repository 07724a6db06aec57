//! Diffusion processes driving multi-asset path generation.
//!
//! This module provides:
//! - `DiffusionProcess` trait: the per-asset capability consumed by generators
//! - `GbmProcess`: Black-Scholes geometric Brownian motion in log space
//! - `OrnsteinUhlenbeckProcess`: Mean-reverting Gaussian process
//! - `ProcessError`: Construction and evaluation errors
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pricer_models::models::{DiffusionProcess, GbmProcess, OrnsteinUhlenbeckProcess};
//!
//! let processes: Vec<Arc<dyn DiffusionProcess>> = vec![
//!     Arc::new(GbmProcess::new(100.0, 0.05, 0.0, 0.2).unwrap()),
//!     Arc::new(OrnsteinUhlenbeckProcess::new(1.0, 0.5, 1.0, 0.1).unwrap()),
//! ];
//! assert_eq!(processes[0].x0(), 100.0);
//! ```

pub mod error;
pub mod gbm;
pub mod ornstein_uhlenbeck;
pub mod process;

pub use error::ProcessError;
pub use gbm::GbmProcess;
pub use ornstein_uhlenbeck::OrnsteinUhlenbeckProcess;
pub use process::DiffusionProcess;
