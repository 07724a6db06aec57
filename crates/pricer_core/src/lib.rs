//! # pricer_core: Foundation Types for Multi-Asset Path Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the 3-layer architecture, providing:
//! - The simulation time axis: `TimeGrid` (`types::time_grid`)
//! - Weighted Monte Carlo samples: `Sample<T>` (`types::sample`)
//! - Covariance matrices and their square roots: `CovarianceMatrix`,
//!   `CorrelationTransform` (`math::correlation`)
//! - Error types: `TimeGridError`, `CorrelationError`
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - nalgebra: Symmetric eigen decomposition
//! - thiserror: Error derivation
//! - tracing: Diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::{CorrelationTransform, CovarianceMatrix};
//! use pricer_core::types::TimeGrid;
//!
//! let grid = TimeGrid::uniform(1.0, 12).unwrap();
//! assert_eq!(grid.steps(), 12);
//!
//! let cov = CovarianceMatrix::new(&[0.04, 0.006, 0.006, 0.09], 2).unwrap();
//! let transform = CorrelationTransform::from_covariance(&cov).unwrap();
//!
//! let mut correlated = [0.0; 2];
//! transform.apply(&[1.0, -0.5], &mut correlated);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SqrtMethod`, `Sample` and `TimeGrid`

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
