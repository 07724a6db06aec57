//! # Multi-Path Generators
//!
//! Two generators implement the [`MultiPathSampler`] contract:
//!
//! - [`MultiPathGenerator`]: evaluates one [`DiffusionProcess`] per asset at
//!   every step and evolves levels in log space. Takes independent draws and
//!   correlates them itself.
//! - [`LegacyMultiPathGenerator`]: constant drift, diffusion proportional to
//!   `sqrt(dt)`. Takes draws that are already correlated.
//!
//! ## Architecture
//!
//! ```text
//! MultiPathGenerator
//! ├── Vec<Arc<dyn DiffusionProcess>>  (per-asset evolution)
//! ├── CorrelationTransform            (computed once)
//! ├── RandomSequenceGenerator         (N x steps draws per trajectory)
//! └── Sample<MultiPath>               (reused output buffer)
//! ```
//!
//! [`DiffusionProcess`]: pricer_models::models::DiffusionProcess

mod legacy;
mod multi_path;
mod sampler;

pub use legacy::LegacyMultiPathGenerator;
pub use multi_path::MultiPathGenerator;
pub use sampler::MultiPathSampler;
