//! Covariance matrices and their square-root decomposition.
//!
//! ## Mathematical Background
//!
//! Given `n` independent standard normal random variables `Z = [Z1, ..., Zn]`,
//! draws with covariance `Σ` are obtained as
//!
//! ```text
//! W = M * Z,    M * M^T = Σ
//! ```
//!
//! Two square roots are supported:
//!
//! - [`SqrtMethod::Symmetric`]: `M = V * sqrt(Λ) * V^T` from the eigen
//!   decomposition `Σ = V Λ V^T`. `M` is symmetric and exists for every
//!   positive semi-definite `Σ`, including singular ones.
//! - [`SqrtMethod::Cholesky`]: lower triangular `L`. Pivots that vanish within
//!   tolerance produce zero columns, so semi-definite matrices are accepted.
//!
//! ## Usage
//!
//! ```
//! use pricer_core::math::correlation::{CorrelationTransform, CovarianceMatrix, SqrtMethod};
//!
//! let cov = CovarianceMatrix::new(&[
//!     0.04, 0.012,
//!     0.012, 0.09,
//! ], 2).unwrap();
//!
//! let transform = CorrelationTransform::new(&cov, SqrtMethod::Cholesky, 1e-12).unwrap();
//!
//! let z = [1.0, 0.0];
//! let mut w = [0.0; 2];
//! transform.apply(&z, &mut w);
//! assert!((w[0] - 0.2).abs() < 1e-12);
//! assert!((w[1] - 0.06).abs() < 1e-12);
//! ```

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use thiserror::Error;

/// Absolute tolerance for the symmetry check on covariance input.
const SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Default tolerance for positive semi-definiteness.
pub const DEFAULT_PSD_TOLERANCE: f64 = 1e-12;

/// Error types for covariance and decomposition operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Matrix has no rows.
    #[error("Covariance matrix is empty")]
    Empty,

    /// Flat data length does not match `dim * dim`.
    #[error("Invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions {
        /// Expected element count
        expected: usize,
        /// Supplied element count
        got: usize,
    },

    /// A row has the wrong number of columns.
    #[error("Covariance matrix is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare {
        /// Offending row
        row: usize,
        /// Columns in that row
        len: usize,
        /// Number of rows
        expected: usize,
    },

    /// An element is NaN or infinite.
    #[error("Covariance element ({i}, {j}) is not finite")]
    NonFinite {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
    },

    /// Matrix is not symmetric.
    #[error("Covariance matrix is not symmetric at ({i}, {j})")]
    NotSymmetric {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
    },

    /// Matrix has a negative eigenvalue (or Cholesky pivot) beyond tolerance.
    #[error("Covariance matrix is not positive semi-definite (offending value {value})")]
    NotPositiveSemidefinite {
        /// Smallest eigenvalue, or the failing Cholesky residual
        value: f64,
    },
}

/// Square-root decomposition used to build a [`CorrelationTransform`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SqrtMethod {
    /// Symmetric square root from the eigen decomposition.
    #[default]
    Symmetric,
    /// Lower triangular (semi-definite) Cholesky factor.
    Cholesky,
}

/// Square symmetric covariance matrix, stored row-major.
///
/// Positive semi-definiteness is not checked here; it is established when a
/// [`CorrelationTransform`] is built.
#[derive(Clone, Debug, PartialEq)]
pub struct CovarianceMatrix {
    data: Vec<f64>,
    dim: usize,
}

impl CovarianceMatrix {
    /// Creates a covariance matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data` - Matrix elements in row-major order (`dim * dim` elements)
    /// * `dim` - Matrix dimension
    ///
    /// # Errors
    ///
    /// - `Empty` if `dim` is zero
    /// - `InvalidDimensions` if `data.len() != dim * dim`
    /// - `NonFinite` for NaN or infinite elements
    /// - `NotSymmetric` if `|a_ij - a_ji|` exceeds 1e-10
    pub fn new(data: &[f64], dim: usize) -> Result<Self, CorrelationError> {
        if dim == 0 {
            return Err(CorrelationError::Empty);
        }
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }

        for i in 0..dim {
            for j in 0..dim {
                if !data[i * dim + j].is_finite() {
                    return Err(CorrelationError::NonFinite { i, j });
                }
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                if (data[i * dim + j] - data[j * dim + i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Creates a covariance matrix from rows.
    ///
    /// # Errors
    ///
    /// `NotSquare` if any row length differs from the number of rows, plus
    /// the errors of [`new`](Self::new).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, CorrelationError> {
        let dim = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(CorrelationError::NotSquare {
                row,
                len: r.len(),
                expected: dim,
            });
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(&data, dim)
    }

    /// Creates an identity covariance (uncorrelated unit variances).
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    pub fn identity(dim: usize) -> Self {
        assert!(dim > 0, "identity covariance needs at least one asset");
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { data, dim }
    }

    /// Creates a diagonal covariance from per-asset variances.
    ///
    /// # Errors
    ///
    /// - `Empty` if `variances` is empty
    /// - `NonFinite` for a NaN or infinite variance
    pub fn diagonal(variances: &[f64]) -> Result<Self, CorrelationError> {
        let dim = variances.len();
        let mut data = vec![0.0; dim * dim];
        for (i, &v) in variances.iter().enumerate() {
            data[i * dim + i] = v;
        }
        Self::new(&data, dim)
    }

    /// Returns the matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns element `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// Returns the diagonal (per-asset variances).
    pub fn variances(&self) -> Vec<f64> {
        (0..self.dim).map(|i| self.get(i, i)).collect()
    }

    fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.dim, self.dim, &self.data)
    }
}

/// Square root `M` of a covariance matrix with `M * M^T = Σ`.
///
/// Computed once and read-only afterwards. Applying it to a vector of
/// independent unit-variance draws yields draws with covariance `Σ`.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationTransform {
    /// Row-major elements of `M`.
    data: Vec<f64>,
    dim: usize,
    method: SqrtMethod,
}

impl CorrelationTransform {
    /// Decomposes `covariance` with the given method.
    ///
    /// # Arguments
    ///
    /// * `covariance` - Symmetric covariance matrix
    /// * `method` - Square-root algorithm
    /// * `tolerance` - Tolerance for negative eigenvalues / pivots, relative to
    ///   the largest eigenvalue (symmetric) or variance (Cholesky)
    ///
    /// # Errors
    ///
    /// `CorrelationError::NotPositiveSemidefinite` if the matrix has a
    /// negative eigenvalue (or pivot) beyond tolerance.
    pub fn new(
        covariance: &CovarianceMatrix,
        method: SqrtMethod,
        tolerance: f64,
    ) -> Result<Self, CorrelationError> {
        let dim = covariance.dim();
        let data = match method {
            SqrtMethod::Symmetric => symmetric_sqrt(covariance, tolerance)?,
            SqrtMethod::Cholesky => cholesky_psd(covariance, tolerance)?,
        };

        tracing::debug!(dim, ?method, "covariance square root computed");

        Ok(Self { data, dim, method })
    }

    /// Decomposes `covariance` with the symmetric square root and default tolerance.
    pub fn from_covariance(covariance: &CovarianceMatrix) -> Result<Self, CorrelationError> {
        Self::new(covariance, SqrtMethod::Symmetric, DEFAULT_PSD_TOLERANCE)
    }

    /// Returns the matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the algorithm used.
    #[inline]
    pub fn method(&self) -> SqrtMethod {
        self.method
    }

    /// Returns element `(i, j)` of `M`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// Euclidean norm of row `i`, equal to `sqrt(Σ_ii)`.
    #[inline]
    pub fn row_norm(&self, i: usize) -> f64 {
        let row = &self.data[i * self.dim..(i + 1) * self.dim];
        row.iter().map(|m| m * m).sum::<f64>().sqrt()
    }

    /// Computes `out = M * z`.
    ///
    /// Both slices must have length `dim()`.
    #[inline]
    pub fn apply(&self, z: &[f64], out: &mut [f64]) {
        debug_assert_eq!(z.len(), self.dim);
        debug_assert_eq!(out.len(), self.dim);

        for (i, w) in out.iter_mut().enumerate() {
            let row = &self.data[i * self.dim..(i + 1) * self.dim];
            *w = row.iter().zip(z).map(|(m, z)| m * z).sum();
        }
    }

    /// Rebuilds `M * M^T`.
    pub fn reconstruct(&self) -> CovarianceMatrix {
        let n = self.dim;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..=i {
                let value: f64 = (0..n).map(|k| self.get(i, k) * self.get(j, k)).sum();
                data[i * n + j] = value;
                data[j * n + i] = value;
            }
        }
        CovarianceMatrix { data, dim: n }
    }
}

fn symmetric_sqrt(
    covariance: &CovarianceMatrix,
    tolerance: f64,
) -> Result<Vec<f64>, CorrelationError> {
    let n = covariance.dim();
    if n == 0 {
        return Ok(Vec::new());
    }
    let eig = SymmetricEigen::new(covariance.to_dmatrix());

    let max_abs = eig.eigenvalues.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let floor = -tolerance * max_abs;
    if let Some(min) = eig.eigenvalues.iter().copied().reduce(f64::min) {
        if min < floor {
            return Err(CorrelationError::NotPositiveSemidefinite { value: min });
        }
    }

    let roots = eig
        .eigenvalues
        .iter()
        .map(|v| v.max(0.0).sqrt())
        .collect::<Vec<_>>();
    let d = DMatrix::from_diagonal(&DVector::from_vec(roots));
    let m = &eig.eigenvectors * d * eig.eigenvectors.transpose();

    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            data[i * n + j] = m[(i, j)];
        }
    }
    Ok(data)
}

fn cholesky_psd(
    covariance: &CovarianceMatrix,
    tolerance: f64,
) -> Result<Vec<f64>, CorrelationError> {
    let n = covariance.dim();
    // Thresholds follow the largest variance so tiny covariances keep their
    // correlation structure.
    let scale = covariance
        .variances()
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tol = tolerance * scale;
    let residual_floor = tolerance.sqrt() * scale;
    let mut lower = vec![0.0; n * n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = covariance.get(i, j);
            for k in 0..j {
                sum -= lower[i * n + k] * lower[j * n + k];
            }

            if i == j {
                if sum < -tol {
                    return Err(CorrelationError::NotPositiveSemidefinite { value: sum });
                }
                lower[i * n + i] = if sum > tol { sum.sqrt() } else { 0.0 };
            } else {
                let l_jj = lower[j * n + j];
                if l_jj > 0.0 {
                    lower[i * n + j] = sum / l_jj;
                } else if sum.abs() > residual_floor {
                    // Zero pivot with non-zero residual: no real factor exists.
                    return Err(CorrelationError::NotPositiveSemidefinite { value: sum });
                }
            }
        }
    }

    Ok(lower)
}
