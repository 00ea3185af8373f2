//! Dense linear solves for small heat-balance systems.
//!
//! The heat-balance matrices are at most a few dozen rows, so a direct LU
//! factorization with partial pivoting is used. Unlike a bare
//! [`nalgebra::linalg::LU::solve`], near-singular pivots and non-finite
//! entries are reported as errors instead of leaking infinities or NaN into
//! the solution.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Relative pivot magnitude below which a matrix is treated as singular.
const SINGULAR_PIVOT_RATIO: f64 = 1e-13;

/// Errors that can occur while solving `A·x = b`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearSolveError {
    /// The matrix is not square or does not match the right-hand side.
    #[error("dimension mismatch: matrix is {rows}x{cols}, rhs has {rhs} entries")]
    DimensionMismatch { rows: usize, cols: usize, rhs: usize },

    /// The matrix is singular or too ill-conditioned to solve reliably.
    #[error("singular matrix: pivot magnitude {pivot:e}")]
    Singular {
        /// Smallest pivot magnitude relative to the largest matrix entry.
        pivot: f64,
    },

    /// The matrix, right-hand side or solution contains a non-finite value.
    #[error("non-finite value in linear system")]
    NonFinite,
}

/// Solves the square system `A·x = b`.
///
/// # Errors
///
/// Returns [`LinearSolveError`] if the dimensions disagree, any input or
/// output entry is not finite, or the matrix is (near-)singular.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, LinearSolveError> {
    let (rows, cols) = a.shape();
    if rows != cols || rows != b.len() {
        return Err(LinearSolveError::DimensionMismatch {
            rows,
            cols,
            rhs: b.len(),
        });
    }

    if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
        return Err(LinearSolveError::NonFinite);
    }

    let scale = a.amax();
    if scale == 0.0 {
        return Err(LinearSolveError::Singular { pivot: 0.0 });
    }

    let lu = a.clone().lu();

    let pivot = lu.u().diagonal().amin() / scale;
    if pivot < SINGULAR_PIVOT_RATIO {
        return Err(LinearSolveError::Singular { pivot });
    }

    let x = lu.solve(b).ok_or(LinearSolveError::Singular { pivot })?;

    if x.iter().any(|v| !v.is_finite()) {
        return Err(LinearSolveError::NonFinite);
    }

    Ok(x)
}
