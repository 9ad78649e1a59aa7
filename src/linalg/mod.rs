pub mod hessenberg;
pub mod householder;

pub use hessenberg::HessenbergDecomposition;

use crate::cmatrix::CMatrix;

/// Errors from linear algebra operations.
///
/// ```
/// use zhessen::CMatrix;
/// use zhessen::linalg::LinalgError;
///
/// let rect = CMatrix::<f64>::zeros(2, 3);
/// assert_eq!(
///     rect.hessenberg().unwrap_err(),
///     LinalgError::NotSquare { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// The operation requires a square matrix.
    NotSquare { nrows: usize, ncols: usize },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NotSquare { nrows, ncols } => {
                write!(f, "matrix must be square, got {}x{}", nrows, ncols)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// A matrix handed back by a consuming decomposition that refused it.
///
/// The matrix is returned exactly as it was passed in; nothing is written
/// before the shape check.
///
/// ```
/// use zhessen::{CMatrix, HessenbergDecomposition};
///
/// let rect = CMatrix::<f64>::zeros(2, 3);
/// let mut hess = HessenbergDecomposition::new();
/// let rejected = hess.decompose(rect.clone()).unwrap_err();
/// assert_eq!(rejected.into_matrix(), rect);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedMatrix<T> {
    error: LinalgError,
    matrix: CMatrix<T>,
}

impl<T> RejectedMatrix<T> {
    pub(crate) fn new(error: LinalgError, matrix: CMatrix<T>) -> Self {
        Self { error, matrix }
    }

    /// Why the matrix was refused.
    pub fn error(&self) -> LinalgError {
        self.error
    }

    /// Borrow the untouched input.
    pub fn matrix(&self) -> &CMatrix<T> {
        &self.matrix
    }

    /// Take the untouched input back.
    pub fn into_matrix(self) -> CMatrix<T> {
        self.matrix
    }
}

impl<T> From<RejectedMatrix<T>> for LinalgError {
    fn from(r: RejectedMatrix<T>) -> Self {
        r.error
    }
}

impl<T> core::fmt::Display for RejectedMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

#[cfg(feature = "std")]
impl<T: core::fmt::Debug> std::error::Error for RejectedMatrix<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
