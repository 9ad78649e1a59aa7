//! Pre-defined type aliases for the supported component types.

use super::CMatrix;

/// Complex matrix with `f32` components.
pub type CMatrixf32 = CMatrix<f32>;
/// Complex matrix with `f64` components.
pub type CMatrixf64 = CMatrix<f64>;
