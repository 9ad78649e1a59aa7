use num_traits::Float;

use crate::traits::FloatScalar;

use super::CMatrix;

impl<T: FloatScalar> CMatrix<T> {
    /// Frobenius norm `sqrt(sum |a_ij|^2)`.
    ///
    /// ```
    /// use zhessen::{CMatrix, Complex};
    /// let m = CMatrix::from_rows(1, 2, &[Complex::new(3.0_f64, 4.0), Complex::new(0.0, 0.0)]);
    /// assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Largest element-wise modulus `max |a_ij - b_ij|`.
    ///
    /// Panics if the shapes differ.
    pub fn max_abs_diff(&self, other: &CMatrix<T>) -> T {
        assert_eq!(
            (self.nrows, self.ncols),
            (other.nrows, other.ncols),
            "dimension mismatch: {}x{} vs {}x{}",
            self.nrows, self.ncols, other.nrows, other.ncols,
        );
        self.data
            .chunks_exact(2)
            .zip(other.data.chunks_exact(2))
            .map(|(a, b)| (a[0] - b[0]).hypot(a[1] - b[1]))
            .fold(T::zero(), Float::max)
    }
}
