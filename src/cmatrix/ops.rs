use core::ops::Mul;

use num_complex::Complex;

use crate::traits::FloatScalar;

use super::CMatrix;

impl<T: FloatScalar> CMatrix<T> {
    /// Matrix product `self * rhs`.
    ///
    /// Panics if the inner dimensions disagree.
    pub fn matmul(&self, rhs: &CMatrix<T>) -> CMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = CMatrix::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let aik = self.get(i, k);
                if aik == Complex::new(T::zero(), T::zero()) {
                    continue;
                }
                for j in 0..rhs.ncols {
                    let v = out.get(i, j) + aik * rhs.get(k, j);
                    out.set(i, j, v);
                }
            }
        }
        out
    }

    /// Conjugate transpose `A^H`.
    ///
    /// ```
    /// use zhessen::{CMatrix, Complex};
    /// let a = CMatrix::from_rows(1, 2, &[Complex::new(1.0_f64, 2.0), Complex::new(3.0, -4.0)]);
    /// let ah = a.adjoint();
    /// assert_eq!(ah.nrows(), 2);
    /// assert_eq!(ah.get(1, 0), Complex::new(3.0, 4.0));
    /// ```
    pub fn adjoint(&self) -> CMatrix<T> {
        CMatrix::from_fn(self.ncols, self.nrows, |i, j| self.get(j, i).conj())
    }
}

impl<T: FloatScalar> Mul for &CMatrix<T> {
    type Output = CMatrix<T>;

    fn mul(self, rhs: &CMatrix<T>) -> CMatrix<T> {
        self.matmul(rhs)
    }
}

impl<T: FloatScalar> Mul for CMatrix<T> {
    type Output = CMatrix<T>;

    fn mul(self, rhs: CMatrix<T>) -> CMatrix<T> {
        self.matmul(&rhs)
    }
}
