pub mod aliases;
mod norm;
mod ops;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;

use crate::traits::{ComplexMatrixMut, ComplexMatrixRef, Scalar};

/// Dense complex matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage of `2 * nrows * ncols` reals, real and
/// imaginary parts interleaved. Element `(i, j)` occupies
/// `data[2 * (i * ncols + j)]` and the slot after it.
///
/// Because the parts are interleaved there is no `&Complex<T>` to hand
/// out, so elements are read and written by value with [`get`](Self::get)
/// and [`set`](Self::set).
///
/// # Examples
///
/// ```
/// use zhessen::{CMatrix, Complex};
///
/// let mut a = CMatrix::zeros(2, 2);
/// a.set(0, 1, Complex::new(1.0_f64, -2.0));
/// assert_eq!(a.get(0, 1), Complex::new(1.0, -2.0));
/// assert_eq!(a.as_slice(), &[0.0, 0.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> CMatrix<T> {
    /// Create an `nrows x ncols` zero matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); 2 * nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use zhessen::{CMatrix, Complex};
    /// let id = CMatrix::<f64>::eye(3);
    /// assert_eq!(id.get(1, 1), Complex::new(1.0, 0.0));
    /// assert_eq!(id.get(1, 2), Complex::new(0.0, 0.0));
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        m.set_identity();
        m
    }

    /// Create a matrix from complex values in row-major order.
    ///
    /// Panics if `values.len() != nrows * ncols`.
    ///
    /// ```
    /// use zhessen::{CMatrix, Complex};
    /// let m = CMatrix::from_rows(2, 2, &[
    ///     Complex::new(1.0_f64, 0.0), Complex::new(2.0, 1.0),
    ///     Complex::new(3.0, -1.0), Complex::new(4.0, 0.0),
    /// ]);
    /// assert_eq!(m.get(1, 0), Complex::new(3.0, -1.0));
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, values: &[Complex<T>]) -> Self {
        assert_eq!(
            values.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            values.len(),
            nrows,
            ncols,
        );
        let mut data = Vec::with_capacity(2 * nrows * ncols);
        for v in values {
            data.push(v.re);
            data.push(v.im);
        }
        Self { data, nrows, ncols }
    }

    /// Wrap an interleaved row-major buffer without copying.
    ///
    /// Panics if `data.len() != 2 * nrows * ncols`.
    pub fn from_interleaved(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            2 * nrows * ncols,
            "buffer length {} does not match {}x{} complex matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> Complex<T>) -> Self {
        let mut data = Vec::with_capacity(2 * nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                let v = f(i, j);
                data.push(v.re);
                data.push(v.im);
            }
        }
        Self { data, nrows, ncols }
    }

    /// Overwrite with the identity matrix. Panics if not square.
    pub fn set_identity(&mut self) {
        assert!(self.is_square(), "identity requires a square matrix");
        self.data.fill(T::zero());
        let step = 2 * (self.ncols + 1);
        for i in 0..self.nrows {
            self.data[i * step] = T::one();
        }
    }

    /// Zero-fill `len` reals starting at interleaved offset `offset`.
    pub fn zero_run(&mut self, offset: usize, len: usize) {
        self.data[offset..offset + len].fill(T::zero());
    }
}

impl<T: Copy> CMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex<T> {
        ComplexMatrixRef::get(self, row, col)
    }

    /// Overwrite element `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex<T>) {
        ComplexMatrixMut::set(self, row, col, value)
    }

    /// The interleaved row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy `len` reals from `src` at `src_offset` into `self` at `dst_offset`.
    ///
    /// Offsets index the interleaved buffers directly, so a run may span
    /// several elements (and rows) at once.
    pub fn copy_run(&mut self, src: &CMatrix<T>, src_offset: usize, dst_offset: usize, len: usize) {
        self.data[dst_offset..dst_offset + len]
            .copy_from_slice(&src.data[src_offset..src_offset + len]);
    }

    /// Become a copy of `src`, reusing the existing allocation when it is
    /// large enough.
    pub fn assign(&mut self, src: &CMatrix<T>) {
        self.data.clear();
        self.data.extend_from_slice(&src.data);
        self.nrows = src.nrows;
        self.ncols = src.ncols;
    }
}

// ── ComplexMatrixRef / ComplexMatrixMut ─────────────────────────────

impl<T: Copy> ComplexMatrixRef<T> for CMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn as_interleaved(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> ComplexMatrixMut<T> for CMatrix<T> {
    #[inline]
    fn as_interleaved_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
