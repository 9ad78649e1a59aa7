use core::fmt::Debug;
use num_complex::Complex;
use num_traits::{Float, Num, One, Zero};

/// Trait for the real component type of complex matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Real floating-point component type (`f32`, `f64`).
///
/// Required by everything that needs `sqrt`, `hypot` or ordered comparison:
/// the Householder kernel, norms and the Hessenberg reduction.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a dense complex matrix stored row-major with
/// interleaved real/imaginary parts.
///
/// Element `(i, j)` lives at `as_interleaved()[2 * (i * ncols + j)]` (real)
/// and the following slot (imaginary). The Householder kernel is generic
/// over this trait so it can run on any storage honouring that layout.
pub trait ComplexMatrixRef<T: Copy> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn as_interleaved(&self) -> &[T];

    /// Offset of the real part of element `(row, col)` in the interleaved buffer.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        2 * (row * self.ncols() + col)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Complex<T> {
        let idx = self.offset(row, col);
        let data = self.as_interleaved();
        Complex::new(data[idx], data[idx + 1])
    }
}

/// Mutable access to a dense complex matrix.
///
/// Extends `ComplexMatrixRef` so in-place algorithms (reflector updates,
/// the Hessenberg sweep) can write through the same layout.
pub trait ComplexMatrixMut<T: Copy>: ComplexMatrixRef<T> {
    fn as_interleaved_mut(&mut self) -> &mut [T];

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Complex<T>) {
        let idx = self.offset(row, col);
        let data = self.as_interleaved_mut();
        data[idx] = value.re;
        data[idx + 1] = value.im;
    }
}
