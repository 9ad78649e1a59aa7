//! Complex Householder reflector kernel.
//!
//! Stateless routines over an interleaved complex matrix and flat
//! interleaved vectors. Vectors are indexed by absolute row: entry `i`
//! occupies `u[2 * i]` (real) and `u[2 * i + 1]` (imaginary), so a
//! reflector acting on rows `w0..w1` reads `u[2 * w0..2 * w1]`.
//!
//! A reflector is `P = I - gamma * u * u^H` with real `gamma`. It is
//! Hermitian and unitary whenever `gamma = 2 / ||u||^2`.
//!
//! Out-of-range indices panic; a zero sub-column is reported through the
//! return value of [`extract_column_and_max`].

use num_complex::Complex;
use num_traits::Zero;

use crate::traits::{ComplexMatrixMut, ComplexMatrixRef, FloatScalar};

#[inline]
fn load<T: Copy>(v: &[T], i: usize) -> Complex<T> {
    Complex::new(v[2 * i], v[2 * i + 1])
}

#[inline]
fn store<T: Copy>(v: &mut [T], i: usize, z: Complex<T>) {
    v[2 * i] = z.re;
    v[2 * i + 1] = z.im;
}

/// Copy `a[row0..row1, col]` into `u[row0..row1]` and return the largest
/// modulus among the copied entries.
///
/// A return value of zero means the sub-column is exactly zero and no
/// reflector is needed.
pub fn extract_column_and_max<T: FloatScalar>(
    a: &impl ComplexMatrixRef<T>,
    row0: usize,
    row1: usize,
    col: usize,
    u: &mut [T],
) -> T {
    let data = a.as_interleaved();
    let stride = 2 * a.ncols();
    let mut idx = a.offset(row0, col);
    let mut max = T::zero();
    for i in row0..row1 {
        let re = data[idx];
        let im = data[idx + 1];
        u[2 * i] = re;
        u[2 * i + 1] = im;
        let mag = re.hypot(im);
        if mag > max {
            max = mag;
        }
        idx += stride;
    }
    max
}

/// Scale `u[row0..row1]` by `1 / max` and compute the reflector that maps
/// the scaled vector `x` onto `-tau * e_0`.
///
/// `tau` takes the phase of the leading entry, `tau = (x_0 / |x_0|) * ||x||`,
/// so `x_0 + tau` adds magnitudes instead of cancelling. Returns
/// `(gamma, tau)` with `gamma = (||x|| + |x_0|) / ||x||`, which is
/// `2 / ||u||^2` once `u` is divided by its leading entry `x_0 + tau`.
///
/// `max` must be non-zero (see [`extract_column_and_max`]).
pub fn compute_tau_gamma_and_divide<T: FloatScalar>(
    row0: usize,
    row1: usize,
    u: &mut [T],
    max: T,
) -> (T, Complex<T>) {
    let mut nx = T::zero();
    for v in u[2 * row0..2 * row1].iter_mut() {
        *v = *v / max;
        nx = nx + *v * *v;
    }
    let nx = nx.sqrt();

    let u0 = load(u, row0);
    let mag_u0 = u0.re.hypot(u0.im);
    let tau = if mag_u0 == T::zero() {
        Complex::new(nx, T::zero())
    } else {
        u0.scale(nx / mag_u0)
    };

    ((nx + mag_u0) / nx, tau)
}

/// `u[i] /= div` for `i in row0..row1`.
pub fn divide_elements<T: FloatScalar>(row0: usize, row1: usize, u: &mut [T], div: Complex<T>) {
    for i in row0..row1 {
        let z = load(u, i) / div;
        store(u, i, z);
    }
}

/// Turn the reflector whose leading entry sits at `row0` into one with an
/// implicit leading one: divide `u[row0 + 1..row1]` by `lead` and set
/// `u[row0] = 1`.
pub fn normalize_reflector<T: FloatScalar>(row0: usize, row1: usize, u: &mut [T], lead: Complex<T>) {
    divide_elements(row0 + 1, row1, u, lead);
    store(u, row0, Complex::new(T::one(), T::zero()));
}

/// Rebuild a packed reflector stored below row `row0` of column `col`:
/// `u[row0] = 1`, `u[i] = a[i, col]` for `i in row0 + 1..row1`.
pub fn extract_householder_column<T: FloatScalar>(
    a: &impl ComplexMatrixRef<T>,
    row0: usize,
    row1: usize,
    col: usize,
    u: &mut [T],
) {
    store(u, row0, Complex::new(T::one(), T::zero()));
    for i in (row0 + 1)..row1 {
        store(u, i, a.get(i, col));
    }
}

/// Left-multiply in place: `A[w0..w1, col0..] = (I - gamma u u^H) A[w0..w1, col0..]`.
///
/// `scratch` accumulates `gamma * u^H A` per column and must hold at least
/// `2 * a.ncols()` reals.
pub fn rank1_update_left<T: FloatScalar>(
    a: &mut impl ComplexMatrixMut<T>,
    u: &[T],
    gamma: T,
    col0: usize,
    w0: usize,
    w1: usize,
    scratch: &mut [T],
) {
    if w0 >= w1 {
        return;
    }
    let ncols = a.ncols();
    let data = a.as_interleaved_mut();

    // scratch[j] = sum_i conj(u_i) * a_ij
    let u0 = load(u, w0).conj();
    for j in col0..ncols {
        store(scratch, j, u0 * load(data, w0 * ncols + j));
    }
    for i in (w0 + 1)..w1 {
        let ui = load(u, i).conj();
        for j in col0..ncols {
            let acc = load(scratch, j) + ui * load(data, i * ncols + j);
            store(scratch, j, acc);
        }
    }
    for v in scratch[2 * col0..2 * ncols].iter_mut() {
        *v = *v * gamma;
    }

    for i in w0..w1 {
        let ui = load(u, i);
        for j in col0..ncols {
            let idx = i * ncols + j;
            let z = load(data, idx) - ui * load(scratch, j);
            store(data, idx, z);
        }
    }
}

/// Right-multiply in place: `A[row0.., w0..w1] = A[row0.., w0..w1] (I - gamma u u^H)`.
pub fn rank1_update_right<T: FloatScalar>(
    a: &mut impl ComplexMatrixMut<T>,
    u: &[T],
    gamma: T,
    row0: usize,
    w0: usize,
    w1: usize,
) {
    let nrows = a.nrows();
    let ncols = a.ncols();
    let data = a.as_interleaved_mut();

    for i in row0..nrows {
        let row = i * ncols;
        let mut sum = Complex::<T>::zero();
        for k in w0..w1 {
            sum = sum + load(data, row + k) * load(u, k);
        }
        let sum = sum.scale(-gamma);
        for k in w0..w1 {
            let z = load(data, row + k) + sum * load(u, k).conj();
            store(data, row + k, z);
        }
    }
}
