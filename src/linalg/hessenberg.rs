use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;

use crate::cmatrix::CMatrix;
use crate::linalg::householder::{
    compute_tau_gamma_and_divide, extract_column_and_max, extract_householder_column,
    normalize_reflector, rank1_update_left, rank1_update_right,
};
use crate::linalg::{LinalgError, RejectedMatrix};
use crate::traits::FloatScalar;

const LOG_TARGET: &str = "zhessen";

/// Scratch sized for this many rows until a larger matrix comes along.
const DEFAULT_CAPACITY: usize = 5;

/// Unitary similarity reduction of a square complex matrix to upper
/// Hessenberg form: `A = Q H Q^H`.
///
/// The reduction runs in place on the matrix handed to
/// [`decompose`](Self::decompose). Afterwards that buffer holds two things
/// at once:
/// - on and above the first subdiagonal: H
/// - strictly below the first subdiagonal, column `k`: components `k+2..N`
///   of the Householder vector for column `k`. Its component `k+1` is an
///   implicit one.
///
/// [`gammas`](Self::gammas) holds the matching reflector scales, with
/// `gamma[k] == 0` marking a column that was already reduced. `H` and `Q`
/// are materialised on demand by [`h`](Self::h) and [`q`](Self::q).
///
/// Scratch buffers are kept between calls and only grow, so one instance
/// can decompose many matrices without reallocating.
///
/// # Example
///
/// ```
/// use zhessen::{CMatrix, Complex, HessenbergDecomposition};
///
/// let a = CMatrix::from_fn(4, 4, |i, j| Complex::new((i + 2 * j) as f64, i as f64 - j as f64));
/// let mut hess = HessenbergDecomposition::new();
/// hess.decompose(a.clone()).unwrap();
///
/// let h = hess.h();
/// let q = hess.q();
/// assert_eq!(h.get(3, 0), Complex::new(0.0, 0.0));
/// assert!((&(&q.adjoint() * &a) * &q).max_abs_diff(&h) < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct HessenbergDecomposition<T> {
    qh: CMatrix<T>,
    n: usize,
    gammas: Vec<T>,
    u: Vec<T>,
    b: Vec<T>,
}

impl<T: FloatScalar> Default for HessenbergDecomposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar> HessenbergDecomposition<T> {
    /// Empty reducer with scratch for small matrices.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Pre-size scratch so matrices up to `n x n` decompose without
    /// allocating.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            qh: CMatrix::zeros(0, 0),
            n: 0,
            gammas: vec![T::zero(); n],
            u: vec![T::zero(); 2 * n],
            b: vec![T::zero(); 2 * n],
        }
    }

    /// Decompose `a` in place.
    ///
    /// Takes ownership of `a`: the buffer becomes the packed factorization
    /// returned by [`packed`](Self::packed). A non-square matrix is handed
    /// back untouched inside the error.
    pub fn decompose(&mut self, a: CMatrix<T>) -> Result<(), RejectedMatrix<T>> {
        if !a.is_square() {
            let error = LinalgError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            };
            return Err(RejectedMatrix::new(error, a));
        }
        self.qh = a;
        self.reduce();
        Ok(())
    }

    /// Decompose a copy of `a`, leaving the input intact.
    ///
    /// The copy goes into the working matrix kept from the previous call,
    /// reusing its allocation when it is large enough.
    pub fn decompose_from(&mut self, a: &CMatrix<T>) -> Result<(), LinalgError> {
        if !a.is_square() {
            return Err(LinalgError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        self.qh.assign(a);
        self.reduce();
        Ok(())
    }

    fn reserve(&mut self, n: usize) {
        if self.u.len() < 2 * n {
            log::debug!(
                target: LOG_TARGET,
                "growing hessenberg scratch from {} to {} rows",
                self.u.len() / 2,
                n
            );
            self.u.resize(2 * n, T::zero());
            self.b.resize(2 * n, T::zero());
        }
        if self.gammas.len() < n {
            self.gammas.resize(n, T::zero());
        }
    }

    fn reduce(&mut self) {
        let n = self.qh.nrows();
        self.n = n;
        if n == 0 {
            return;
        }
        self.reserve(n);
        // A previous, larger decomposition may have left live scales here.
        self.gammas[..n - 1].fill(T::zero());
        log::debug!(target: LOG_TARGET, "reducing {}x{} complex matrix to Hessenberg form", n, n);

        for k in 0..n.saturating_sub(2) {
            let max = extract_column_and_max(&self.qh, k + 1, n, k, &mut self.u);
            if max == T::zero() {
                log::trace!(target: LOG_TARGET, "column {} already reduced", k);
                continue;
            }

            let (gamma, tau) = compute_tau_gamma_and_divide(k + 1, n, &mut self.u, max);
            self.gammas[k] = gamma;

            let lead = Complex::new(self.u[2 * (k + 1)], self.u[2 * (k + 1) + 1]) + tau;
            normalize_reflector(k + 1, n, &mut self.u, lead);

            // The reflector's tail goes below the subdiagonal of column k.
            for i in (k + 2)..n {
                self.qh.set(i, k, Complex::new(self.u[2 * i], self.u[2 * i + 1]));
            }

            rank1_update_left(&mut self.qh, &self.u, gamma, k + 1, k + 1, n, &mut self.b);
            rank1_update_right(&mut self.qh, &self.u, gamma, 0, k + 1, n);

            // Column k below the diagonal reduces to -tau * max.
            self.qh.set(k + 1, k, -tau.scale(max));
        }
    }

    /// Size `N` of the last decomposed matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The packed working matrix: H on and above the first subdiagonal,
    /// reflector tails below it.
    #[inline]
    pub fn packed(&self) -> &CMatrix<T> {
        &self.qh
    }

    /// Give up the packed working matrix.
    pub fn into_packed(self) -> CMatrix<T> {
        self.qh
    }

    /// Reflector scales, one per column `0..N-1`.
    ///
    /// `gamma[k] == 0` means column `k` needed no reflector. The last entry
    /// is always zero since the final column pair is Hessenberg already.
    #[inline]
    pub fn gammas(&self) -> &[T] {
        &self.gammas[..self.n.saturating_sub(1)]
    }

    /// The upper Hessenberg factor H.
    pub fn h(&self) -> CMatrix<T> {
        let mut h = CMatrix::zeros(self.n, self.n);
        self.h_into(&mut h);
        h
    }

    /// Write H into `h`, which must be `N x N`.
    pub fn h_into(&self, h: &mut CMatrix<T>) {
        let n = self.n;
        assert_eq!(
            (h.nrows(), h.ncols()),
            (n, n),
            "destination must be {}x{}",
            n,
            n
        );
        h.zero_run(0, 2 * n * n);
        if n == 0 {
            return;
        }
        h.copy_run(&self.qh, 0, 0, 2 * n);
        for i in 1..n {
            let start = 2 * (i * n + i - 1);
            h.copy_run(&self.qh, start, start, 2 * (n - i + 1));
        }
    }

    /// The unitary factor Q, with `H = Q^H A Q`.
    pub fn q(&self) -> CMatrix<T> {
        let mut q = CMatrix::zeros(self.n, self.n);
        self.q_into(&mut q);
        q
    }

    /// Write Q into `q`, which must be `N x N`.
    ///
    /// Starts from the identity and applies the reflectors last to first.
    /// Q's block `[k+1.., ..k+1]` is still zero when reflector `k` is
    /// applied, so only columns `k+1..` are touched.
    ///
    /// Extraction borrows `self` shared, so the reflector scratch (`2N`
    /// reals, twice) is allocated per call rather than taken from the
    /// buffers `decompose` grows. The same holds for
    /// [`apply_q`](Self::apply_q) and [`apply_q_adjoint`](Self::apply_q_adjoint).
    pub fn q_into(&self, q: &mut CMatrix<T>) {
        let n = self.n;
        assert_eq!(
            (q.nrows(), q.ncols()),
            (n, n),
            "destination must be {}x{}",
            n,
            n
        );
        q.set_identity();

        let (mut u, mut b) = self.workspace(n);
        for k in (0..n.saturating_sub(2)).rev() {
            let gamma = self.gammas[k];
            if gamma == T::zero() {
                continue;
            }
            extract_householder_column(&self.qh, k + 1, n, k, &mut u);
            rank1_update_left(q, &u, gamma, k + 1, k + 1, n, &mut b);
        }
    }

    /// `m = Q * m` without forming Q. `m` must have `N` rows.
    ///
    /// Maps Hessenberg-basis vectors (eigenvectors of H, say) back to the
    /// basis of the original matrix.
    pub fn apply_q(&self, m: &mut CMatrix<T>) {
        self.check_rows(m);
        let (mut u, mut b) = self.workspace(m.ncols());
        for k in (0..self.n.saturating_sub(2)).rev() {
            self.apply_reflector(k, m, &mut u, &mut b);
        }
    }

    /// `m = Q^H * m` without forming Q. `m` must have `N` rows.
    pub fn apply_q_adjoint(&self, m: &mut CMatrix<T>) {
        self.check_rows(m);
        let (mut u, mut b) = self.workspace(m.ncols());
        for k in 0..self.n.saturating_sub(2) {
            self.apply_reflector(k, m, &mut u, &mut b);
        }
    }

    fn check_rows(&self, m: &CMatrix<T>) {
        assert_eq!(
            m.nrows(),
            self.n,
            "matrix has {} rows, decomposition is {}x{}",
            m.nrows(),
            self.n,
            self.n
        );
    }

    /// Reflector and accumulator scratch for a left update on `ncols` columns.
    fn workspace(&self, ncols: usize) -> (Vec<T>, Vec<T>) {
        (vec![T::zero(); 2 * self.n], vec![T::zero(); 2 * ncols])
    }

    fn apply_reflector(&self, k: usize, m: &mut CMatrix<T>, u: &mut [T], b: &mut [T]) {
        let gamma = self.gammas[k];
        if gamma == T::zero() {
            return;
        }
        extract_householder_column(&self.qh, k + 1, self.n, k, u);
        rank1_update_left(m, u, gamma, 0, k + 1, self.n, b);
    }
}

/// Convenience method on complex matrices.
impl<T: FloatScalar> CMatrix<T> {
    /// Hessenberg decomposition of a copy of `self`.
    ///
    /// ```
    /// use zhessen::{CMatrix, Complex};
    /// let a = CMatrix::from_fn(3, 3, |i, j| Complex::new(1.0 + i as f64, j as f64));
    /// let hess = a.hessenberg().unwrap();
    /// assert!(hess.h().get(2, 0).norm() < 1e-12);
    /// ```
    pub fn hessenberg(&self) -> Result<HessenbergDecomposition<T>, LinalgError> {
        let mut hess = HessenbergDecomposition::with_capacity(self.nrows());
        hess.decompose(self.clone())?;
        Ok(hess)
    }
}
