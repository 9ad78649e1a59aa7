//! # zhessen
//!
//! Unitary similarity reduction of dense complex matrices to upper
//! Hessenberg form, `A = Q H Q^H`, using compact Householder reflectors.
//! Pure Rust, no-std compatible (needs `alloc`). Intended as the first
//! stage of a complex eigenvalue solver.
//!
//! ## Quick start
//!
//! ```
//! use zhessen::{CMatrix, Complex, HessenbergDecomposition};
//!
//! let a = CMatrix::from_rows(3, 3, &[
//!     Complex::new(4.0_f64, 1.0), Complex::new(1.0, -1.0), Complex::new(-2.0, 0.0),
//!     Complex::new(1.0, 2.0), Complex::new(2.0, 0.0), Complex::new(0.0, 3.0),
//!     Complex::new(-2.0, 1.0), Complex::new(0.5, 0.0), Complex::new(3.0, -2.0),
//! ]);
//!
//! let mut hess = HessenbergDecomposition::new();
//! hess.decompose(a.clone()).unwrap(); // consumes `a`'s copy, reduces in place
//!
//! let h = hess.h();
//! let q = hess.q();
//! assert!(h.get(2, 0).norm() == 0.0);
//! assert!((&(&q * &h) * &q.adjoint()).max_abs_diff(&a) < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`cmatrix`] — `CMatrix<T>`, a heap-allocated complex matrix stored
//!   row-major with interleaved real/imaginary parts. Carries just the
//!   arithmetic needed to check a factorization (product, conjugate
//!   transpose, norms).
//!
//! - [`linalg`] — [`HessenbergDecomposition`], the reducer that owns the
//!   packed working matrix and reflector scales, and
//!   [`linalg::householder`], the stateless reflector kernel it drives.
//!
//! - [`traits`] — [`FloatScalar`] for the real component type (`f32`,
//!   `f64`) and the [`ComplexMatrixRef`] / [`ComplexMatrixMut`] storage
//!   traits the kernel is generic over.
//!
//! ## Logging
//!
//! Decompositions emit `debug`/`trace` records through the [`log`] facade
//! under the `zhessen` target. Nothing is printed unless the application
//! installs a logger.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no      | Pure-Rust float fallback for `no_std` targets |
//!
//! One of `std` or `libm` must be enabled.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cmatrix;
pub mod linalg;
pub mod traits;

pub use cmatrix::{CMatrix, CMatrixf32, CMatrixf64};
pub use linalg::{HessenbergDecomposition, LinalgError, RejectedMatrix};
pub use traits::{ComplexMatrixMut, ComplexMatrixRef, FloatScalar, Scalar};

pub use num_complex::Complex;
