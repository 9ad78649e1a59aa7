use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zhessen::{CMatrix, Complex, HessenbergDecomposition, LinalgError};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-8;

fn random_matrix(rng: &mut StdRng, n: usize) -> CMatrix<f64> {
    let values: Vec<C> = (0..n * n)
        .map(|_| c(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    CMatrix::from_rows(n, n, &values)
}

/// `max |a - b|` relative to the size of `scale`.
fn rel_err(a: &CMatrix<f64>, b: &CMatrix<f64>, scale: &CMatrix<f64>) -> f64 {
    a.max_abs_diff(b) / scale.frobenius_norm().max(1.0)
}

fn assert_hessenberg(h: &CMatrix<f64>) {
    let n = h.nrows();
    for i in 0..n {
        for j in 0..i.saturating_sub(1) {
            assert_eq!(h.get(i, j), c(0.0, 0.0), "H[({},{})] should be zero", i, j);
        }
    }
}

// ── Similarity / unitarity over random inputs ────────────────────────

#[test]
fn random_similarity_and_unitarity() {
    let mut rng = StdRng::seed_from_u64(0x4e55);
    let mut hess = HessenbergDecomposition::new();
    for n in [0usize, 1, 2, 3, 4, 7, 10, 16, 25] {
        let a = random_matrix(&mut rng, n);
        hess.decompose(a.clone()).unwrap();
        let h = hess.h();
        let q = hess.q();

        assert_hessenberg(&h);

        let qhaq = &(&q.adjoint() * &a) * &q;
        assert!(rel_err(&qhaq, &h, &a) < TOL, "Q^H A Q != H for n = {}", n);

        let qhq = &q.adjoint() * &q;
        assert!(qhq.max_abs_diff(&CMatrix::eye(n)) < TOL, "Q not unitary for n = {}", n);

        let qhqh = &(&q * &h) * &q.adjoint();
        assert!(rel_err(&qhqh, &a, &a) < TOL, "Q H Q^H != A for n = {}", n);
    }
}

#[test]
fn badly_scaled_input() {
    // max-magnitude pre-scaling keeps huge and tiny entries finite
    let mut rng = StdRng::seed_from_u64(7);
    for scale in [1e-150, 1e150] {
        let base = random_matrix(&mut rng, 6);
        let values: Vec<C> = (0..36).map(|k| base.get(k / 6, k % 6) * scale).collect();
        let a = CMatrix::from_rows(6, 6, &values);
        let hess = a.hessenberg().unwrap();
        let h = hess.h();
        assert!(h.as_slice().iter().all(|x| x.is_finite()), "scale {}", scale);
        let q = hess.q();
        assert!((&q.adjoint() * &q).max_abs_diff(&CMatrix::eye(6)) < TOL);
        let qhaq = &(&q.adjoint() * &a) * &q;
        assert!(qhaq.max_abs_diff(&h) / scale < 1e-6, "scale {}", scale);
    }
}

// ── Concrete scenario ────────────────────────────────────────────────

#[test]
fn known_3x3() {
    let a = CMatrix::from_rows(3, 3, &[
        c(2.0, 0.0), c(1.0, 1.0), c(0.0, -1.0),
        c(0.0, 3.0), c(1.0, 0.0), c(2.0, 2.0),
        c(4.0, 0.0), c(-1.0, 1.0), c(3.0, 0.0),
    ]);
    // sub-column [3i, 4]: largest modulus 4, norm 5
    let max = 4.0_f64;
    let hess = a.hessenberg().unwrap();
    let h = hess.h();

    assert_eq!(h.get(2, 0), c(0.0, 0.0));
    let h10 = h.get(1, 0);
    assert!((h10.norm() - 5.0).abs() < 1e-12);
    // phase follows the leading entry 3i, so H[1,0] = -5i
    assert!((h10 - c(0.0, -5.0)).norm() < 1e-12);
    assert!(h10.norm() > max);

    let q = hess.q();
    let back = &(&q * &h) * &q.adjoint();
    assert!(back.max_abs_diff(&a) < TOL);
}

#[test]
fn known_3x3_real_subdiagonal() {
    // real leading entry gives a real subdiagonal equal to minus the norm
    let a = CMatrix::from_rows(3, 3, &[
        c(1.0, 0.0), c(0.0, 2.0), c(1.0, 0.0),
        c(4.0, 0.0), c(1.0, 0.0), c(0.0, 1.0),
        c(0.0, 0.0), c(2.0, 0.0), c(1.0, -1.0),
    ]);
    let hess = a.hessenberg().unwrap();
    let h = hess.h();
    // sub-column [4, 0]: max = norm = 4
    assert!((h.get(1, 0) - c(-4.0, 0.0)).norm() < 1e-12);
    assert_eq!(h.get(2, 0), c(0.0, 0.0));
    let q = hess.q();
    assert!((&(&q * &h) * &q.adjoint()).max_abs_diff(&a) < TOL);
}

// ── Sizes, reuse, rejection ──────────────────────────────────────────

#[test]
fn trivial_sizes() {
    let mut hess = HessenbergDecomposition::<f64>::new();

    hess.decompose(CMatrix::zeros(0, 0)).unwrap();
    assert_eq!(hess.h().nrows(), 0);
    assert_eq!(hess.q(), CMatrix::eye(0));

    let one = CMatrix::from_rows(1, 1, &[c(-7.0, 2.0)]);
    hess.decompose(one.clone()).unwrap();
    assert_eq!(hess.h(), one);
    assert_eq!(hess.q(), CMatrix::eye(1));
}

#[test]
fn zero_matrix() {
    let hess = CMatrix::<f64>::zeros(5, 5).hessenberg().unwrap();
    assert!(hess.gammas().iter().all(|&g| g == 0.0));
    assert_eq!(hess.h(), CMatrix::zeros(5, 5));
    assert_eq!(hess.q(), CMatrix::eye(5));
}

#[test]
fn rejects_non_square_unmodified() {
    let a = CMatrix::from_fn(2, 3, |i, j| c(i as f64 + 0.25, -(j as f64)));
    let bytes = a.as_slice().to_vec();
    let mut hess = HessenbergDecomposition::new();
    let rejected = hess.decompose(a).unwrap_err();
    assert_eq!(rejected.error(), LinalgError::NotSquare { nrows: 2, ncols: 3 });
    let back = rejected.into_matrix();
    assert_eq!(back.as_slice(), bytes.as_slice());
}

#[test]
fn small_after_large_on_same_instance() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut hess = HessenbergDecomposition::with_capacity(2);

    let large = random_matrix(&mut rng, 5);
    hess.decompose(large).unwrap();

    let small = random_matrix(&mut rng, 2);
    hess.decompose(small.clone()).unwrap();
    assert_eq!(hess.dim(), 2);
    assert_eq!(hess.gammas().len(), 1);

    let mut fresh = HessenbergDecomposition::new();
    fresh.decompose(small.clone()).unwrap();
    assert_eq!(hess.h(), fresh.h());
    assert_eq!(hess.q(), fresh.q());
    assert_eq!(hess.q(), CMatrix::eye(2));

    let medium = random_matrix(&mut rng, 4);
    hess.decompose(medium.clone()).unwrap();
    let q = hess.q();
    assert!(rel_err(&(&(&q.adjoint() * &medium) * &q), &hess.h(), &medium) < TOL);
}

#[test]
fn resized_chain_through_copying_entry_point() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut hess = HessenbergDecomposition::new();
    for n in [9, 3, 1, 0, 4, 2, 7] {
        let a = random_matrix(&mut rng, n);
        hess.decompose_from(&a).unwrap();
        assert_eq!(hess.dim(), n);
        assert_eq!(hess.gammas().len(), n.saturating_sub(1));

        let h = hess.h();
        let q = hess.q();
        assert_hessenberg(&h);
        assert!(rel_err(&(&(&q.adjoint() * &a) * &q), &h, &a) < TOL, "similarity, n = {}", n);
        assert!(rel_err(&(&q.adjoint() * &q), &CMatrix::eye(n), &CMatrix::eye(n)) < TOL, "unitarity, n = {}", n);

        // q_into and apply_q rebuild the same Q from per-call scratch
        let mut q_dst = CMatrix::zeros(n, n);
        hess.q_into(&mut q_dst);
        assert_eq!(q_dst, q);
        let mut applied = CMatrix::eye(n);
        hess.apply_q(&mut applied);
        assert!(applied.max_abs_diff(&q) < TOL);
    }
}

#[test]
fn zero_leading_subcolumn_entry() {
    // column 0 below the diagonal is [0, 3, 4i]: tau falls back to ||x||
    let a = CMatrix::from_rows(4, 4, &[
        c(1.0, 0.0), c(2.0, 1.0), c(0.0, 1.0), c(1.0, 0.0),
        c(0.0, 0.0), c(3.0, 0.0), c(1.0, -1.0), c(2.0, 0.0),
        c(3.0, 0.0), c(1.0, 2.0), c(4.0, 0.0), c(0.0, 1.0),
        c(0.0, 4.0), c(2.0, 0.0), c(1.0, 0.0), c(5.0, 0.0),
    ]);
    let hess = a.hessenberg().unwrap();
    let h = hess.h();
    let q = hess.q();
    assert_hessenberg(&h);
    assert!((h.get(1, 0) - c(-5.0, 0.0)).norm() < 1e-12);
    assert!(rel_err(&(&(&q.adjoint() * &a) * &q), &h, &a) < TOL);
}

#[test]
fn larger_random_matrix() {
    let mut rng = StdRng::seed_from_u64(60);
    let a = random_matrix(&mut rng, 60);
    let hess = a.hessenberg().unwrap();
    let h = hess.h();
    let q = hess.q();
    assert_hessenberg(&h);
    assert!(rel_err(&(&(&q.adjoint() * &a) * &q), &h, &a) < TOL);
    assert!((&q.adjoint() * &q).max_abs_diff(&CMatrix::eye(60)) < TOL);
}

#[test]
fn copying_entry_point_matches_consuming_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut copying = HessenbergDecomposition::new();
    for n in [6, 3, 8] {
        let a = random_matrix(&mut rng, n);
        copying.decompose_from(&a).unwrap();
        let mut consuming = HessenbergDecomposition::new();
        consuming.decompose(a.clone()).unwrap();
        assert_eq!(copying.packed(), consuming.packed());
        assert_eq!(copying.gammas(), consuming.gammas());
    }
}

#[test]
fn back_transform_eigen_basis() {
    // Q maps Hessenberg-basis vectors back: A (Q x) = Q (H x)
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_matrix(&mut rng, 6);
    let hess = a.hessenberg().unwrap();
    let values: Vec<C> = (0..6).map(|i| c(i as f64, 1.0)).collect();
    let x = CMatrix::from_rows(6, 1, &values);

    let mut qx = x.clone();
    hess.apply_q(&mut qx);
    let mut qhx = hess.h().matmul(&x);
    hess.apply_q(&mut qhx);

    assert!(rel_err(&a.matmul(&qx), &qhx, &a) < TOL);
}

#[test]
fn packed_matrix_survives_into_packed() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_matrix(&mut rng, 4);
    let hess = a.hessenberg().unwrap();
    let packed = hess.packed().clone();
    assert_eq!(hess.into_packed(), packed);
}
