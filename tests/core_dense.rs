//! Tests for the dense, diagonal and vector-view containers.
//!
//! These tests verify construction, views, products and the faer interop of the containers
//! the decomposition engine is built on, using random and fixed data.

use approx::assert_abs_diff_eq;
use faer::Mat;
use singular::{max_abs_diff, DiagonalMatrix, Matrix, SingularError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test the matrix product against a manual row-by-column computation on random data.
#[test]
fn product_random_small() {
    let (m, k, n) = (4, 5, 3);
    let mut rng = StdRng::seed_from_u64(7);
    let a_vals: Vec<f64> = (0..m * k).map(|_| rng.r#gen()).collect();
    let b_vals: Vec<f64> = (0..k * n).map(|_| rng.r#gen()).collect();
    let a = Matrix::from_row_major(m, k, &a_vals).unwrap();
    let b = Matrix::from_row_major(k, n, &b_vals).unwrap();
    let c = &a * &b;
    for i in 0..m {
        for j in 0..n {
            let expected = (0..k).map(|l| a_vals[i * k + l] * b_vals[l * n + j]).sum::<f64>();
            assert_abs_diff_eq!(c[(i, j)], expected, epsilon = 1e-12);
        }
    }
    assert_eq!(a.checked_mul(&b).unwrap(), c);
}

/// Cloning yields an independent copy.
#[test]
fn clone_is_independent() {
    let a = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut b = a.clone();
    b.set(0, 0, 9.0);
    assert_eq!(a.get(0, 0), 1.0);
    assert_eq!(b.get(0, 0), 9.0);
}

/// Fill, identity and transpose agree with their row-major definitions.
#[test]
fn fill_identity_transpose() {
    let mut a = Matrix::<f64>::zeros(2, 3);
    a.fill(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert!(a.fill(&[1.0]).is_err());
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    let eye = Matrix::<f64>::identity(3);
    assert_eq!(&t * &Matrix::identity(2), t);
    assert_eq!(eye.row(1).to_vec(), vec![0.0, 1.0, 0.0]);
}

/// Row views slice and iterate; writes through a mutable row land in the matrix.
#[test]
fn views_slice_and_write_through() {
    let mut a = Matrix::from_row_major(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    let sum: f64 = a.column(1).slice(1).unwrap().iter().sum();
    assert_eq!(sum, 13.0);
    assert_eq!(
        a.row(0).slice(5).unwrap_err(),
        SingularError::SliceOutOfRange { start: 5, len: 3 }
    );
    {
        let mut r = a.row_mut(2).slice(1).unwrap();
        r[0] = -8.0;
        r.set(1, -9.0);
    }
    assert_eq!(a.row(2).to_vec(), vec![7.0, -8.0, -9.0]);
}

/// Diagonal matrices multiply with dense matrices on either side like their dense expansion.
#[test]
fn diagonal_products_match_dense() {
    let mut rng = StdRng::seed_from_u64(11);
    let d = DiagonalMatrix::from_values(3, 4, &[2.0, -1.0, 0.5]).unwrap();
    let left = Matrix::from_fn(2, 3, |_, _| rng.gen_range(-1.0..1.0));
    let right = Matrix::from_fn(4, 2, |_, _| rng.gen_range(-1.0..1.0));
    let dense = d.to_dense();
    assert!(max_abs_diff(&(&left * &d), &(&left * &dense)) < 1e-15);
    assert!(max_abs_diff(&(&d * &right), &(&dense * &right)) < 1e-15);
}

/// faer matrices convert to row-major storage and compare directly through the access traits.
#[test]
fn faer_interop() {
    let f = Mat::from_fn(3, 2, |i, j| (i as f64) - 2.0 * (j as f64));
    let m = Matrix::from(&f);
    assert_eq!(m[(2, 1)], 0.0);
    assert_eq!(max_abs_diff(&m, &f), 0.0);
    assert_eq!(max_abs_diff(&m.to_faer(), &f), 0.0);
}
