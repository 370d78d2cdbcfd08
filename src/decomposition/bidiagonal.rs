//! Householder bidiagonalization (Golub–Kahan), Golub & Van Loan §5.4.8.
//!
//! Alternating column and row reflectors reduce a tall `M x N` matrix to upper bidiagonal
//! form `B = U^T A V`, accumulating `U` and `V` so that `A = U B V^T`.

use crate::error::SingularError;
use crate::matrix::Matrix;
use crate::transform::Reflector;
use log::debug;
use num_traits::Float;

/// Reduce `a` (`M >= N`) to upper bidiagonal form.
///
/// Returns `(U, B, V)` with `U` `M x M`, `B` `M x N` nonzero only on its diagonal and
/// superdiagonal, `V` `N x N`, and `A = U B V^T`. `a` itself is never modified.
///
/// # Errors
/// `DimensionMismatch` if `a` has more columns than rows.
pub fn bidiagonalize<T: Float>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>, Matrix<T>), SingularError> {
    let (m, n) = a.shape();
    if m < n {
        return Err(SingularError::DimensionMismatch {
            expected: format!("at least {} rows", n),
            found: format!("{} rows", m),
        });
    }
    let mut u = Matrix::identity(m);
    let mut v = Matrix::identity(n);
    let mut b = a.clone();
    for i in 0..n {
        // zero column i below the diagonal
        let col = Reflector::new(m, b.column(i).slice(i)?)?;
        b = col.apply_from_left_to(&b)?;
        u = col.apply_from_right_to(&u)?;
        if i + 1 < n {
            // zero row i right of the superdiagonal
            let row = Reflector::new(n, b.row(i).slice(i + 1)?)?;
            b = row.apply_from_right_to(&b)?;
            v = row.apply_from_right_to(&v)?;
        }
    }
    clean_bidiagonal(&mut b);
    debug!("bidiagonalized {}x{} matrix", m, n);
    Ok((u, b, v))
}

/// Flush the roundoff left outside the two bands to exact zeros.
fn clean_bidiagonal<T: Float>(b: &mut Matrix<T>) {
    for i in 0..b.nrows() {
        for j in 0..b.ncols() {
            if j != i && j != i + 1 {
                b[(i, j)] = T::zero();
            }
        }
    }
}
