//! Shift selection for the implicit-shift bidiagonal QR sweep.
//!
//! The shift is the singular value of the trailing 2x2 block
//!
//! ```text
//! | b1 g1 |
//! |  0 b2 |
//! ```
//!
//! closest to `b2`, i.e. a root of `λ⁴ - dλ² + e = 0` with `d = b1² + b2² + g1²`,
//! `e = b1² b2²`.

use num_traits::Float;

/// Shift from the trailing 2x2 bidiagonal block `(b1, g1, b2)`.
///
/// Picks the root `λ` closest to `|b2|` (ties go to the larger root) and gives it the sign of
/// `b2`. A negative discriminant falls back to `b2`.
pub fn wilkinson_shift<T: Float>(b1: T, g1: T, b2: T) -> T {
    let mx = b1.abs().max(g1.abs()).max(b2.abs());
    if mx == T::zero() {
        return b2;
    }
    // roots scale linearly, so solve on the normalized block
    let (b1, g1, b2n) = (b1 / mx, g1 / mx, b2 / mx);
    let two = T::one() + T::one();
    let d = b1 * b1 + b2n * b2n + g1 * g1;
    let e = b1 * b1 * b2n * b2n;
    let disc = d * d - two * two * e;
    if disc < T::zero() {
        return b2;
    }
    let f = disc.sqrt();
    let large = ((d + f) / two).sqrt();
    // d <= f happens only through rounding when e is ~0; the small root is then 0
    let small = ((d - f) / two).max(T::zero()).sqrt();
    let target = b2n.abs();
    let lambda = if (large - target).abs() <= (small - target).abs() { large } else { small };
    let lambda = lambda * mx;
    if b2 < T::zero() { -lambda } else { lambda }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal_block_returns_closest_entry() {
        assert_abs_diff_eq!(wilkinson_shift(3.0, 0.0, 2.0), 2.0, epsilon = 1e-14);
        assert_abs_diff_eq!(wilkinson_shift(2.0, 0.0, -3.0), -3.0, epsilon = 1e-14);
    }

    #[test]
    fn picks_singular_value_closest_to_b2() {
        // singular values of [[0, 1], [0, 1]] are sqrt(2) and 0
        let rho = wilkinson_shift(0.0, -1.0, 1.0);
        assert_abs_diff_eq!(rho, (2.0f64).sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn tie_prefers_larger_root() {
        // b1 = b2, g1 = 0: both roots equal |b2|
        assert_abs_diff_eq!(wilkinson_shift(1.0, 0.0, 1.0), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn zero_block_gives_zero_shift() {
        assert_eq!(wilkinson_shift(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn huge_entries_do_not_overflow() {
        let rho = wilkinson_shift(1e300, 0.0, 2e300);
        assert!(rho.is_finite());
        assert_abs_diff_eq!(rho / 1e300, 2.0, epsilon = 1e-14);
    }
}
