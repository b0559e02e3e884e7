//! Least squares solver.
//!
//! The fitter solves one small linear regression problem per run:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly even when the
//!   design matrix is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - The parameter dimension is tiny (degree + 1 columns against ~1,000
//!   sample rows), so SVD performance is a non-issue.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the design matrix is rank-deficient or the system is
/// too ill-conditioned to solve robustly. The rank check matters: SVD
/// `solve` would otherwise hand back a minimum-norm solution for a singular
/// system, and a rank-deficient fit must be a reported condition here.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails. Monomial
    // basis columns over a narrow interval are strongly correlated, so the
    // tolerance balances numerical stability with solution acceptance.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if svd.rank(tol) < x.ncols() {
            continue;
        }
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn rank_deficient_system_is_rejected() {
        // Two identical columns: rank 1 < 2.
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }

    #[test]
    fn overdetermined_system_minimizes_residuals() {
        // y = 1 + 2x with one noisy point; the solution should stay close.
        let x = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 3.0, 5.0, 7.1]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 1.0).abs() < 0.1);
        assert!((beta[1] - 2.0).abs() < 0.1);
    }
}
