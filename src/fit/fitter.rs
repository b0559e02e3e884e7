//! Low-level fitting routine for a fixed-degree polynomial.
//!
//! Given:
//! - sample points `x_i`
//! - ground-truth values `y_i`
//! - a fit degree
//!
//! we build the monomial design matrix `[x^d, ..., x, 1]` and solve the
//! least-squares problem for the coefficient vector, highest power first.
//! The fit is a pure function of its inputs: same samples, same result.

use nalgebra::{DMatrix, DVector};

use crate::domain::PolynomialModel;
use crate::error::AnalysisError;
use crate::math::solve_least_squares;
use crate::models::fill_design_row;

/// Fit a degree-`degree` polynomial to `(xs, ys)` by least squares.
///
/// Coefficients come back highest-to-lowest, matching the algebraic form
/// `a*x^d + ... + c*x + d` and the order Horner evaluation consumes.
pub fn fit_polynomial(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
) -> Result<PolynomialModel, AnalysisError> {
    let n = xs.len();
    let p = degree + 1;

    if ys.len() != n {
        return Err(AnalysisError::invalid_model(format!(
            "Sample/ground-truth length mismatch: {n} vs {}.",
            ys.len()
        )));
    }
    if n < p {
        return Err(AnalysisError::singular_fit(format!(
            "Need at least {p} samples for a degree-{degree} fit, got {n}."
        )));
    }
    if xs.iter().any(|v| !v.is_finite()) || ys.iter().any(|v| !v.is_finite()) {
        return Err(AnalysisError::singular_fit(
            "Samples and ground truth must be finite.",
        ));
    }

    let mut design = DMatrix::<f64>::zeros(n, p);
    let mut row = vec![0.0; p];
    for i in 0..n {
        fill_design_row(degree, xs[i], &mut row);
        for j in 0..p {
            design[(i, j)] = row[j];
        }
    }
    let rhs = DVector::from_column_slice(ys);

    let beta = solve_least_squares(&design, &rhs).ok_or_else(|| {
        AnalysisError::singular_fit(format!(
            "Design matrix for degree-{degree} fit over {n} samples is rank-deficient."
        ))
    })?;

    PolynomialModel::new(degree, beta.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_domain;
    use crate::domain::{FunctionTag, Interval};
    use crate::models::{evaluate_ground_truth, horner};

    #[test]
    fn recovers_exact_cubic_coefficients() {
        // Synthetic data from a known cubic; the fit should reproduce it.
        let truth = [2.0, -1.5, 0.25, 4.0];
        let xs: Vec<f64> = (0..50).map(|i| -1.0 + i as f64 * 0.04).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| horner(&truth, x)).collect();

        let model = fit_polynomial(&xs, &ys, 3).unwrap();
        assert_eq!(model.degree, 3);
        for (a, b) in model.coefficients.iter().zip(truth.iter()) {
            assert!((a - b).abs() < 1e-9, "coefficient {a} vs {b}");
        }
    }

    #[test]
    fn cubic_fit_of_ln_tracks_ground_truth() {
        // core [1, 2], margin 0.1, step 0.001: the degree-3 fit tracks ln to
        // better than 1e-3 on the core interval; the padding soaks up most of
        // the residual, so the full-domain bound is looser.
        let core = Interval::new(1.0, 2.0).unwrap();
        let xs = sample_domain(core, 0.1, 0.001).unwrap();
        let ys = evaluate_ground_truth(FunctionTag::Ln, &xs).unwrap();

        let model = fit_polynomial(&xs, &ys, 3).unwrap();
        let residual = |&(x, y): &(f64, f64)| (horner(&model.coefficients, x) - y).abs();

        let pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        let max_full = pairs.iter().map(residual).fold(0.0_f64, f64::max);
        let max_core = pairs
            .iter()
            .filter(|(x, _)| core.contains(*x))
            .map(residual)
            .fold(0.0_f64, f64::max);
        assert!(max_core < 1e-3, "core residual {max_core}");
        assert!(max_full < 3e-3, "full-domain residual {max_full}");
    }

    #[test]
    fn underdetermined_fit_is_singular() {
        let err = fit_polynomial(&[1.0, 2.0], &[0.0, 0.7], 3).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(fit_polynomial(&[1.0, 2.0, 3.0], &[0.0, 0.7], 1).is_err());
    }

    #[test]
    fn repeated_sample_values_collapse_rank() {
        // All x identical: the monomial columns are collinear.
        let xs = [1.5; 10];
        let ys: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let err = fit_polynomial(&xs, &ys, 3).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
