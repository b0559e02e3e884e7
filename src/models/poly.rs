//! Polynomial evaluation and design rows.
//!
//! Evaluation uses Horner's scheme in strictly high-to-low coefficient
//! order. The order matters: the minimax reference coefficients were chosen
//! for exactly this nesting, and changing the association changes the
//! rounding of intermediate results. Evaluation is a pure function, so
//! repeated calls with identical inputs are bit-identical.

use crate::domain::PolynomialModel;

/// Evaluate a polynomial at `x`, coefficients highest power first.
///
/// `result = c0; for each remaining c: result = result * x + c`.
///
/// # Panics
/// Panics if `coefficients` is empty. `PolynomialModel` guarantees at least
/// one coefficient, so validated callers never hit this.
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    let mut acc = coefficients[0];
    for &c in &coefficients[1..] {
        acc = acc * x + c;
    }
    acc
}

/// Evaluate `model` at every sample point.
pub fn evaluate_series(model: &PolynomialModel, samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .map(|&x| horner(&model.coefficients, x))
        .collect()
}

/// Fill a design row `[x^degree, ..., x, 1]` for the least-squares fit.
///
/// Columns are ordered highest power first so the solved coefficient vector
/// comes back in the same order `horner` consumes.
///
/// # Panics
/// Panics if `out` does not have length `degree + 1`. Callers size the row
/// from the fit degree.
pub fn fill_design_row(degree: usize, x: f64, out: &mut [f64]) {
    out[degree] = 1.0;
    for j in (0..degree).rev() {
        out[j] = out[j + 1] * x;
    }
}
