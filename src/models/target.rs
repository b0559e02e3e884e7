//! Ground-truth evaluation for the three target functions.
//!
//! Each `FunctionTag` also carries the interval its recorded minimax
//! polynomial was generated for, and the polynomial itself. The reference
//! coefficients were produced externally with Sollya's `fpminimax` and are
//! recorded here verbatim, highest power first.

use crate::domain::{FunctionTag, Interval, PolynomialModel};
use crate::error::AnalysisError;

/// Sollya: `fpminimax(log(x), 3, [|D...|], [0.95, 2.05])`, degree 3 down to 0.
const LN_MINIMAX: [f64; 4] = [
    0.143731192420675585319500555669947061687707901000977,
    -0.88005784993956648332158465564134530723094940185547,
    2.3280353343302793156510688277194276452064514160156,
    -1.5917102950301498243135256416280753910541534423828,
];

/// Sollya: `fpminimax(log(x)/log(2), 3, [|D...|], [0.5, 1.0])`.
const LOG2_MINIMAX: [f64; 4] = [
    1.04449239329354615080092116841115057468414306640625,
    -3.75924393052939986858973497874103486537933349609375,
    5.8216322434128127127905827364884316921234130859375,
    -3.10688310292421920877359298174269497394561767578125,
];

/// Sollya: `fpminimax(exp(x), 3, [|D...|], [0, 1])`.
const EXP_MINIMAX: [f64; 4] = [
    0.27137130054267810663759519229643046855926513671875,
    0.43418272190290696510572843180852942168712615966797,
    1.01217403745740819331899729149881750345230102539062,
    0.99967771959938100945208816483500413596630096435547,
];

impl FunctionTag {
    /// Evaluate the target function at a single point.
    ///
    /// The caller must keep `x > 0` for the logarithms; see
    /// [`evaluate_ground_truth`] for the checked elementwise form.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            FunctionTag::Ln => x.ln(),
            FunctionTag::Log2 => x.ln() / std::f64::consts::LN_2,
            FunctionTag::Exp => x.exp(),
        }
    }

    /// The core interval the recorded minimax polynomial targets.
    pub fn default_core(self) -> Interval {
        let (start, end) = match self {
            FunctionTag::Ln => (1.0, 2.0),
            FunctionTag::Log2 => (0.5, 1.0),
            FunctionTag::Exp => (0.0, 1.0),
        };
        Interval { start, end }
    }

    /// The recorded minimax reference polynomial for this function.
    pub fn reference_model(self) -> PolynomialModel {
        let coefficients = match self {
            FunctionTag::Ln => LN_MINIMAX,
            FunctionTag::Log2 => LOG2_MINIMAX,
            FunctionTag::Exp => EXP_MINIMAX,
        };
        PolynomialModel {
            degree: 3,
            coefficients: coefficients.to_vec(),
        }
    }

    /// Whether the function is undefined at or below zero.
    fn requires_positive_input(self) -> bool {
        matches!(self, FunctionTag::Ln | FunctionTag::Log2)
    }
}

/// Evaluate the target function at every sample point.
///
/// Fails with a domain error if any sample lies outside the function's valid
/// range. The sampler is expected to keep the padded domain positive for the
/// logarithms, so a failure here means the caller broke that precondition.
pub fn evaluate_ground_truth(
    function: FunctionTag,
    samples: &[f64],
) -> Result<Vec<f64>, AnalysisError> {
    if function.requires_positive_input() {
        if let Some(x) = samples.iter().find(|x| **x <= 0.0) {
            return Err(AnalysisError::domain_error(format!(
                "{}({x}) is undefined; the padded domain must stay positive.",
                function.display_name()
            )));
        }
    }
    Ok(samples.iter().map(|&x| function.eval(x)).collect())
}
