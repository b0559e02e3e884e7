//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and error analysis
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Which transcendental function the approximation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FunctionTag {
    /// Natural logarithm.
    Ln,
    /// Binary logarithm, `ln(x) / ln(2)`.
    Log2,
    /// Natural exponential.
    Exp,
}

impl FunctionTag {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FunctionTag::Ln => "ln",
            FunctionTag::Log2 => "log2",
            FunctionTag::Exp => "exp",
        }
    }
}

/// The core region of interest on the x-axis.
///
/// The sampler pads this interval by a margin on both sides so the behavior
/// of the approximations just outside the fit region is visible too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Result<Self, AnalysisError> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(AnalysisError::invalid_domain(format!(
                "Interval [{start}, {end}] must be finite with start < end."
            )));
        }
        Ok(Self { start, end })
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

/// A fixed-degree polynomial, coefficients ordered highest power first.
///
/// For degree 3 the algebraic form is `a*x^3 + b*x^2 + c*x + d` with
/// `coefficients = [a, b, c, d]`. The same representation is used for both
/// the least-squares fit (computed) and the minimax reference (supplied as
/// literal constants from an external solver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialModel {
    pub degree: usize,
    pub coefficients: Vec<f64>,
}

impl PolynomialModel {
    /// Construct a model, validating the degree/coefficient relationship.
    pub fn new(degree: usize, coefficients: Vec<f64>) -> Result<Self, AnalysisError> {
        if coefficients.len() != degree + 1 {
            return Err(AnalysisError::invalid_model(format!(
                "Degree {degree} polynomial needs {} coefficients, got {}.",
                degree + 1,
                coefficients.len()
            )));
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(AnalysisError::invalid_model(
                "Polynomial coefficients must be finite.",
            ));
        }
        Ok(Self {
            degree,
            coefficients,
        })
    }
}

/// Min/max bounds of a series, ties resolved to the first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub min: f64,
    pub max: f64,
}

/// Error bounds for one approximation: over the full padded domain and
/// restricted to the core interval (used to place the boundary markers
/// separating "in-range" from "padding" regions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub full: ErrorSummary,
    pub core: ErrorSummary,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus per-function defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub function: FunctionTag,
    pub core: Interval,
    /// Padding added on both sides of `core` before sampling.
    pub margin: f64,
    /// Uniform sample spacing over the padded domain.
    pub step: f64,
    /// Degree of the least-squares fit.
    pub degree: usize,
    /// Externally supplied minimax polynomial, highest power first.
    pub reference: PolynomialModel,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// All computed outputs of a single analysis run.
///
/// The presentation layer reads these fields only; nothing here is mutated
/// after the pipeline returns.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Uniformly spaced x-values over the padded domain.
    pub samples: Vec<f64>,
    /// Target function evaluated at each sample.
    pub ground_truth: Vec<f64>,
    /// Least-squares fit, coefficients highest power first.
    pub fitted_model: PolynomialModel,
    /// Fitted polynomial evaluated at each sample.
    pub fitted_series: Vec<f64>,
    /// Reference (minimax) polynomial evaluated at each sample.
    pub reference_series: Vec<f64>,
    /// `fitted_series[i] - ground_truth[i]`.
    pub fit_error: Vec<f64>,
    /// `reference_series[i] - ground_truth[i]`.
    pub reference_error: Vec<f64>,
    pub fit_summary: SeriesSummary,
    pub reference_summary: SeriesSummary,
}
