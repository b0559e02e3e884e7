//! Error analysis: pointwise error series and min/max summaries.
//!
//! We keep formatting code in `format` so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

use crate::domain::{ErrorSummary, Interval, SeriesSummary};
use crate::error::AnalysisError;

/// Compute the pointwise error `approx[i] - truth[i]`.
pub fn error_series(approx: &[f64], truth: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if approx.len() != truth.len() {
        return Err(AnalysisError::invalid_model(format!(
            "Series length mismatch: {} vs {}.",
            approx.len(),
            truth.len()
        )));
    }
    Ok(approx
        .iter()
        .zip(truth.iter())
        .map(|(a, y)| a - y)
        .collect())
}

/// Min/max over a whole series.
///
/// Ties resolve to the first occurrence in sample order, which keeps the
/// result deterministic for test assertions.
pub fn summarize(series: &[f64]) -> Result<ErrorSummary, AnalysisError> {
    let mut iter = series.iter();
    let Some(&first) = iter.next() else {
        return Err(AnalysisError::invalid_domain(
            "Cannot summarize an empty series.",
        ));
    };

    let mut min = first;
    let mut max = first;
    for &v in iter {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Ok(ErrorSummary { min, max })
}

/// Min/max restricted to samples whose x lies inside the core interval.
pub fn summarize_core(
    xs: &[f64],
    series: &[f64],
    core: Interval,
) -> Result<ErrorSummary, AnalysisError> {
    if xs.len() != series.len() {
        return Err(AnalysisError::invalid_model(format!(
            "Sample/series length mismatch: {} vs {}.",
            xs.len(),
            series.len()
        )));
    }
    let restricted: Vec<f64> = xs
        .iter()
        .zip(series.iter())
        .filter(|(x, _)| core.contains(**x))
        .map(|(_, &v)| v)
        .collect();
    if restricted.is_empty() {
        return Err(AnalysisError::invalid_domain(format!(
            "No samples fall inside the core interval [{}, {}].",
            core.start, core.end
        )));
    }
    summarize(&restricted)
}

/// Both summaries for one error series.
pub fn summarize_series(
    xs: &[f64],
    series: &[f64],
    core: Interval,
) -> Result<SeriesSummary, AnalysisError> {
    Ok(SeriesSummary {
        full: summarize(series)?,
        core: summarize_core(xs, series, core)?,
    })
}
