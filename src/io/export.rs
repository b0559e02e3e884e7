//! Export analysis outputs.
//!
//! Two formats:
//! - CSV: one row per sample with ground truth, both fitted series, and both
//!   error series. Easy to consume in spreadsheets or plotting scripts.
//! - JSON: the "portable" representation of a run (parameters, models,
//!   summaries) for later comparison. The schema is defined by
//!   `AnalysisDocument`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{AnalysisConfig, AnalysisResult, FunctionTag, Interval, PolynomialModel, SeriesSummary};
use crate::error::AnalysisError;

/// Write per-sample series to a CSV file.
pub fn write_series_csv(path: &Path, result: &AnalysisResult) -> Result<(), AnalysisError> {
    let mut file = File::create(path).map_err(|e| {
        AnalysisError::io(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "x,ground_truth,fit,reference,fit_error,reference_error")
        .map_err(|e| AnalysisError::io(format!("Failed to write export CSV header: {e}")))?;

    for i in 0..result.samples.len() {
        writeln!(
            file,
            "{:.10},{:.17e},{:.17e},{:.17e},{:.17e},{:.17e}",
            result.samples[i],
            result.ground_truth[i],
            result.fitted_series[i],
            result.reference_series[i],
            result.fit_error[i],
            result.reference_error[i],
        )
        .map_err(|e| AnalysisError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// JSON export schema: run parameters, both models, and the error summaries.
///
/// The raw series are left to the CSV export; this document stays small
/// enough to diff between runs.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDocument {
    pub tool: String,
    pub function: FunctionTag,
    pub core: Interval,
    pub margin: f64,
    pub step: f64,
    pub sample_count: usize,
    pub fitted_model: PolynomialModel,
    pub reference_model: PolynomialModel,
    pub fit_summary: SeriesSummary,
    pub reference_summary: SeriesSummary,
}

/// Write the analysis JSON file.
pub fn write_analysis_json(
    path: &Path,
    config: &AnalysisConfig,
    result: &AnalysisResult,
) -> Result<(), AnalysisError> {
    let file = File::create(path).map_err(|e| {
        AnalysisError::io(format!(
            "Failed to create analysis JSON '{}': {e}",
            path.display()
        ))
    })?;

    let document = AnalysisDocument {
        tool: "fitcheck".to_string(),
        function: config.function,
        core: config.core,
        margin: config.margin,
        step: config.step,
        sample_count: result.samples.len(),
        fitted_model: result.fitted_model.clone(),
        reference_model: config.reference.clone(),
        fit_summary: result.fit_summary,
        reference_summary: result.reference_summary,
    };

    serde_json::to_writer_pretty(file, &document)
        .map_err(|e| AnalysisError::io(format!("Failed to write analysis JSON: {e}")))?;

    Ok(())
}
