//! Formatted terminal output for an analysis run.

use crate::domain::{AnalysisConfig, AnalysisResult, PolynomialModel, SeriesSummary};

/// Format the full run summary (domain, fitted model, error bounds).
pub fn format_run_summary(config: &AnalysisConfig, result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("=== fitcheck - Polynomial Approximation Check ===\n");
    out.push_str(&format!("Function: {}\n", config.function.display_name()));
    out.push_str(&format!(
        "Core: [{}, {}] | margin={} | step={}\n",
        config.core.start, config.core.end, config.margin, config.step
    ));
    out.push_str(&format!(
        "Samples: n={} over [{:.6}, {:.6}]\n",
        result.samples.len(),
        result.samples.first().copied().unwrap_or(f64::NAN),
        result.samples.last().copied().unwrap_or(f64::NAN),
    ));

    out.push_str("\nLeast-squares fit:\n");
    out.push_str(&format!(
        "- degree {} coefficients (highest first): {}\n",
        result.fitted_model.degree,
        fmt_vec(&result.fitted_model.coefficients)
    ));

    out.push_str("\nMinimax reference:\n");
    out.push_str(&format!(
        "- degree {} coefficients (highest first): {}\n",
        config.reference.degree,
        fmt_vec(&config.reference.coefficients)
    ));

    out.push_str("\nError bounds (approximation - ground truth):\n");
    out.push_str(&format_summary_line("fit", &result.fit_summary));
    out.push_str(&format_summary_line("reference", &result.reference_summary));

    out
}

/// Coefficients-only output for scripting (`fitcheck coeffs`).
pub fn format_coefficients(model: &PolynomialModel) -> String {
    model
        .coefficients
        .iter()
        .map(|c| format!("{c:.17e}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_summary_line(label: &str, summary: &SeriesSummary) -> String {
    format!(
        "- {label:<9} full=[{:+.3e}, {:+.3e}] core=[{:+.3e}, {:+.3e}]\n",
        summary.full.min, summary.full.max, summary.core.min, summary.core.max
    )
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.12}")).collect();
    format!("[{}]", parts.join(", "))
}
