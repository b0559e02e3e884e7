//! The analysis pipeline shared by all front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sample generation -> ground truth -> {fit, reference evaluation} -> error analysis
//!
//! The CLI can then focus on presentation (printing and exports).

use rayon::join;

use crate::data::sample_domain;
use crate::domain::{AnalysisConfig, AnalysisResult, PolynomialModel};
use crate::error::AnalysisError;
use crate::fit::fit_polynomial;
use crate::models::{evaluate_ground_truth, evaluate_series};
use crate::report::{error_series, summarize_series};

/// Execute the full analysis pipeline and return the computed outputs.
///
/// All-or-nothing: any stage failure aborts the run and no partial results
/// are returned. The fitted and reference branches are independent and run
/// on separate workers; both must complete before error analysis starts.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
    // Re-validate the reference model so a hand-assembled config cannot
    // smuggle in a degree/coefficient mismatch.
    let reference =
        PolynomialModel::new(config.reference.degree, config.reference.coefficients.clone())?;

    // 1) Sample the padded domain.
    let samples = sample_domain(config.core, config.margin, config.step)?;

    // 2) Evaluate ground truth.
    let ground_truth = evaluate_ground_truth(config.function, &samples)?;

    // 3) Two independent branches: least-squares fit vs reference evaluation.
    let (fit_branch, reference_series) = join(
        || -> Result<(PolynomialModel, Vec<f64>), AnalysisError> {
            let model = fit_polynomial(&samples, &ground_truth, config.degree)?;
            let series = evaluate_series(&model, &samples);
            Ok((model, series))
        },
        || evaluate_series(&reference, &samples),
    );
    let (fitted_model, fitted_series) = fit_branch?;

    // 4) Error analysis over both branches.
    let fit_error = error_series(&fitted_series, &ground_truth)?;
    let reference_error = error_series(&reference_series, &ground_truth)?;
    let fit_summary = summarize_series(&samples, &fit_error, config.core)?;
    let reference_summary = summarize_series(&samples, &reference_error, config.core)?;

    Ok(AnalysisResult {
        samples,
        ground_truth,
        fitted_model,
        fitted_series,
        reference_series,
        fit_error,
        reference_error,
        fit_summary,
        reference_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FunctionTag, Interval};
    use crate::models::horner;

    fn config(function: FunctionTag) -> AnalysisConfig {
        AnalysisConfig {
            function,
            core: function.default_core(),
            margin: 0.1,
            step: 0.001,
            degree: 3,
            reference: function.reference_model(),
            export_csv: None,
            export_json: None,
        }
    }

    #[test]
    fn exp_run_produces_consistent_series() {
        let cfg = config(FunctionTag::Exp);
        let result = run_analysis(&cfg).unwrap();

        let n = result.samples.len();
        assert!(n.abs_diff(1200) <= 1, "expected ~1200 samples, got {n}");
        assert_eq!(result.ground_truth.len(), n);
        assert_eq!(result.fitted_series.len(), n);
        assert_eq!(result.reference_series.len(), n);
        assert_eq!(result.fit_error.len(), n);
        assert_eq!(result.reference_error.len(), n);
    }

    #[test]
    fn ln_fit_error_stays_under_a_millith_on_core() {
        let cfg = config(FunctionTag::Ln);
        let result = run_analysis(&cfg).unwrap();

        let core_abs = result
            .fit_summary
            .core
            .min
            .abs()
            .max(result.fit_summary.core.max.abs());
        assert!(core_abs < 1e-3, "core fit error {core_abs}");

        // Summaries bound the series they summarize.
        for &e in &result.fit_error {
            assert!(result.fit_summary.full.min <= e);
            assert!(e <= result.fit_summary.full.max);
        }
        assert!(result.fit_summary.core.min >= result.fit_summary.full.min);
        assert!(result.fit_summary.core.max <= result.fit_summary.full.max);
    }

    #[test]
    fn reference_series_is_the_horner_evaluation() {
        let cfg = config(FunctionTag::Exp);
        let result = run_analysis(&cfg).unwrap();
        for (&x, &y) in result.samples.iter().zip(result.reference_series.iter()) {
            assert_eq!(y.to_bits(), horner(&cfg.reference.coefficients, x).to_bits());
        }
    }

    #[test]
    fn reference_error_of_recorded_minimax_is_small_on_core() {
        for function in [FunctionTag::Ln, FunctionTag::Log2, FunctionTag::Exp] {
            let result = run_analysis(&config(function)).unwrap();
            let core = result.reference_summary.core;
            assert!(
                core.min.abs() < 1e-2 && core.max.abs() < 1e-2,
                "{} reference error [{}, {}]",
                function.display_name(),
                core.min,
                core.max
            );
        }
    }

    #[test]
    fn degenerate_core_interval_aborts_the_run() {
        // Bypass Interval::new via the public fields; the sampler still
        // rejects start == end instead of producing a padded-only run.
        let mut cfg = config(FunctionTag::Exp);
        cfg.core = Interval {
            start: 1.0,
            end: 1.0,
        };
        let err = run_analysis(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_step_aborts_with_no_partial_result() {
        let mut cfg = config(FunctionTag::Exp);
        cfg.step = 0.0;
        let err = run_analysis(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_reference_is_rejected_before_sampling() {
        let mut cfg = config(FunctionTag::Exp);
        cfg.reference.coefficients.pop();
        let err = run_analysis(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn nonpositive_padded_domain_fails_for_ln() {
        let mut cfg = config(FunctionTag::Ln);
        cfg.core = Interval::new(0.05, 1.0).unwrap();
        // margin 0.1 pushes the padded start below zero.
        let err = run_analysis(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
