//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the analysis configuration (per-function defaults + overrides)
//! - runs the pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command};
use crate::domain::{AnalysisConfig, Interval, PolynomialModel};
use crate::error::AnalysisError;

pub mod pipeline;

/// Entry point for the `fitcheck` binary.
pub fn run() -> Result<(), AnalysisError> {
    // We want `fitcheck -f exp` to behave like `fitcheck analyze -f exp`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the terse UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args, OutputMode::Full),
        Command::Coeffs(args) => handle_analyze(args, OutputMode::CoeffsOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    CoeffsOnly,
}

fn handle_analyze(args: AnalyzeArgs, mode: OutputMode) -> Result<(), AnalysisError> {
    let config = analysis_config_from_args(&args)?;
    let result = pipeline::run_analysis(&config)?;

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format::format_run_summary(&config, &result));
        }
        OutputMode::CoeffsOnly => {
            println!(
                "{}",
                crate::report::format::format_coefficients(&result.fitted_model)
            );
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_series_csv(path, &result)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_analysis_json(path, &config, &result)?;
    }

    Ok(())
}

/// Build the pipeline configuration from CLI flags plus per-function defaults.
pub fn analysis_config_from_args(args: &AnalyzeArgs) -> Result<AnalysisConfig, AnalysisError> {
    let default_core = args.function.default_core();
    let core = Interval::new(
        args.start.unwrap_or(default_core.start),
        args.end.unwrap_or(default_core.end),
    )?;

    let reference = match &args.ref_coeffs {
        Some(coeffs) => PolynomialModel::new(coeffs.len().saturating_sub(1), coeffs.clone())?,
        None => args.function.reference_model(),
    };

    Ok(AnalysisConfig {
        function: args.function,
        core,
        margin: args.margin,
        step: args.step,
        degree: args.degree,
        reference,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    })
}

/// Rewrite argv so `fitcheck -f exp` defaults to `fitcheck analyze -f exp`.
///
/// Rules:
/// - `fitcheck`                    -> unchanged (clap prints the help)
/// - `fitcheck -f exp ...`         -> `fitcheck analyze -f exp ...`
/// - `fitcheck --help/--version`   -> unchanged (top-level help/version)
fn rewrite_args(argv: Vec<String>) -> Vec<String> {
    let mut argv = argv;
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "coeffs");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "analyze flags".
    if arg1.starts_with('-') {
        argv.insert(1, "analyze".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FunctionTag;

    fn base_args() -> AnalyzeArgs {
        AnalyzeArgs {
            function: FunctionTag::Ln,
            start: None,
            end: None,
            margin: 0.1,
            step: 0.001,
            degree: 3,
            ref_coeffs: None,
            export_csv: None,
            export_json: None,
        }
    }

    #[test]
    fn defaults_come_from_the_function_tag() {
        let config = analysis_config_from_args(&base_args()).unwrap();
        assert_eq!(config.core, FunctionTag::Ln.default_core());
        assert_eq!(config.reference, FunctionTag::Ln.reference_model());
    }

    #[test]
    fn explicit_interval_overrides_defaults() {
        let mut args = base_args();
        args.start = Some(1.5);
        args.end = Some(3.0);
        let config = analysis_config_from_args(&args).unwrap();
        assert_eq!(config.core.start, 1.5);
        assert_eq!(config.core.end, 3.0);
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let mut args = base_args();
        args.start = Some(3.0);
        args.end = Some(1.0);
        assert!(analysis_config_from_args(&args).is_err());
    }

    #[test]
    fn explicit_reference_coefficients_build_a_model() {
        let mut args = base_args();
        args.ref_coeffs = Some(vec![1.0, -2.0, 0.5]);
        let config = analysis_config_from_args(&args).unwrap();
        assert_eq!(config.reference.degree, 2);
        assert_eq!(config.reference.coefficients, vec![1.0, -2.0, 0.5]);
    }

    #[test]
    fn bare_flags_are_rewritten_to_analyze() {
        let argv = vec!["fitcheck".into(), "-f".into(), "exp".into()];
        let rewritten = rewrite_args(argv);
        assert_eq!(rewritten[1], "analyze");
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        for arg1 in ["analyze", "coeffs", "--help", "-V"] {
            let argv = vec!["fitcheck".into(), arg1.to_string()];
            let rewritten = rewrite_args(argv.clone());
            assert_eq!(rewritten, argv);
        }
    }
}
