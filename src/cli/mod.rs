//! Command-line parsing for the polynomial approximation checker.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::FunctionTag;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "fitcheck",
    version,
    about = "Compare a least-squares polynomial fit against a minimax reference"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the analysis, print the run summary, and optionally export series.
    Analyze(AnalyzeArgs),
    /// Print fitted coefficients only (useful for scripting).
    Coeffs(AnalyzeArgs),
}

/// Common options for analysis runs.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Target function to approximate.
    #[arg(short = 'f', long, value_enum)]
    pub function: FunctionTag,

    /// Core interval start (default: the function's recorded interval).
    #[arg(long)]
    pub start: Option<f64>,

    /// Core interval end (default: the function's recorded interval).
    #[arg(long)]
    pub end: Option<f64>,

    /// Padding added on both sides of the core interval before sampling.
    #[arg(long, default_value_t = 0.1)]
    pub margin: f64,

    /// Uniform sample spacing.
    #[arg(long, default_value_t = 0.001)]
    pub step: f64,

    /// Degree of the least-squares fit.
    #[arg(long, default_value_t = 3)]
    pub degree: usize,

    /// Reference polynomial coefficients, highest power first, comma-separated
    /// (default: the function's recorded minimax polynomial).
    #[arg(long = "ref-coeffs", value_delimiter = ',', num_args = 1..)]
    pub ref_coeffs: Option<Vec<f64>>,

    /// Export the sampled series (x, truth, fits, errors) to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Export the analysis (models, summaries, parameters) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}
