//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the target-function tag (`FunctionTag`)
//! - interval/domain inputs (`Interval`, `AnalysisConfig`)
//! - analysis outputs (`PolynomialModel`, `ErrorSummary`, `AnalysisResult`)

pub mod types;

pub use types::*;
