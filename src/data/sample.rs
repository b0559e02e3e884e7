//! Uniform sample generation over a padded interval.
//!
//! The core interval of interest is widened by a margin on each side before
//! sampling, so the approximations can be inspected slightly beyond the
//! region they are meant to cover.
//!
//! Numerical note: samples are produced by sequential accumulation
//! (`x += step`), not `start + i * step`. The two forms can differ in the
//! last bit, and the accumulation order here is part of the contract so the
//! sequence is bit-for-bit reproducible across runs.

use crate::domain::Interval;
use crate::error::AnalysisError;

/// Padded sampling bounds derived from a core interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedDomain {
    pub start: f64,
    pub end: f64,
}

impl PaddedDomain {
    /// Widen `core` by `margin` on both sides.
    pub fn from_core(core: Interval, margin: f64) -> Result<Self, AnalysisError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(AnalysisError::invalid_domain(format!(
                "Margin must be finite and >= 0, got {margin}."
            )));
        }
        Ok(Self {
            start: core.start - margin,
            end: core.end + margin,
        })
    }
}

/// Generate uniformly spaced samples over the padded domain.
///
/// The sequence starts at `core.start - margin` and advances by `step` until
/// it reaches `core.end + margin` (exclusive). Samples are immutable once
/// generated; length is `floor((end - start) / step)` up to a one-element
/// wobble from floating-point accumulation.
pub fn sample_domain(
    core: Interval,
    margin: f64,
    step: f64,
) -> Result<Vec<f64>, AnalysisError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(AnalysisError::invalid_domain(format!(
            "Step must be finite and > 0, got {step}."
        )));
    }
    // `Interval` has public fields, so re-check the invariant here rather
    // than trusting every caller to have gone through `Interval::new`.
    if !(core.start.is_finite() && core.end.is_finite()) || core.start >= core.end {
        return Err(AnalysisError::invalid_domain(format!(
            "Core interval [{}, {}] must be finite with start < end.",
            core.start, core.end
        )));
    }

    let padded = PaddedDomain::from_core(core, margin)?;

    // Upper bound on the element count so a pathological step can never spin
    // forever; the `x < end` test is still what terminates the normal case.
    let capacity = ((padded.end - padded.start) / step).ceil() as usize + 1;

    let mut samples = Vec::with_capacity(capacity);
    let mut x = padded.start;
    while x < padded.end && samples.len() < capacity {
        samples.push(x);
        x += step;
    }

    Ok(samples)
}
