//! Target-function and polynomial evaluation.
//!
//! The fitter and the error analyzer rely on three primitive operations:
//! - evaluate the target transcendental function (ground truth)
//! - build a design row for a given x and degree (for least squares)
//! - evaluate a polynomial via Horner's scheme (for fitted/reference series)

pub mod poly;
pub mod target;

pub use poly::*;
pub use target::*;
