//! Sample generation over the padded analysis domain.

pub mod sample;

pub use sample::*;
