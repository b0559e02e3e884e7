//! Export of analysis outputs to CSV and JSON.

pub mod export;
