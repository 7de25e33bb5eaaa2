//! # fibcalc-cli
//!
//! Sequence output formatting, stderr messages, and shell completion shared
//! by the FibCalc-rs binaries.

pub mod completion;
pub mod output;
pub mod ui;

pub use output::{write_sequence, OutputFormat};
