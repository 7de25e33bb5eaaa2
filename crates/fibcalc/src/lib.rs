//! FibCalc-rs library: application logic behind the `fibocli` and
//! `calculator` binaries.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
