//! # fibcalc-core
//!
//! Fibonacci engine for FibCalc-rs. Materializes the first `n` terms of the
//! sequence or computes a single term iteratively, over fixed-width unsigned
//! integers.
//!
//! Values wrap modulo `2^width` once they exceed the integer width. F(93) is
//! the largest term that fits in `u64`; use [`checked_nth`] or
//! [`try_generate`] to reject wrapped values instead.

pub mod constants;
pub mod iterator;
pub mod sequence;

// Re-exports
pub use constants::{FIB_TABLE, MAX_FIB_U64};
pub use iterator::FibIterator;
pub use sequence::{
    checked_nth, generate, generate_in, nth, nth_in, try_generate, try_generate_wrapping, FibError,
};
