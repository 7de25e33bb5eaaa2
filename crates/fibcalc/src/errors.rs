//! Error handling and exit codes.

use fibcalc_core::FibError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including calculator runs that report a domain error.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O failure on stdin or stdout).
    pub const ERROR_GENERIC: i32 = 1;
    /// Missing or unparsable command-line argument (clap's usage exit code).
    pub const ERROR_USAGE: i32 = 2;
    /// Requested Fibonacci terms do not fit in a u64 (`--checked`).
    pub const ERROR_OVERFLOW: i32 = 3;
    /// Requested sequence is too large to allocate.
    pub const ERROR_ALLOCATION: i32 = 4;
}

/// Map an application error to its exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Overflow { .. }) => exit_codes::ERROR_OVERFLOW,
        Some(FibError::Allocation { .. }) => exit_codes::ERROR_ALLOCATION,
        None => exit_codes::ERROR_GENERIC,
    }
}
