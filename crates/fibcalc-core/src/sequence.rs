//! Sequence generation and direct F(n) lookup.
//!
//! The wrapping functions ([`generate`], [`nth`] and their generic `_in`
//! forms) accept any index and wrap modulo `2^width` past the last exact
//! term. The checked functions ([`checked_nth`], [`try_generate`]) reject any
//! request that would produce a wrapped `u64`. [`try_generate_wrapping`]
//! wraps like [`generate`] but reports a failed allocation instead of
//! aborting.

use num_traits::{Unsigned, WrappingAdd};

use crate::constants::{FIB_TABLE, MAX_EXACT_SEQUENCE_LEN, MAX_FIB_U64};
use crate::iterator::FibIterator;

/// Error type for Fibonacci queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested term does not fit in a u64.
    #[error("F({index}) overflows u64 (largest exact index is {max})")]
    Overflow { index: u64, max: u64 },

    /// Not enough memory to hold the requested number of terms.
    #[error("cannot allocate a sequence of {len} terms")]
    Allocation { len: usize },
}

/// First `n` Fibonacci numbers `[F(0), ..., F(n-1)]` as `u64`.
///
/// Terms past F(93) wrap.
///
/// # Example
/// ```
/// assert_eq!(fibcalc_core::generate(6), [0, 1, 1, 2, 3, 5]);
/// assert!(fibcalc_core::generate(0).is_empty());
/// ```
#[must_use]
pub fn generate(n: usize) -> Vec<u64> {
    generate_in(n)
}

/// First `n` Fibonacci numbers in the unsigned type `T`, wrapping on overflow.
#[must_use]
pub fn generate_in<T: Unsigned + WrappingAdd + Copy>(n: usize) -> Vec<T> {
    tracing::trace!(n, "generating sequence");
    let mut seq = Vec::with_capacity(n);
    seq.extend(FibIterator::<T>::new().take(n));
    seq
}

/// First `n` Fibonacci numbers as `u64`, wrapping past F(93), or
/// [`FibError::Allocation`] when the sequence cannot be allocated.
pub fn try_generate_wrapping(n: usize) -> Result<Vec<u64>, FibError> {
    let mut seq = Vec::new();
    seq.try_reserve_exact(n)
        .map_err(|_| FibError::Allocation { len: n })?;
    tracing::trace!(n, "generating sequence");
    seq.extend(FibIterator::<u64>::new().take(n));
    Ok(seq)
}

/// F(n) as `u64`, wrapping past F(93).
///
/// # Example
/// ```
/// assert_eq!(fibcalc_core::nth(10), 55);
/// ```
#[must_use]
pub fn nth(n: u64) -> u64 {
    nth_in(n)
}

/// F(n) in the unsigned type `T`, accumulated iteratively in constant space.
#[must_use]
pub fn nth_in<T: Unsigned + WrappingAdd + Copy>(n: u64) -> T {
    match n {
        0 => T::zero(),
        1 => T::one(),
        _ => {
            let mut a = T::zero();
            let mut b = T::one();
            for _ in 2..=n {
                let next = a.wrapping_add(&b);
                a = std::mem::replace(&mut b, next);
            }
            b
        }
    }
}

/// F(n), or [`FibError::Overflow`] when it does not fit in a u64.
#[allow(clippy::cast_possible_truncation)]
pub fn checked_nth(n: u64) -> Result<u64, FibError> {
    if n > MAX_FIB_U64 {
        return Err(FibError::Overflow {
            index: n,
            max: MAX_FIB_U64,
        });
    }
    Ok(FIB_TABLE[n as usize])
}

/// First `n` Fibonacci numbers, or [`FibError::Overflow`] naming the first
/// index that does not fit in a u64.
pub fn try_generate(n: usize) -> Result<Vec<u64>, FibError> {
    if n > MAX_EXACT_SEQUENCE_LEN {
        return Err(FibError::Overflow {
            index: MAX_FIB_U64 + 1,
            max: MAX_FIB_U64,
        });
    }
    Ok(FIB_TABLE[..n].to_vec())
}
