//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_traits::{Unsigned, WrappingAdd};

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields F(0), F(1), F(2), ... forever. Terms wrap modulo `2^width` of `T`
/// once they no longer fit.
///
/// # Example
/// ```
/// use fibcalc_core::iterator::FibIterator;
/// let fibs: Vec<u64> = FibIterator::new().take(7).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator<T = u64> {
    a: T,
    b: T,
}

impl<T: Unsigned + WrappingAdd + Copy> FibIterator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: T::zero(),
            b: T::one(),
        }
    }

    /// Start iteration at F(n).
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let mut iter = Self::new();
        for _ in 0..n {
            iter.advance();
        }
        iter
    }

    fn advance(&mut self) {
        let next = self.a.wrapping_add(&self.b);
        self.a = std::mem::replace(&mut self.b, next);
    }
}

impl<T: Unsigned + WrappingAdd + Copy> Default for FibIterator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Unsigned + WrappingAdd + Copy> Iterator for FibIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let val = self.a;
        self.advance();
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Unsigned + WrappingAdd + Copy> std::iter::FusedIterator for FibIterator<T> {}
