//! Fibonacci limits for `u64` values.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Longest sequence `[F(0), ..., F(n-1)]` whose terms all fit in a u64.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_EXACT_SEQUENCE_LEN: usize = MAX_FIB_U64 as usize + 1;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; MAX_EXACT_SEQUENCE_LEN] = {
    let mut table = [0u64; MAX_EXACT_SEQUENCE_LEN];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < MAX_EXACT_SEQUENCE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
