#![no_main]

use libfuzzer_sys::fuzz_target;

use fibcalc_core::{checked_nth, generate, nth};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at 4096 for speed
    let n = usize::from(u16::from_le_bytes([data[0], data[1]])) % 4096;

    let seq = generate(n + 1);
    assert_eq!(seq.len(), n + 1);
    assert_eq!(seq[n], nth(n as u64));
    if let Ok(exact) = checked_nth(n as u64) {
        assert_eq!(exact, seq[n]);
    }
});
