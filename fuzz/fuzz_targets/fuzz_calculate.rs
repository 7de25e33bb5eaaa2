#![no_main]

use libfuzzer_sys::fuzz_target;

use fibcalc_arith::calculate;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    // Reading from a slice and writing to a Vec cannot fail
    let computation = calculate(data, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    let tail = match computation {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    };
    assert!(out.starts_with("Type your equation\n"));
    assert!(out.ends_with(&tail));
});
