#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_core::sequence::{sequence_string, Width};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at 2000 for speed
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;

    let reference = sequence_string(Width::Big, n).expect("big width never overflows");
    for width in Width::ALL {
        match sequence_string(width, n) {
            Ok(s) => assert_eq!(s, reference, "{width} disagrees at n={n}"),
            Err(_) => assert!(width.check_length(n).is_err()),
        }
    }
});
