#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: RunDecoder over arbitrary text.
//
// Catches bugs in:
// - Backslash runs of any parity
// - Digits at the start, after counts, after escapes
// - Multi-byte and astral code points
// - Disagreement between `runs` and `decode`
fuzz_target!(|bytes: &[u8]| {
    let Ok(data) = std::str::from_utf8(bytes) else {
        return;
    };

    let decoded = unpack_core::decode(data);
    let runs = unpack_core::runs(data);

    match (decoded, runs) {
        (Ok(text), Ok(runs)) => {
            let total: usize = runs.iter().map(unpack_core::Run::expanded_len).sum();
            assert_eq!(text.chars().count(), total);
        }
        (Err(a), Err(b)) => {
            assert_eq!(a, b);
            assert!(a.position() < data.chars().count());
        }
        (a, b) => panic!("decode {a:?} disagrees with runs {b:?}"),
    }
});
