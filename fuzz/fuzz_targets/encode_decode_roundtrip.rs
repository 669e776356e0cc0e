#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unpack_core::{EncoderConfig, RunEncoder};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    max_count: u8,
    escape_all: bool,
}

// Fuzz target: encode->decode roundtrip.
//
// Any text packed by RunEncoder, with any valid max count, must decode
// back to itself.
fuzz_target!(|input: Input| {
    let config = EncoderConfig {
        max_count: 2 + input.max_count % 8,
        escape_all: input.escape_all,
    };
    let encoder = RunEncoder::with_config(config).unwrap();

    let packed = encoder.encode(&input.text);
    let decoded = unpack_core::decode(&packed).unwrap();
    assert_eq!(decoded, input.text);
});
