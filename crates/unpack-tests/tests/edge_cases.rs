//! Edge case integration tests for the run decoder.
//!
//! Four categories of input sit right on the success/error boundary:
//!
//! - **Backslash runs**: escape pairs consume two backslashes at a time, so
//!   an even run decodes to half as many backslashes and an odd run always
//!   leaves one dangling.
//!
//! - **Digits**: a raw digit is a count only directly after a literal.
//!   At the start of input it is `LeadingDigit`; after a count digit it is
//!   `StackedDigits`. An escaped digit is a literal and may take a count.
//!
//! - **Zero counts**: a `0` count removes its literal from the output
//!   without error.
//!
//! - **Non-ASCII**: positions and counts are in code points, never bytes.

use unpack_core::{DecodeError, DecodeErrorKind, RunDecoder, decode, runs};
use unpack_tests::{Expected, SCENARIOS};

// ── Reference table ───────────────────────────────────────────────────────────

#[test]
fn every_scenario_matches_expectation() {
    for scenario in SCENARIOS {
        let result = decode(scenario.packed);
        match scenario.expected {
            Expected::Decoded(text) => assert_eq!(
                result.as_deref(),
                Ok(text),
                "scenario {} ({:?})",
                scenario.name,
                scenario.packed
            ),
            Expected::Rejected(kind) => assert_eq!(
                result.map_err(|e| e.kind()),
                Err(kind),
                "scenario {} ({:?})",
                scenario.name,
                scenario.packed
            ),
        }
    }
}

// ── Backslash runs ────────────────────────────────────────────────────────────

#[test]
fn backslash_runs_alternate_between_valid_and_dangling() {
    for n in 1..=12 {
        let packed = "\\".repeat(n);
        let result = decode(&packed);
        if n % 2 == 0 {
            assert_eq!(result.unwrap(), "\\".repeat(n / 2), "{n} backslashes");
        } else {
            assert_eq!(
                result,
                Err(DecodeError::TrailingBackslash { position: n - 1 }),
                "{n} backslashes"
            );
        }
    }
}

#[test]
fn escaped_backslash_then_digit_is_count() {
    assert_eq!(decode(r"\\3").unwrap(), r"\\\");
    assert_eq!(decode(r"\\\3").unwrap(), r"\3");
}

#[test]
fn dangling_backslash_after_count() {
    assert_eq!(
        decode(r"ab3\"),
        Err(DecodeError::TrailingBackslash { position: 3 })
    );
}

// ── Digits ────────────────────────────────────────────────────────────────────

#[test]
fn every_leading_digit_rejected() {
    for digit in '0'..='9' {
        let packed = format!("{digit}abc");
        assert_eq!(
            decode(&packed),
            Err(DecodeError::LeadingDigit { digit, position: 0 })
        );
    }
}

#[test]
fn escaped_digit_followed_by_raw_digit_is_count() {
    assert_eq!(decode(r"\09").unwrap(), "000000000");
    assert_eq!(decode(r"\9\9").unwrap(), "99");
}

#[test]
fn stacked_digits_report_second_digit() {
    assert_eq!(
        decode("ab23"),
        Err(DecodeError::StackedDigits {
            digit: '3',
            position: 3
        })
    );
    assert_eq!(
        decode(r"x\\12").map_err(|e| e.kind()),
        Err(DecodeErrorKind::StackedDigits)
    );
}

#[test]
fn first_error_wins() {
    // Stacked digits at position 2 come before the dangling backslash.
    assert_eq!(
        decode(r"a12\").map_err(|e| e.kind()),
        Err(DecodeErrorKind::StackedDigits)
    );
}

// ── Zero counts ───────────────────────────────────────────────────────────────

#[test]
fn zero_count_runs_are_still_runs() {
    let parsed = runs("a0").unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].count, 0);
    assert_eq!(decode("a0").unwrap(), "");
}

#[test]
fn zero_count_then_digit_is_stacked() {
    assert_eq!(
        decode("a00").map_err(|e| e.kind()),
        Err(DecodeErrorKind::StackedDigits)
    );
}

// ── Non-ASCII ─────────────────────────────────────────────────────────────────

#[test]
fn astral_code_points_are_atomic() {
    assert_eq!(decode("𝄞3").unwrap(), "𝄞𝄞𝄞");
    assert_eq!(
        decode("𝄞𝄞12"),
        Err(DecodeError::StackedDigits {
            digit: '2',
            position: 3
        })
    );
}

#[test]
fn combining_marks_are_separate_code_points() {
    // 'e' + U+0301: the count applies to the combining mark alone.
    assert_eq!(decode("e\u{301}2").unwrap(), "e\u{301}\u{301}");
}

#[test]
fn run_count_sum_equals_output_length() {
    let packed = r"a4bc2d5e\45\\3😂0";
    let parsed = RunDecoder::runs(packed).unwrap();
    let total: usize = parsed.iter().map(|r| r.expanded_len()).sum();
    assert_eq!(decode(packed).unwrap().chars().count(), total);
}
