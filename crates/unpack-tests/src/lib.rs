//! Shared fixtures for the integration tests and benchmarks.
//!
//! [`SCENARIOS`] is the reference table of packed inputs and their expected
//! outcome. The edge-case suite checks every row and the benchmarks reuse
//! the valid rows as small workloads.

use unpack_core::DecodeErrorKind;

/// Expected result of decoding a scenario's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    Decoded(&'static str),
    Rejected(DecodeErrorKind),
}

/// A named packed input with its expected outcome.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub packed: &'static str,
    pub expected: Expected,
}

const fn ok(name: &'static str, packed: &'static str, decoded: &'static str) -> Scenario {
    Scenario {
        name,
        packed,
        expected: Expected::Decoded(decoded),
    }
}

const fn err(name: &'static str, packed: &'static str, kind: DecodeErrorKind) -> Scenario {
    Scenario {
        name,
        packed,
        expected: Expected::Rejected(kind),
    }
}

pub const SCENARIOS: &[Scenario] = &[
    ok("counts", "a4bc2d5e", "aaaabccddddde"),
    ok("no_counts", "abcd", "abcd"),
    err("leading_digit", "45", DecodeErrorKind::LeadingDigit),
    ok("empty", "", ""),
    ok("multibyte", "😂⌘👍4", "😂⌘👍👍👍👍"),
    ok("escaped_digits", r"qwe\4\5", "qwe45"),
    ok("escaped_digit_with_count", r"qwe\45", "qwe44444"),
    ok("escaped_backslash_with_count", r"qwe\\5", r"qwe\\\\\"),
    err("count_then_dangling", r"qwe\\5\", DecodeErrorKind::TrailingBackslash),
    err("lone_backslash", r"\", DecodeErrorKind::TrailingBackslash),
    ok("two_backslashes", r"\\", r"\"),
    err("three_backslashes", r"\\\", DecodeErrorKind::TrailingBackslash),
    ok("escaped_multibyte", r"\😂⌘\👍4", "😂⌘👍👍👍👍"),
    err("leading_zero", "0ghjc", DecodeErrorKind::LeadingDigit),
    ok("four_backslashes", r"\\\\", r"\\"),
    err("five_backslashes", r"\\\\\", DecodeErrorKind::TrailingBackslash),
    err("literal_then_dangling", r"hjfh\", DecodeErrorKind::TrailingBackslash),
    err("stacked_digits", "a45", DecodeErrorKind::StackedDigits),
    err("escaped_digit_then_two_digits", r"\456", DecodeErrorKind::StackedDigits),
    ok("zero_count", "a0b", "b"),
    ok("all_zero", r"x0\\0", ""),
    ok("newline_literal", "a\n3", "a\n\n\n"),
];

/// The scenarios expected to decode successfully.
pub fn valid_scenarios() -> impl Iterator<Item = &'static Scenario> {
    SCENARIOS
        .iter()
        .filter(|s| matches!(s.expected, Expected::Decoded(_)))
}
