use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use crate::error::DecodeError;
use crate::run::{DEFAULT_COUNT, Run};

/// The escape character. A backslash turns the code point after it into a
/// plain literal, whatever its usual meaning.
pub const ESCAPE: char = '\\';

/// Scanner position within the run grammar.
///
/// ```text
///                 ┌──── backslash + any ───┐
///                 │                        ▼
///   ┌─────────────────┐   other   ┌────────────────────────┐
///   │ AwaitingLiteral │ ────────▶ │ AwaitingCountOrNextRun │
///   └─────────────────┘           └────────────────────────┘
///      ▲    │    │                  │ digit: consume, emit
///      │    │    │ digit → Error    │ other / end: emit, no consume
///      │    │ end → Ok              │
///      └────┴───────────────────────┘
/// ```
///
/// The pending run travels with the state, so there are no side flags to
/// keep in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    AwaitingLiteral,
    AwaitingCountOrNextRun { pending: Run },
}

type CodePoints<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Single-pass decoder for the run-length packing grammar.
///
/// The grammar, informally:
///
/// ```text
///   packed  := run*
///   run     := literal count?
///   literal := '\' ANY | ANY - DIGIT - '\'
///   count   := DIGIT                      (0–9, default 1)
/// ```
///
/// Decoding is a pure function of its input: no state survives a call and
/// no partial output is returned on failure.
///
/// # Example
///
/// ```rust
/// use unpack_core::RunDecoder;
///
/// assert_eq!(RunDecoder::decode("a4bc2d5e").unwrap(), "aaaabccddddde");
/// assert_eq!(RunDecoder::decode(r"qwe\45").unwrap(), "qwe44444");
/// assert!(RunDecoder::decode("45").is_err());
/// ```
pub struct RunDecoder;

impl RunDecoder {
    /// Expand `input` into its unpacked form.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::LeadingDigit`] if the input starts with a raw digit.
    /// - [`DecodeError::TrailingBackslash`] if the input ends in a dangling
    ///   backslash (an odd-length trailing run of backslashes).
    /// - [`DecodeError::StackedDigits`] if two raw digits appear in a row.
    pub fn decode(input: &str) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(input.len());
        Self::scan(input, |run| run.expand_into(&mut out))?;
        Ok(out)
    }

    /// Parse `input` into its runs without expanding them.
    ///
    /// # Errors
    ///
    /// Same conditions as [`decode`](Self::decode).
    pub fn runs(input: &str) -> Result<Vec<Run>, DecodeError> {
        let mut runs = Vec::new();
        Self::scan(input, |run| runs.push(run))?;
        Ok(runs)
    }

    /// Drive the state machine over `input`, handing each completed run to
    /// `emit` in input order.
    fn scan(input: &str, mut emit: impl FnMut(Run)) -> Result<(), DecodeError> {
        let mut chars: CodePoints<'_> = input.chars().enumerate().peekable();
        let mut state = State::AwaitingLiteral;

        loop {
            state = match state {
                State::AwaitingLiteral => match Self::next_literal(&mut chars)? {
                    Some(pending) => State::AwaitingCountOrNextRun { pending },
                    None => return Ok(()),
                },
                State::AwaitingCountOrNextRun { pending } => {
                    let count = chars
                        .next_if(|&(_, c)| c.is_ascii_digit())
                        .map_or(DEFAULT_COUNT, |(_, digit)| digit_value(digit));
                    emit(Run { count, ..pending });
                    State::AwaitingLiteral
                }
            };
        }
    }

    /// Consume the literal that starts the next run, or `None` at end of
    /// input.
    fn next_literal(chars: &mut CodePoints<'_>) -> Result<Option<Run>, DecodeError> {
        let Some((position, c)) = chars.next() else {
            return Ok(None);
        };

        match c {
            ESCAPE => {
                let (_, literal) = chars
                    .next()
                    .ok_or(DecodeError::TrailingBackslash { position })?;
                Ok(Some(Run {
                    literal,
                    escaped: true,
                    count: DEFAULT_COUNT,
                    position,
                }))
            }
            // A run never starts with a raw digit. At position 0 there is
            // nothing to repeat; anywhere else a count digit was just read.
            digit if digit.is_ascii_digit() => Err(if position == 0 {
                DecodeError::LeadingDigit { digit, position }
            } else {
                DecodeError::StackedDigits { digit, position }
            }),
            literal => Ok(Some(Run {
                literal,
                escaped: false,
                count: DEFAULT_COUNT,
                position,
            })),
        }
    }
}

/// Numeric value of an ASCII digit.
#[allow(clippy::cast_possible_truncation)]
fn digit_value(digit: char) -> u8 {
    debug_assert!(digit.is_ascii_digit());
    (digit as u8) - b'0'
}

/// Expand `input`. Shorthand for [`RunDecoder::decode`].
///
/// # Errors
///
/// See [`RunDecoder::decode`].
pub fn decode(input: &str) -> Result<String, DecodeError> {
    RunDecoder::decode(input)
}

/// Parse `input` into runs. Shorthand for [`RunDecoder::runs`].
///
/// # Errors
///
/// See [`RunDecoder::decode`].
pub fn runs(input: &str) -> Result<Vec<Run>, DecodeError> {
    RunDecoder::runs(input)
}
