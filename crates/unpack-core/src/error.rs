/// Errors that can occur while decoding a packed string.
///
/// Every variant is detected synchronously during the single left-to-right
/// scan and aborts the whole decode: no partial output is ever returned.
/// The `position` field is the zero-based index of the offending code
/// point (not byte), so diagnostics line up with what a user sees.
///
/// ```text
///   DecodeError
///   ├── LeadingDigit       ← input starts with a raw digit, no literal to repeat
///   ├── TrailingBackslash  ← backslash is the last code point, nothing to escape
///   └── StackedDigits      ← raw digit directly after a count digit
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The very first code point is an unescaped decimal digit.
    ///
    /// A count digit always repeats the literal before it; at the start of
    /// the input there is no literal yet.
    #[error("leading digit {digit:?} at position {position} has no literal to repeat")]
    LeadingDigit { digit: char, position: usize },

    /// A backslash was the final code point of the input.
    ///
    /// Escape pairs consume two code points at a time, so an odd number of
    /// trailing backslashes always leaves one with nothing to escape.
    #[error("dangling backslash at position {position}: nothing left to escape")]
    TrailingBackslash { position: usize },

    /// A raw digit appeared where a run must start, directly after a count
    /// digit. Counts are a single digit and never stack.
    #[error("digit {digit:?} at position {position} follows a count digit")]
    StackedDigits { digit: char, position: usize },
}

/// Position-independent classification of a [`DecodeError`].
///
/// Useful when callers (and tests) care about *what* went wrong but not
/// *where*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    LeadingDigit,
    TrailingBackslash,
    StackedDigits,
}

impl DecodeError {
    /// The class of malformation, without positional detail.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::LeadingDigit { .. } => DecodeErrorKind::LeadingDigit,
            Self::TrailingBackslash { .. } => DecodeErrorKind::TrailingBackslash,
            Self::StackedDigits { .. } => DecodeErrorKind::StackedDigits,
        }
    }

    /// Zero-based code-point index of the offending character.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::LeadingDigit { position, .. }
            | Self::TrailingBackslash { position }
            | Self::StackedDigits { position, .. } => *position,
        }
    }
}

/// Errors raised when building a [`RunEncoder`](crate::RunEncoder).
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A count is a single digit, and a count of 1 is implicit, so the
    /// largest chunk must lie in `2..=9`.
    #[error("max count {max_count} out of range, expected 2..=9")]
    InvalidMaxCount { max_count: u8 },
}

/// Errors yielded by the streaming [`LineDecoder`](crate::LineDecoder).
///
/// ```text
///   StreamError
///   ├── Decode { line, source }  ← a line failed to decode (line is 1-based)
///   └── Io(std::io::Error)       ← from the underlying async reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
