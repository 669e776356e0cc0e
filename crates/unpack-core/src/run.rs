use serde::Serialize;

/// Repeat count applied when no count digit follows a literal.
pub const DEFAULT_COUNT: u8 = 1;

/// One literal code point plus its effective repeat count — the atomic
/// unit the decoder emits.
///
/// ```text
///   input:  a 4 \ 5 2 b
///           └┬┘ └─┬─┘ │
///   runs:  (a×4)(5×2)(b×1)
///                 ▲
///                 escaped: the backslash turned '5' into a literal
/// ```
///
/// Every code point of the input belongs to exactly one run, as its
/// literal, its escaping backslash, or its count digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Run {
    /// The code point to repeat.
    pub literal: char,

    /// Whether the literal was produced by a backslash escape.
    pub escaped: bool,

    /// How many times `literal` appears in the output (`0..=9`).
    pub count: u8,

    /// Zero-based code-point index where the run starts in the input
    /// (the backslash for escaped runs).
    pub position: usize,
}

impl Run {
    /// Number of code points this run contributes to the output.
    #[must_use]
    pub fn expanded_len(&self) -> usize {
        usize::from(self.count)
    }

    /// Append `literal` repeated `count` times to `out`.
    pub fn expand_into(&self, out: &mut String) {
        out.extend(std::iter::repeat_n(self.literal, self.expanded_len()));
    }
}
