/// Largest count a single digit can express.
pub const MAX_COUNT: u8 = 9;

/// Configuration for [`RunEncoder`](crate::RunEncoder).
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                              │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ max_count  │ Longest chunk written for one run (2..=9, default 9) │
/// │ escape_all │ Escape every literal, not only digits and backslashes│
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// Runs longer than `max_count` are split into consecutive chunks, so
/// `max_count = 3` packs `aaaaaaa` as `a3a3a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Largest count emitted for a single chunk.
    pub max_count: u8,

    /// Prefix every literal with a backslash.
    pub escape_all: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_count: MAX_COUNT,
            escape_all: false,
        }
    }
}

/// What the streaming decoder does after a line fails to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Yield the error, then end the stream.
    #[default]
    Abort,

    /// Yield the error and keep decoding the following lines.
    Skip,
}

/// Configuration for [`LineDecoder`](crate::LineDecoder).
///
/// ```text
/// ┌────────────────────┬──────────────────────────────────────────────┐
/// │ Field              │ Purpose                                      │
/// ├────────────────────┼──────────────────────────────────────────────┤
/// │ on_error           │ Abort (default) or Skip past malformed lines │
/// │ strip_line_endings │ Drop trailing "\n" / "\r\n" before decoding  │
/// └────────────────────┴──────────────────────────────────────────────┘
/// ```
///
/// With `strip_line_endings` off, the line terminator is part of the
/// packed text and is reproduced in the output (a `\n` is an ordinary
/// literal to the decoder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    pub on_error: ErrorPolicy,
    pub strip_line_endings: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            strip_line_endings: true,
        }
    }
}
