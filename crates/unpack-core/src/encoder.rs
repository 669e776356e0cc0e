use crate::config::{EncoderConfig, MAX_COUNT};
use crate::decoder::ESCAPE;
use crate::error::EncodeError;

/// Packs text by collapsing runs of identical code points into
/// `literal[count]` form — the inverse of [`RunDecoder`](crate::RunDecoder).
///
/// ```text
///   "aaaabccddddde"  ──encode──▶  "a4bc2d5e"
///   "qwe44444"       ──encode──▶  "qwe\45"
///   "\\\\\"          ──encode──▶  "\\5"
/// ```
///
/// Digits and backslashes are always escaped, so the packed form is never
/// ambiguous and `decode(encode(s)) == s` holds for every string. Runs
/// longer than [`EncoderConfig::max_count`] are split into consecutive
/// chunks; a chunk of one is written without a count digit.
///
/// # Example
///
/// ```rust
/// use unpack_core::{RunDecoder, RunEncoder};
///
/// let packed = RunEncoder::new().encode("aaaabccddddde");
/// assert_eq!(packed, "a4bc2d5e");
/// assert_eq!(RunDecoder::decode(&packed).unwrap(), "aaaabccddddde");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RunEncoder {
    config: EncoderConfig,
}

impl RunEncoder {
    /// Create an encoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidMaxCount`] if `config.max_count` is
    /// outside `2..=9`.
    pub fn with_config(config: EncoderConfig) -> Result<Self, EncodeError> {
        if !(2..=MAX_COUNT).contains(&config.max_count) {
            return Err(EncodeError::InvalidMaxCount {
                max_count: config.max_count,
            });
        }
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Pack `input`.
    #[must_use]
    pub fn encode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(literal) = chars.next() {
            let mut remaining = 1usize;
            while chars.next_if_eq(&literal).is_some() {
                remaining += 1;
            }

            while remaining > 0 {
                let chunk = u8::try_from(remaining)
                    .map_or(self.config.max_count, |r| r.min(self.config.max_count));
                self.push_literal(&mut out, literal);
                if chunk > 1 {
                    out.push(char::from(b'0' + chunk));
                }
                remaining -= usize::from(chunk);
            }
        }

        out
    }

    fn push_literal(&self, out: &mut String, literal: char) {
        if self.config.escape_all || literal == ESCAPE || literal.is_ascii_digit() {
            out.push(ESCAPE);
        }
        out.push(literal);
    }
}

/// Pack `input` with the default configuration.
#[must_use]
pub fn encode(input: &str) -> String {
    RunEncoder::new().encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn collapses_runs() {
        assert_eq!(encode("aaaabccddddde"), "a4bc2d5e");
        assert_eq!(encode("abcd"), "abcd");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn escapes_digits_and_backslashes() {
        assert_eq!(encode("qwe45"), r"qwe\4\5");
        assert_eq!(encode("qwe44444"), r"qwe\45");
        assert_eq!(encode(r"qwe\\\\\"), r"qwe\\5");
    }

    #[test]
    fn splits_runs_longer_than_nine() {
        let input = "z".repeat(20);
        let packed = encode(&input);
        assert_eq!(packed, "z9z9z2");
        assert_eq!(decode(&packed).unwrap(), input);
    }

    #[test]
    fn custom_max_count_splits_earlier() {
        let encoder = RunEncoder::with_config(EncoderConfig {
            max_count: 3,
            escape_all: false,
        })
        .unwrap();
        assert_eq!(encoder.encode("aaaaaaa"), "a3a3a");
    }

    #[test]
    fn escape_all_prefixes_every_literal() {
        let encoder = RunEncoder::with_config(EncoderConfig {
            escape_all: true,
            ..EncoderConfig::default()
        })
        .unwrap();
        let packed = encoder.encode("abb");
        assert_eq!(packed, r"\a\b2");
        assert_eq!(decode(&packed).unwrap(), "abb");
    }

    #[test]
    fn rejects_out_of_range_max_count() {
        for max_count in [0, 1, 10] {
            let result = RunEncoder::with_config(EncoderConfig {
                max_count,
                escape_all: false,
            });
            assert!(
                matches!(result, Err(EncodeError::InvalidMaxCount { max_count: m }) if m == max_count),
                "max_count {max_count} should be rejected"
            );
        }
    }

    #[test]
    fn multibyte_runs_count_code_points() {
        assert_eq!(encode("😂⌘👍👍👍👍"), "😂⌘👍4");
    }
}
