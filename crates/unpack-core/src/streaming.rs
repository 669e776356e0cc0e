use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::{ErrorPolicy, StreamConfig};
use crate::decoder::RunDecoder;
use crate::error::StreamError;

/// One successfully decoded line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLine {
    /// 1-based line number in the source.
    pub number: usize,

    /// The unpacked text, without its line terminator.
    pub text: String,
}

/// Asynchronous line-at-a-time decoder.
///
/// Each line of the reader is an independent packed string. The decoder
/// reads one line per call to [`next`](Self::next), so memory use is
/// bounded by the longest line and backpressure follows the caller.
///
/// ```text
///   reader ──read_line──▶ strip "\n" ──RunDecoder::decode──▶ DecodedLine
///                                              │
///                                              └─ Err ──▶ StreamError::Decode { line, .. }
/// ```
///
/// After a decode failure the stream ends under [`ErrorPolicy::Abort`] and
/// continues with the next line under [`ErrorPolicy::Skip`]. I/O errors
/// (including invalid UTF-8) always end the stream.
///
/// # Example
///
/// ```rust,no_run
/// use unpack_core::LineDecoder;
/// use tokio::io::AsyncBufRead;
///
/// async fn unpack_lines(reader: impl AsyncBufRead + Unpin) {
///     let mut lines = LineDecoder::new(reader);
///     while let Some(line) = lines.next().await.transpose().unwrap() {
///         println!("{}", line.text);
///     }
/// }
/// ```
pub struct LineDecoder<R> {
    reader: R,
    config: StreamConfig,
    state: StreamState,
    line_number: usize,
    /// Reused across lines to avoid an allocation per read.
    buf: String,
}

/// `Reading → Done`. `Done` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    Reading,
    Done,
}

impl<R: AsyncBufRead + Unpin> LineDecoder<R> {
    /// Create a line decoder with the default [`StreamConfig`].
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, StreamConfig::default())
    }

    #[must_use]
    pub fn with_config(reader: R, config: StreamConfig) -> Self {
        Self {
            reader,
            config,
            state: StreamState::Reading,
            line_number: 0,
            buf: String::with_capacity(256),
        }
    }

    /// Number of lines read so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Decode the next line.
    ///
    /// Returns `Some(Ok(line))` for each decoded line, `Some(Err(_))` for a
    /// malformed line or I/O failure, and `None` once the stream is
    /// exhausted or has been aborted.
    pub async fn next(&mut self) -> Option<Result<DecodedLine, StreamError>> {
        if self.state == StreamState::Done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf).await {
            Ok(0) => {
                self.state = StreamState::Done;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                Some(self.decode_current())
            }
            Err(e) => {
                self.state = StreamState::Done;
                Some(Err(StreamError::Io(e)))
            }
        }
    }

    fn decode_current(&mut self) -> Result<DecodedLine, StreamError> {
        let packed = if self.config.strip_line_endings {
            strip_line_ending(&self.buf)
        } else {
            self.buf.as_str()
        };

        match RunDecoder::decode(packed) {
            Ok(text) => Ok(DecodedLine {
                number: self.line_number,
                text,
            }),
            Err(source) => {
                if self.config.on_error == ErrorPolicy::Abort {
                    self.state = StreamState::Done;
                }
                Err(StreamError::Decode {
                    line: self.line_number,
                    source,
                })
            }
        }
    }
}

/// Remove one trailing `"\n"` or `"\r\n"`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
