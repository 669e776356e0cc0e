//! The streaming line decoder must agree with the synchronous decoder on
//! every line, including which lines fail and why.

use tokio::io::BufReader;
use unpack_core::{ErrorPolicy, LineDecoder, StreamConfig, StreamError, decode};
use unpack_tests::SCENARIOS;

#[tokio::test]
async fn streaming_matches_sync_decoder() {
    // Scenarios containing a newline would split across lines.
    let inputs: Vec<&str> = SCENARIOS
        .iter()
        .map(|s| s.packed)
        .filter(|p| !p.contains('\n'))
        .collect();
    let joined = inputs.join("\n");

    let config = StreamConfig {
        on_error: ErrorPolicy::Skip,
        ..StreamConfig::default()
    };
    let mut lines = LineDecoder::with_config(BufReader::new(joined.as_bytes()), config);

    for (index, packed) in inputs.iter().enumerate() {
        let streamed = lines
            .next()
            .await
            .unwrap_or_else(|| panic!("stream ended before line {}", index + 1));

        match (streamed, decode(packed)) {
            (Ok(line), Ok(text)) => {
                assert_eq!(line.number, index + 1);
                assert_eq!(line.text, text, "line {packed:?}");
            }
            (Err(StreamError::Decode { line, source }), Err(expected)) => {
                assert_eq!(line, index + 1);
                assert_eq!(source, expected, "line {packed:?}");
            }
            (streamed, sync) => panic!("{packed:?}: stream {streamed:?} vs sync {sync:?}"),
        }
    }

    assert!(lines.next().await.is_none());
}
