/// Implementation of `unpack decode`.
///
/// # Modes
///
/// ```text
/// ┌──────────────────────────┬────────────────────────────────────────────┐
/// │ Flags                    │ Behaviour                                  │
/// ├──────────────────────────┼────────────────────────────────────────────┤
/// │ (none)                   │ Whole input is one packed string           │
/// │ --lines                  │ Each line decoded alone; stop at first bad │
/// │ --lines --skip-invalid   │ Each line decoded alone; warn and go on    │
/// └──────────────────────────┴────────────────────────────────────────────┘
/// ```
///
/// With `--skip-invalid`, malformed lines are logged at `warn` level and
/// left out of the output; the command still exits with code 1 if any line
/// failed.
use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};
use unpack_core::{ErrorPolicy, LineDecoder, RunDecoder, StreamConfig, StreamError};

use crate::DecodeArgs;
use crate::files;

/// Run the `unpack decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output cannot be
/// written, or the packed text is malformed.
pub fn run(args: &DecodeArgs) -> Result<()> {
    if args.lines {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()
            .context("cannot start async runtime")?;
        return runtime.block_on(run_lines(args));
    }

    let source = files::describe(args.file.as_deref());
    let text = files::read_input(args.file.as_deref())?;
    let packed = files::strip_trailing_newline(&text);
    debug!(%source, code_points = packed.chars().count(), "decoding whole input");

    let decoded =
        RunDecoder::decode(packed).with_context(|| format!("failed to decode {source}"))?;
    info!(code_points = decoded.chars().count(), "decoded");

    let mut out = files::open_output(args.output.as_deref())?;
    writeln!(out, "{decoded}").context("cannot write output")?;
    out.flush().context("cannot write output")?;
    Ok(())
}

/// Decode the input line by line through [`LineDecoder`].
async fn run_lines(args: &DecodeArgs) -> Result<()> {
    let source = files::describe(args.file.as_deref());
    let reader = files::open_lines(args.file.as_deref()).await?;
    let config = StreamConfig {
        on_error: if args.skip_invalid {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
        ..StreamConfig::default()
    };
    debug!(%source, ?config, "decoding line by line");

    let mut lines = LineDecoder::with_config(reader, config);
    let mut out = files::open_output(args.output.as_deref())?;
    let mut failed = 0usize;

    while let Some(result) = lines.next().await {
        match result {
            Ok(line) => writeln!(out, "{}", line.text).context("cannot write output")?,
            Err(StreamError::Decode { line, source: err }) if args.skip_invalid => {
                warn!(line, error = %err, "skipping malformed line");
                failed += 1;
            }
            Err(e) => {
                out.flush().context("cannot write output")?;
                return Err(e).with_context(|| format!("failed to decode {source}"));
            }
        }
    }
    out.flush().context("cannot write output")?;

    info!(lines = lines.lines_read(), failed, "decoded");
    if failed > 0 {
        bail!("{failed} of {} lines in {source} failed to decode", lines.lines_read());
    }
    Ok(())
}
