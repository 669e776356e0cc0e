/// Implementation of `unpack encode`.
///
/// Packs the input with [`RunEncoder`]. Like `decode`, one trailing newline
/// is dropped before encoding and one is appended to the output, so
/// `unpack encode | unpack decode` reproduces the input.
use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;
use unpack_core::{EncoderConfig, RunEncoder};

use crate::EncodeArgs;
use crate::files;

/// Run the `unpack encode` command.
///
/// # Errors
///
/// Returns an error if `--max-count` is out of range, the input cannot be
/// read, or the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let encoder = RunEncoder::with_config(EncoderConfig {
        max_count: args.max_count,
        escape_all: args.escape_all,
    })
    .context("invalid encoder options")?;

    let source = files::describe(args.file.as_deref());
    let text = files::read_input(args.file.as_deref())?;
    let plain = files::strip_trailing_newline(&text);

    let packed = encoder.encode(plain);
    debug!(
        %source,
        config = ?encoder.config(),
        input_code_points = plain.chars().count(),
        packed_code_points = packed.chars().count(),
        "encoded"
    );

    let mut out = files::open_output(args.output.as_deref())?;
    writeln!(out, "{packed}").context("cannot write output")?;
    out.flush().context("cannot write output")?;
    Ok(())
}
