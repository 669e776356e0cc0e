/// Implementation of `unpack inspect`.
///
/// Prints how the packed input splits into runs, without expanding it.
///
/// ```text
///   #  pos  literal  escaped  count
///   0    0  'a'      no           4
///   1    2  '5'      yes          2
///   2    5  'b'      no           1
///
/// 3 runs, 7 code points expanded
/// ```
///
/// With `--json` the same data is printed as a JSON document (see
/// [`InspectReport`]).
use anyhow::{Context, Result};
use serde::Serialize;
use unpack_core::{Run, RunDecoder};

use crate::InspectArgs;
use crate::files;

/// JSON shape printed by `unpack inspect --json`.
#[derive(Serialize)]
struct InspectReport<'a> {
    source: String,
    runs: &'a [Run],
    expanded_len: usize,
}

/// Run the `unpack inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is malformed.
pub fn run(args: &InspectArgs) -> Result<()> {
    let source = files::describe(args.file.as_deref());
    let text = files::read_input(args.file.as_deref())?;
    let packed = files::strip_trailing_newline(&text);

    let runs = RunDecoder::runs(packed).with_context(|| format!("failed to parse {source}"))?;
    let expanded_len: usize = runs.iter().map(Run::expanded_len).sum();

    if args.json {
        let report = InspectReport {
            source,
            runs: &runs,
            expanded_len,
        };
        let json = serde_json::to_string_pretty(&report).context("cannot serialize runs")?;
        println!("{json}");
    } else {
        print!("{}", render_table(&runs, expanded_len));
    }
    Ok(())
}

fn render_table(runs: &[Run], expanded_len: usize) -> String {
    use std::fmt::Write as _;

    let mut out = String::from("  #  pos  literal  escaped  count\n");
    for (i, run) in runs.iter().enumerate() {
        let literal = format!("{:?}", run.literal);
        let escaped = if run.escaped { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{i:>3}  {pos:>3}  {literal:<7}  {escaped:<7}  {count:>5}",
            pos = run.position,
            count = run.count,
        );
    }
    let _ = writeln!(
        out,
        "\n{} run{}, {expanded_len} code points expanded",
        runs.len(),
        if runs.len() == 1 { "" } else { "s" }
    );
    out
}
