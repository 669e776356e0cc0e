/// Implementation of `unpack validate`.
///
/// Parses the input into runs and reports either success checkmarks or a
/// diagnostic pointing at the offending code point.
///
/// # Success output
///
/// ```text
/// ✓ Runs: 5 runs parsed successfully
/// ✓ Expanded: 13 code points
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: digit '5' at position 2 follows a count digit
///   a45
///     ^
/// ```
///
/// The caret line is only printed for single-line input, where it lines
/// up with what the terminal shows.
use anyhow::{Result, anyhow};
use unpack_core::{DecodeError, RunDecoder};

use crate::ValidateArgs;
use crate::files;

/// Run the `unpack validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is malformed.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let text = files::read_input(args.file.as_deref())?;
    let packed = files::strip_trailing_newline(&text);

    match RunDecoder::runs(packed) {
        Ok(runs) => {
            let expanded: usize = runs.iter().map(unpack_core::Run::expanded_len).sum();
            println!(
                "✓ Runs: {} run{} parsed successfully",
                runs.len(),
                if runs.len() == 1 { "" } else { "s" }
            );
            println!("✓ Expanded: {expanded} code points");
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {e}");
            if let Some(pointer) = caret_diagnostic(packed, &e) {
                println!("{pointer}");
            }
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Render the input with a caret under the offending code point, or `None`
/// for multi-line input.
fn caret_diagnostic(packed: &str, err: &DecodeError) -> Option<String> {
    if packed.contains('\n') {
        return None;
    }
    let pad = " ".repeat(err.position());
    Some(format!("  {packed}\n  {pad}^"))
}
