/// Input and output plumbing shared by every sub-command.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────┐
/// │ Argument         │ Source / sink                                │
/// ├──────────────────┼──────────────────────────────────────────────┤
/// │ FILE omitted, -  │ stdin                                        │
/// │ FILE             │ the file at that path                        │
/// │ -o omitted       │ stdout                                       │
/// │ -o PATH          │ PATH (created or truncated)                  │
/// └──────────────────┴──────────────────────────────────────────────┘
/// ```
use std::fs::{self, File};
use std::io::{self, BufWriter, Read as _, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, BufReader};

/// Whether `path` designates stdin.
fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p == Path::new("-"))
}

/// Human-readable name of the input, for diagnostics.
pub fn describe(path: Option<&Path>) -> String {
    match path {
        Some(p) if !is_stdin(path) => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Read the whole input as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not valid UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if !is_stdin(path) => {
            fs::read_to_string(p).with_context(|| format!("cannot read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read stdin")?;
            Ok(text)
        }
    }
}

/// Open the input for line-by-line async reading.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub async fn open_lines(path: Option<&Path>) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    match path {
        Some(p) if !is_stdin(path) => {
            let file = tokio::fs::File::open(p)
                .await
                .with_context(|| format!("cannot open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
    }
}

/// Open the output sink, buffered.
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file =
                File::create(p).with_context(|| format!("cannot write {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Drop one trailing `"\n"` or `"\r\n"`, as left by editors and `echo`.
pub fn strip_trailing_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert_eq!(describe(None), "stdin");
        assert_eq!(describe(Some(Path::new("-"))), "stdin");
        assert_eq!(describe(Some(Path::new("packed.txt"))), "packed.txt");
    }

    #[test]
    fn strips_only_one_newline() {
        assert_eq!(strip_trailing_newline("a4\n"), "a4");
        assert_eq!(strip_trailing_newline("a4\r\n"), "a4");
        assert_eq!(strip_trailing_newline("a4\n\n"), "a4\n");
        assert_eq!(strip_trailing_newline("a4"), "a4");
    }
}
