/// `unpack` command-line tool — decode, encode, validate, and inspect
/// run-length packed text.
///
/// # Command overview
///
/// ```text
/// unpack <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Expand packed text (whole input, or line by line)
///   encode     Pack text by collapsing runs of repeated characters
///   validate   Check packed text for malformations
///   inspect    Print the run breakdown of packed text
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Every command reads from FILE, or from stdin when FILE is omitted or
/// `-`.
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, malformed input, etc.)   |
///
/// Diagnostics and logs go to stderr so stdout can be piped cleanly.
/// `RUST_LOG` overrides the log level chosen by `--verbose`.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;
mod files;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode and encode run-length packed text.
#[derive(Parser)]
#[command(name = "unpack", version, about = "Run-length unpacking codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Expand packed text.
    Decode(DecodeArgs),
    /// Pack text by collapsing runs of repeated characters.
    Encode(EncodeArgs),
    /// Check packed text for malformations.
    Validate(ValidateArgs),
    /// Print the run breakdown of packed text.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `unpack decode`.
///
/// ```text
/// ┌────────────────┬──────────────────────────────────────────────────────┐
/// │ Flag           │ Effect                                               │
/// ├────────────────┼──────────────────────────────────────────────────────┤
/// │ --lines        │ Decode every line independently                      │
/// │ --skip-invalid │ With --lines: warn on bad lines and keep going       │
/// │ -o / --output  │ Write to file instead of stdout                      │
/// └────────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// Without `--lines` the whole input is one packed string; a single
/// trailing newline is dropped first.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Input file (stdin when omitted or `-`).
    pub file: Option<PathBuf>,

    /// Decode every line as an independent packed string.
    #[arg(long)]
    pub lines: bool,

    /// Report malformed lines and continue (requires `--lines`).
    #[arg(long, requires = "lines")]
    pub skip_invalid: bool,

    /// Write decoded output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `unpack encode`.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Input file (stdin when omitted or `-`).
    pub file: Option<PathBuf>,

    /// Largest count written for one run (2–9); longer runs are split.
    #[arg(long, default_value_t = 9)]
    pub max_count: u8,

    /// Escape every literal, not only digits and backslashes.
    #[arg(long)]
    pub escape_all: bool,

    /// Write packed output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `unpack validate`.
///
/// Decodes the input and reports success checkmarks or a diagnostic. Exits
/// with code 1 on malformed input.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input file (stdin when omitted or `-`).
    pub file: Option<PathBuf>,
}

/// Arguments for `unpack inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Input file (stdin when omitted or `-`).
    pub file: Option<PathBuf>,

    /// Print the runs as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr fmt subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
