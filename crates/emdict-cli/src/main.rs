/// emdict command-line tool: export, inspect, validate, pack, and search
/// compressed emoji dictionary files.
///
/// # Command overview
///
/// ```text
/// emdict <COMMAND> [OPTIONS]
///
/// Commands:
///   export     Decode a dictionary and write JSON, JSON Lines, or TSV
///   inspect    Print the container header and every record, streamed
///   validate   Check a dictionary for structural correctness
///   pack       Build a dictionary from a JSON manifest
///   search     Print records whose description or tags match a keyword
///   help       Print help information
///
/// Global options:
///   -v, --verbose        Log decode phases to stderr (RUST_LOG overrides)
///   --codec <CODEC>      Payload codec: zlib (default) | zstd
///   --strict             Reject bytes after the last record
///   --max-size <BYTES>   Ceiling on the declared uncompressed size
///   -h, --help           Print help
///   -V, --version        Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// All error details and logs are written to stderr so stdout can be
/// piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_export;
mod cmd_inspect;
mod cmd_pack;
mod cmd_search;
mod cmd_validate;
mod options;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The emdict command-line tool.
#[derive(Parser)]
#[command(name = "emdict", version, about = "Emoji dictionary decoder and exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decode phases at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Payload codec behind the size header: `zlib` or `zstd`.
    #[arg(long, global = true, default_value = "zlib")]
    codec: String,

    /// Fail when bytes remain after the last record.
    #[arg(long, global = true)]
    strict: bool,

    /// Refuse containers declaring more than this many uncompressed bytes.
    #[arg(long, global = true)]
    max_size: Option<usize>,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a dictionary and write it in an interchange format.
    Export(ExportArgs),
    /// Print the container header and each record as it is decoded.
    Inspect(InspectArgs),
    /// Check a dictionary for structural correctness.
    Validate(ValidateArgs),
    /// Build a dictionary from a JSON manifest.
    Pack(PackArgs),
    /// Print records whose description or tags contain a keyword.
    Search(SearchArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `emdict export`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────────┐
/// │ Flag          │ Values / default                                 │
/// ├───────────────┼──────────────────────────────────────────────────┤
/// │ --format      │ json (default) | jsonl | tsv                     │
/// │ --tags        │ include tags in every entry                      │
/// │ --compact     │ single-line JSON (json format only)              │
/// │ -o / --output │ write to file instead of stdout                  │
/// └───────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to the compressed dictionary.
    pub file: PathBuf,

    /// Output format: `json`, `jsonl`, or `tsv`.
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Include each record's tags.
    #[arg(long)]
    pub tags: bool,

    /// Write JSON on a single line.
    #[arg(long)]
    pub compact: bool,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `emdict inspect`.
///
/// Records are printed as they are decoded, so a corrupt file still
/// shows everything before the failure.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the compressed dictionary.
    pub file: PathBuf,

    /// Show only the record at this zero-based index.
    #[arg(long)]
    pub record: Option<u32>,

    /// Print each record's tags.
    #[arg(long)]
    pub show_tags: bool,
}

/// Arguments for `emdict validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the compressed dictionary.
    pub file: PathBuf,
}

/// Arguments for `emdict pack`.
///
/// The manifest is a JSON array in the same shape `export --tags` writes:
///
/// ```json
/// [
///   { "emoji": "😀", "category": 1, "name": "grinning face", "tags": ["smile"] },
///   { "emoji": "🔥", "category": 2, "name": "fire" }
/// ]
/// ```
#[derive(clap::Args)]
pub struct PackArgs {
    /// Path to the JSON manifest.
    pub input: PathBuf,

    /// Output dictionary path.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Compression level (codec default when omitted).
    #[arg(long)]
    pub level: Option<i32>,
}

/// Arguments for `emdict search`.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Path to the compressed dictionary.
    pub file: PathBuf,

    /// Case-insensitive keyword matched against descriptions and tags.
    pub query: String,

    /// Stop after this many matches.
    #[arg(long)]
    pub limit: Option<usize>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and
/// the default is `warn`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let decode = options::decode_options(&cli.codec, cli.strict, cli.max_size)?;

    match cli.command {
        Commands::Export(args) => cmd_export::run(&args, &decode),
        Commands::Inspect(args) => cmd_inspect::run(&args, &decode),
        Commands::Validate(args) => cmd_validate::run(&args, &decode),
        Commands::Pack(args) => cmd_pack::run(&args, decode.codec),
        Commands::Search(args) => cmd_search::run(&args, &decode),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
