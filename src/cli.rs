//! Command-line front end: argument parsing, option resolution, and the
//! search-and-print loop.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use deepfind_core::config::{Config, SearchMode};
use deepfind_core::{document, find_all, find_first, Key, Node};

#[derive(Debug, Parser)]
#[command(name = "deepfind", about = "Find values by key anywhere in a JSON document")]
pub struct Cli {
    /// Key to look for. Prefix with `:` for a symbolic key; `\:` for a literal
    /// leading colon.
    pub key: String,

    /// Input file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Print every match as a JSON array instead of only the first.
    #[arg(short, long)]
    pub all: bool,

    /// Compare keys indifferently: `:name` and `name` match each other.
    #[arg(short, long)]
    pub indifferent: bool,

    /// Turn the document's keys into symbolic keys before searching.
    #[arg(long)]
    pub symbolize_keys: bool,

    /// Treat input as JSON Lines and search each line separately.
    #[arg(short, long)]
    pub lines: bool,

    /// Single-line JSON output.
    #[arg(long)]
    pub compact: bool,

    /// Config file to use instead of `~/.config/deepfind/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write debug logs to /tmp/deepfind-debug.log.
    #[arg(long)]
    pub debug: bool,
}

/// Fully resolved search options: command-line flags layered over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub key: Key,
    pub mode: SearchMode,
    pub indifferent: bool,
    pub symbolize_keys: bool,
    pub lines: bool,
    pub pretty: bool,
}

impl Options {
    /// Flags only ever switch behaviour on; anything left unset falls back to
    /// the config.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            key: Key::parse(&cli.key),
            mode: if cli.all { SearchMode::All } else { config.search.mode },
            indifferent: cli.indifferent || config.search.indifferent,
            symbolize_keys: cli.symbolize_keys || config.search.symbolize_keys,
            lines: cli.lines,
            // One output line per input line in JSON Lines mode.
            pretty: config.output.pretty && !cli.compact && !cli.lines,
        }
    }
}

/// Whether anything was printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Absent,
}

/// Load config, read input, search, print to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable config");
            Config::defaults()
        }),
    };
    let opts = Options::resolve(cli, &config);
    tracing::info!(?opts, "starting search");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            search_input(&opts, file, &mut out)
        }
        _ => search_input(&opts, std::io::stdin().lock(), &mut out),
    }
}

/// Search every document read from `input`, writing one JSON result per
/// document with a match. Documents with no match print nothing.
pub fn search_input<R: Read, W: Write>(
    opts: &Options,
    input: R,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let docs = document::read_documents(input, opts.lines)?;
    let mut outcome = Outcome::Absent;

    for doc in docs {
        let doc = prepare(doc, opts);
        match opts.mode {
            SearchMode::First => {
                if let Some(value) = find_first(&doc, &opts.key) {
                    write_json(out, value, opts.pretty)?;
                    outcome = Outcome::Found;
                }
            }
            SearchMode::All => {
                if let Some(values) = find_all(&doc, &opts.key) {
                    write_json(out, &values, opts.pretty)?;
                    outcome = Outcome::Found;
                }
            }
        }
    }

    tracing::debug!(?outcome, "search finished");
    Ok(outcome)
}

fn prepare(doc: Node, opts: &Options) -> Node {
    let doc = if opts.symbolize_keys { doc.symbolize_keys() } else { doc };
    if opts.indifferent {
        doc.with_indifferent_access()
    } else {
        doc
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
