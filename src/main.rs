//! # Keyword Provenance CLI (`kwx`)
//!
//! Ranks the top keywords of one or more text documents and prints, for
//! each keyword, its occurrence count, the documents it appears in, and the
//! sentences that contain it.
//!
//! ## Usage
//!
//! ```bash
//! kwx [OPTIONS] <PATH>...
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Top 5 keywords of two files
//! kwx episode1.txt episode2.txt
//!
//! # Top 10 keywords of every .txt/.md file under a directory
//! kwx -n 10 ./transcripts
//!
//! # JSON output with JSON progress lines on stderr
//! kwx --format json --progress json ./transcripts
//!
//! # Select keywords from one corpus, report them over another
//! kwx ./season1 --against ./season2
//! ```

mod config;
mod documents;
mod keywords;
mod progress;
mod report;

use clap::{CommandFactory, Parser};
use keyword_provenance_core::rank::{validate_keyword_count, Aggregation, TieBreak};
use std::path::PathBuf;

use crate::config::Config;
use crate::progress::ProgressMode;
use crate::report::OutputFormat;

/// Keyword Provenance: rank salient keywords and trace the sentences they
/// came from.
///
/// Options given on the command line override the `--config` file.
#[derive(Parser)]
#[command(
    name = "kwx",
    about = "Rank the top keywords of a document set and show the sentences they came from",
    version
)]
struct Cli {
    /// Documents to analyze. Directories are walked recursively.
    #[arg(value_name = "PATH", required_unless_present = "completions")]
    paths: Vec<PathBuf>,

    /// Number of keywords to select (a positive integer, default 5).
    #[arg(
        short = 'n',
        long = "keywords",
        allow_negative_numbers = true,
        value_parser = parse_keyword_count
    )]
    keywords: Option<usize>,

    /// Path to configuration file (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Progress on stderr. Defaults to `human` when stderr is a terminal.
    #[arg(long, value_enum)]
    progress: Option<ProgressMode>,

    /// How per-sentence weights combine into a keyword score: `sum` or `max`.
    #[arg(long)]
    aggregation: Option<Aggregation>,

    /// Ordering among equal scores: `term` or `first_seen`.
    #[arg(long)]
    tie_break: Option<TieBreak>,

    /// Report the selected keywords over these documents instead.
    #[arg(long, value_name = "PATH", num_args = 1..)]
    against: Vec<PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, exclusive = true)]
    completions: Option<clap_complete::Shell>,
}

/// Parse `-n`, rejecting zero and negative counts as usage errors.
fn parse_keyword_count(s: &str) -> Result<usize, String> {
    let n: i64 = s
        .parse()
        .map_err(|_| format!("keyword count must be a positive integer, got '{}'", s))?;
    validate_keyword_count(n).map_err(|e| e.to_string())
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(n) = self.keywords {
            config.extraction.keywords = n as i64;
        }
        if let Some(aggregation) = self.aggregation {
            config.extraction.aggregation = aggregation;
        }
        if let Some(tie_break) = self.tie_break {
            config.extraction.tie_break = tie_break;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "kwx", &mut std::io::stdout());
        return Ok(());
    }

    let mut cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut cfg);

    let progress = cli.progress.unwrap_or_else(ProgressMode::default_for_tty);
    keywords::run_keywords(&cfg, &cli.paths, &cli.against, progress)
}
