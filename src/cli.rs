//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// wordscan CLI
#[derive(Parser, Debug)]
#[command(name = "wordscan")]
#[command(about = "Times three linear-scan word search strategies over a word list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the whitespace-delimited word list
    #[arg(short = 'f', long, default_value = "words.txt")]
    pub file: PathBuf,

    /// Corpus offset the query word is taken from
    #[arg(short = 'o', long, default_value_t = 100_000)]
    pub offset: usize,

    /// Explicit query word (skips the offset lookup)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Number of timed passes per strategy
    #[arg(short = 'n', long, default_value_t = 10)]
    pub passes: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long)]
    pub quiet: bool,
}
