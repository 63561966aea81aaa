//! wordscan CLI
//!
//! Loads a word list, builds the entry corpus once, then runs the three
//! scan strategies against a fixed query word and reports match counts
//! and elapsed time per strategy. The criterion bench target does the
//! statistical measurement; this binary is the direct, one-shot mode.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use wordscan::corpus::Corpus;
use wordscan::entry::{sha256_digest, Entry};
use wordscan::search::{search_all_by_sha256, search_by_custom_hash, search_by_text};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let corpus = Corpus::load(&cli.file)
        .with_context(|| format!("failed to load word list {}", cli.file.display()))?;
    info!("corpus ready: {} entries", corpus.len());

    let query = match &cli.query {
        Some(word) => word.as_str(),
        None => corpus.query_word(cli.offset)?,
    };
    info!("query word: {:?}", query);
    debug!("query sha256: {}", hex::encode(sha256_digest(query)));

    type Strategy = (&'static str, for<'a> fn(&'a Corpus, &str) -> Vec<&'a Entry>);
    let strategies: &[Strategy] = &[
        ("search_all_by_sha256", search_all_by_sha256),
        ("search_by_custom_hash", search_by_custom_hash),
        ("search_by_text", search_by_text),
    ];

    let passes = cli.passes.max(1);
    for &(name, strategy) in strategies {
        let mut matches = 0;
        let start = Instant::now();
        for _ in 0..passes {
            matches = strategy(&corpus, query).len();
        }
        let elapsed = start.elapsed();
        println!(
            "{name:>22}: {matches} match(es), {:?} mean over {passes} passes",
            elapsed / passes
        );
    }

    Ok(())
}
