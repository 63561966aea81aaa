//! wordscan: micro-benchmark comparing three linear word search strategies
//!
//! Builds an in-memory corpus of entries from a whitespace-delimited word
//! list, each entry carrying a SHA-256 digest, a fast non-cryptographic
//! hash, and the original text. Three strategies then locate all entries
//! matching a query word by scanning the full sequence:
//!
//! - `search_all_by_sha256` - 32-byte digest pre-filter ahead of the text compare
//! - `search_by_custom_hash` - u64 fast-hash pre-filter ahead of the text compare
//! - `search_by_text` - plain string comparison, no pre-filter
//!
//! The corpus is a flat ordered sequence with no auxiliary index, so all
//! three strategies are O(n) per call; the measurement of interest is the
//! constant-factor cost of each comparison scheme. Timings are taken by
//! the criterion bench target (`benches/search_strategies.rs`); the CLI
//! binary runs the same scans directly against a word file.

pub mod corpus;
pub mod entry;
pub mod error;
pub mod search;
