//! The three linear-scan matching strategies
//!
//! Each strategy scans the entire entry sequence unconditionally and
//! returns every entry whose text equals the query, in corpus order.
//! They differ only in the equality check run ahead of the authoritative
//! text comparison, which is what the bench target measures. The hash
//! pre-filters cannot drop a true match: equal inputs always hash equal,
//! and the text comparison stays in the predicate.

use crate::corpus::Corpus;
use crate::entry::{fast_hash, sha256_digest, Entry};

/// Digest match: recompute the query's SHA-256 once, then keep entries
/// whose stored 32-byte digest and text both match.
pub fn search_all_by_sha256<'a>(corpus: &'a Corpus, word: &str) -> Vec<&'a Entry> {
    let digest = sha256_digest(word);
    corpus
        .entries()
        .iter()
        .filter(|entry| entry.hash_sha256 == digest && entry.text == word)
        .collect()
}

/// Fast-hash match: u64 comparison ahead of the text comparison.
pub fn search_by_custom_hash<'a>(corpus: &'a Corpus, word: &str) -> Vec<&'a Entry> {
    let hash = fast_hash(word);
    corpus
        .entries()
        .iter()
        .filter(|entry| entry.custom_hash == hash && entry.text == word)
        .collect()
}

/// Text match: string comparison only, no pre-filter.
pub fn search_by_text<'a>(corpus: &'a Corpus, word: &str) -> Vec<&'a Entry> {
    corpus
        .entries()
        .iter()
        .filter(|entry| entry.text == word)
        .collect()
}
