//! Corpus entry record and the two hash functions applied to every word

use std::hash::{Hash, Hasher};

use sha2::{Digest, Sha256};

/// One record per corpus word: the word itself plus its precomputed hashes.
///
/// Immutable once built; the scan strategies only ever read these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// SHA-256 digest of the word's UTF-8 bytes
    pub hash_sha256: [u8; 32],
    /// Fast non-cryptographic hash of the word.
    /// Consistent between build time and query time within a run;
    /// not stable across process runs.
    pub custom_hash: u64,
    /// The original word, exact bytes preserved
    pub text: String,
    /// 0-based position of the word in the source corpus
    pub index: u64,
}

impl Entry {
    /// Build the entry for one corpus word, computing both hashes.
    pub fn new(text: &str, index: u64) -> Self {
        Self {
            hash_sha256: sha256_digest(text),
            custom_hash: fast_hash(text),
            text: text.to_string(),
            index,
        }
    }

    /// Digest as a lowercase hex string, for logging
    pub fn digest_hex(&self) -> String {
        hex::encode(self.hash_sha256)
    }
}

/// SHA-256 digest of a word's UTF-8 bytes
pub fn sha256_digest(text: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.finalize().into()
}

/// Fast string hash used as a scan pre-filter
pub fn fast_hash(text: &str) -> u64 {
    let mut hasher = fxhash::FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
