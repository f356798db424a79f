//! Content digests and the per-run set of digests already saved.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Digests of images saved during the current run
#[derive(Debug, Clone, Default)]
pub struct KnownHashes {
    digests: HashSet<String>,
}

impl KnownHashes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.digests.contains(digest)
    }

    /// Record a digest. Returns false if it was already present.
    pub fn insert(&mut self, digest: impl Into<String>) -> bool {
        self.digests.insert(digest.into())
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

/// Incremental SHA-256 over a streamed body
#[derive(Debug, Default)]
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
    }

    /// Finish and return the digest as lowercase hex
    pub fn finalize_hex(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// SHA-256 of a byte slice as lowercase hex
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = ContentHasher::new();
    hasher.update(bytes);
    hasher.finalize_hex()
}
