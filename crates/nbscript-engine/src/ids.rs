//! Content-derived cell identifiers.
//!
//! Cells materialized from a script have no identity of their own, so their ids
//! are computed from their final source: a truncated SHA-256 digest plus an
//! occurrence counter that keeps repeated content apart. The counter table lives
//! for exactly one parse; nothing here is global.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Number of digest bytes kept in an id (rendered as twice as many hex chars)
const HASH_BYTES: usize = 8;

/// Per-parse mapping from content hash to how many times it has been seen.
#[derive(Debug, Default)]
pub struct IdTable {
    occurrences: HashMap<String, u64>,
}

impl IdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the id for the next cell with this content
    pub fn assign(&mut self, content: &str) -> String {
        assign_id(content, self)
    }

    /// How many times `content` has been assigned an id so far
    pub fn occurrences(&self, content: &str) -> u64 {
        self.occurrences
            .get(&content_hash(content))
            .copied()
            .unwrap_or(0)
    }
}

/// Deterministic hash of a cell's source: hex of the first bytes of its SHA-256
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    hex::encode(&digest[..HASH_BYTES])
}

/// Compute `"{hash}-{count:x}"` and bump the occurrence count for `hash`.
///
/// The first occurrence of a given content gets suffix `1`.
pub fn assign_id(content: &str, table: &mut IdTable) -> String {
    let hash = content_hash(content);
    let count = table.occurrences.entry(hash.clone()).or_insert(0);
    *count += 1;
    format!("{hash}-{:x}", *count)
}
