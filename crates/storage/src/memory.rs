//! In-memory backend.
//!
//! DashMap keyed by the raw key string, FxHash for fast non-crypto hashing.
//! Reads are lock-free; writes only lock the target shard. This is the
//! default backend and the one the test suites run against.

use crate::backend::Backend;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use vellum_core::{Payload, RawEntry, Result};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Volatile storage backend holding the whole namespace in memory.
///
/// Data lives exactly as long as the backend value; dropping it is the only
/// teardown. Suitable for tests, caches, and seeding fixtures.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, Payload, FxBuildHasher>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the backend holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Backend for MemoryBackend {
    fn put_if_absent(&self, key: &str, value: Payload) -> Result<bool> {
        // The entry guard holds the shard lock, making check-and-insert
        // atomic per key.
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(true)
            }
        }
    }

    fn get(&self, key: &str) -> Result<Option<Payload>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn scan_all(&self) -> Result<Vec<RawEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|entry| RawEntry::new(entry.key().clone(), entry.value().clone()))
            .collect())
    }
}
